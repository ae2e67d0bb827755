//! Ordered collection of committed drawings.
//!
//! Insertion order is paint order: the first drawing added is painted first,
//! later ones sit on top. Every drawing in the registry is attached to the
//! surface; removal always detaches before dropping.

use crate::drawing::DrawingHandle;
use crate::host::RenderSurface;

#[derive(Debug, Default)]
pub struct DrawingRegistry {
    drawings: Vec<DrawingHandle>,
}

impl DrawingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `drawing` (if it isn't already, e.g. a live preview) and append it.
    pub fn add<S: RenderSurface + ?Sized>(&mut self, drawing: DrawingHandle, surface: &mut S) {
        drawing.attach(surface);
        self.drawings.push(drawing);
        tracing::debug!(count = self.drawings.len(), "Drawing added");
    }

    /// Detach and remove `drawing`. Returns false for `None` or a drawing
    /// that isn't registered.
    pub fn remove<S: RenderSurface + ?Sized>(
        &mut self,
        drawing: Option<&DrawingHandle>,
        surface: &mut S,
    ) -> bool {
        let Some(drawing) = drawing else {
            return false;
        };
        let Some(index) = self.position(drawing) else {
            tracing::trace!("Remove ignored, drawing not registered");
            return false;
        };
        let removed = self.drawings.remove(index);
        removed.detach(surface);
        tracing::debug!(count = self.drawings.len(), "Drawing removed");
        true
    }

    /// Detach every drawing, then empty the registry.
    pub fn clear<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.drawings.is_empty() {
            return;
        }
        for drawing in &self.drawings {
            drawing.detach(surface);
        }
        let cleared = self.drawings.len();
        self.drawings.clear();
        tracing::debug!(cleared, "Drawings cleared");
    }

    pub fn list(&self) -> &[DrawingHandle] {
        &self.drawings
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawingHandle> {
        self.drawings.iter()
    }

    pub fn contains(&self, drawing: &DrawingHandle) -> bool {
        self.position(drawing).is_some()
    }

    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    fn position(&self, drawing: &DrawingHandle) -> Option<usize> {
        self.drawings.iter().position(|d| d.ptr_eq(drawing))
    }
}
