//! The drawing tool: placement session plus the committed drawings.
//!
//! The host owns the event source and forwards clicks and pointer moves to
//! [`DrawingTool::on_click`] and [`DrawingTool::on_mouse_move`] (see the
//! `input` module). Everything here runs synchronously on the host's UI
//! thread.

use crate::drawing::DrawingHandle;
use crate::host::ChartHost;
use crate::input::ToolState;
use crate::registry::DrawingRegistry;
use crate::reposition;
use crate::settings::ToolSettings;
use crate::types::DrawingVariant;

/// Callback fired when a placement finishes.
pub type FinishCallback = Box<dyn FnMut()>;

pub struct DrawingTool<H: ChartHost> {
    pub(crate) host: H,
    pub(crate) registry: DrawingRegistry,
    pub(crate) state: ToolState,
    pub(crate) settings: ToolSettings,
    on_finish: Option<FinishCallback>,
}

impl<H: ChartHost> DrawingTool<H> {
    pub fn new(host: H) -> Self {
        Self::with_settings(host, ToolSettings::default())
    }

    pub fn with_settings(host: H, settings: ToolSettings) -> Self {
        Self {
            host,
            registry: DrawingRegistry::new(),
            state: ToolState::Idle,
            settings,
            on_finish: None,
        }
    }

    // ========================================================================
    // Placement session
    // ========================================================================

    /// Select a kind to place. An unfinished placement is abandoned first.
    pub fn begin_drawing(&mut self, variant: DrawingVariant) {
        self.stop_drawing();
        self.state.start_placing(variant);
        tracing::debug!(%variant, "Drawing mode entered");
    }

    /// Leave drawing mode. An uncommitted preview is detached unless
    /// `detach_preview_on_stop` is off, in which case its visual stays on the
    /// surface and removing it is up to the caller.
    pub fn stop_drawing(&mut self) {
        let was_placing = self.state.is_placing();
        if let Some(preview) = self.state.reset() {
            if self.settings.detach_preview_on_stop {
                preview.detach(&mut self.host);
            }
            tracing::debug!("Uncommitted preview abandoned");
        }
        if was_placing {
            tracing::debug!("Drawing mode left");
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_placing()
    }

    pub fn pending_variant(&self) -> Option<DrawingVariant> {
        self.state.pending_variant()
    }

    /// The live preview, once the first click of a placement has landed.
    pub fn preview(&self) -> Option<&DrawingHandle> {
        self.state.preview()
    }

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    /// Register the callback fired once per completed placement (and once per
    /// full cycle of a self-erasing kind).
    pub fn set_finish_callback(&mut self, callback: impl FnMut() + 'static) {
        self.on_finish = Some(Box::new(callback));
    }

    pub fn clear_finish_callback(&mut self) {
        self.on_finish = None;
    }

    pub(crate) fn notify_finished(&mut self) {
        if let Some(callback) = self.on_finish.as_mut() {
            callback();
        }
    }

    // ========================================================================
    // Drawings
    // ========================================================================

    /// Add a drawing directly, bypassing click placement.
    pub fn add_new_drawing(&mut self, drawing: DrawingHandle) {
        if self.registry.contains(&drawing) {
            tracing::trace!("Drawing already registered");
            return;
        }
        self.registry.add(drawing, &mut self.host);
    }

    /// Remove a drawing. `None` and unknown drawings are ignored. Deleting the
    /// current preview abandons the placement. Returns true if something was
    /// removed.
    pub fn delete(&mut self, drawing: Option<&DrawingHandle>) -> bool {
        let Some(drawing) = drawing else {
            return false;
        };
        if self.state.preview().is_some_and(|p| p.ptr_eq(drawing)) {
            self.state.reset();
            drawing.detach(&mut self.host);
            tracing::debug!("Preview deleted, placement abandoned");
            return true;
        }
        self.registry.remove(Some(drawing), &mut self.host)
    }

    /// Detach and drop every committed drawing.
    pub fn clear_drawings(&mut self) {
        self.registry.clear(&mut self.host);
    }

    /// Re-derive logical slots of timestamp-anchored points after the host's
    /// time scale changed. Returns the number of drawings updated.
    pub fn reposition_on_time(&mut self) -> usize {
        reposition::reposition_all(&self.registry, &mut self.host, self.settings.fallback_logical)
    }

    pub fn drawings(&self) -> &[DrawingHandle] {
        self.registry.list()
    }

    pub fn registry(&self) -> &DrawingRegistry {
        &self.registry
    }

    // ========================================================================
    // Host and settings
    // ========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ToolSettings) {
        self.settings = settings;
    }
}
