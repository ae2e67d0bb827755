//! Drawings and the shared handle the registry, tool and host pass around.
//!
//! A drawing is a kind plus a fixed number of anchor slots. Identity is the
//! handle's allocation: two handles are equal only if they point at the same
//! drawing, never because their points happen to match.

pub mod hit_testing;

use crate::constants::ANCHOR_SLOTS;
use crate::error::{DrawingError, DrawingResult};
use crate::host::{AxisTransform, RenderSurface};
use crate::types::{DrawingVariant, Point, PointerEvent};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Whether a drawing is currently on the host surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Attachment {
    #[default]
    Detached,
    Attached,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Drawing {
    variant: DrawingVariant,
    points: Vec<Option<Point>>,
    attachment: Attachment,
    hovered: bool,
}

impl Drawing {
    /// New drawing with its first and last anchors set.
    pub fn new(variant: DrawingVariant, first: Point, last: Point) -> Self {
        let mut points = vec![None; ANCHOR_SLOTS];
        points[0] = Some(first);
        points[ANCHOR_SLOTS - 1] = Some(last);
        Self {
            variant,
            points,
            attachment: Attachment::Detached,
            hovered: false,
        }
    }

    /// New drawing with every anchor at `point`, the shape placement starts from.
    pub fn at(variant: DrawingVariant, point: Point) -> Self {
        Self::new(variant, point, point)
    }

    /// Build from an explicit slot list, e.g. when restoring a drawing the
    /// host kept around. Unplaced slots are `None`.
    pub fn from_points(variant: DrawingVariant, points: Vec<Option<Point>>) -> DrawingResult<Self> {
        check_arity(points.len())?;
        Ok(Self {
            variant,
            points,
            attachment: Attachment::Detached,
            hovered: false,
        })
    }

    pub fn variant(&self) -> DrawingVariant {
        self.variant
    }

    pub fn points(&self) -> &[Option<Point>] {
        &self.points
    }

    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied().flatten()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied().flatten()
    }

    /// Move the trailing anchor, leaving the others where they are.
    pub fn set_last_point(&mut self, point: Point) {
        if let Some(last) = self.points.last_mut() {
            *last = Some(point);
        }
    }

    /// Replace all anchors at once. The slot count cannot change.
    pub fn set_points(&mut self, points: Vec<Option<Point>>) -> DrawingResult<()> {
        if points.len() != self.points.len() {
            return Err(DrawingError::PointCountMismatch {
                expected: self.points.len(),
                actual: points.len(),
            });
        }
        self.points = points;
        Ok(())
    }

    pub fn attachment(&self) -> Attachment {
        self.attachment
    }

    pub fn is_attached(&self) -> bool {
        self.attachment == Attachment::Attached
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Recompute hover from the pointer position. Returns true if the hover
    /// state changed.
    pub fn update_hover<T>(&mut self, event: &PointerEvent, transform: &T, tolerance: f32) -> bool
    where
        T: AxisTransform + ?Sized,
    {
        let hovered = self.hit_test(event, transform, tolerance);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Whether the pointer is over this drawing. Drawings with an anchor the
    /// transform cannot project are never hit.
    pub fn hit_test<T>(&self, event: &PointerEvent, transform: &T, tolerance: f32) -> bool
    where
        T: AxisTransform + ?Sized,
    {
        let project = |p: Option<Point>| p.and_then(|p| transform.point_to_screen(&p));
        let (Some(first), Some(last)) = (project(self.first_point()), project(self.last_point()))
        else {
            return false;
        };
        hit_testing::hit_test(self.variant, first, last, (event.x, event.y), tolerance)
    }
}

fn check_arity(len: usize) -> DrawingResult<()> {
    if len != ANCHOR_SLOTS {
        return Err(DrawingError::PointCountMismatch {
            expected: ANCHOR_SLOTS,
            actual: len,
        });
    }
    Ok(())
}

/// Shared, reference-identified handle to a [`Drawing`].
///
/// Cloning the handle shares the drawing. Equality is pointer equality.
#[derive(Clone, Debug)]
pub struct DrawingHandle(Rc<RefCell<Drawing>>);

impl DrawingHandle {
    pub fn new(drawing: Drawing) -> Self {
        Self(Rc::new(RefCell::new(drawing)))
    }

    pub fn borrow(&self) -> Ref<'_, Drawing> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Drawing> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &DrawingHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn variant(&self) -> DrawingVariant {
        self.borrow().variant()
    }

    /// Snapshot of the anchor slots.
    pub fn points(&self) -> Vec<Option<Point>> {
        self.borrow().points().to_vec()
    }

    pub fn is_attached(&self) -> bool {
        self.borrow().is_attached()
    }

    pub fn is_hovered(&self) -> bool {
        self.borrow().is_hovered()
    }

    /// Put the drawing on the surface unless it is already there.
    pub(crate) fn attach<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        if self.is_attached() {
            return;
        }
        self.borrow_mut().attachment = Attachment::Attached;
        surface.attach(self);
    }

    /// Take the drawing off the surface if it is there.
    pub(crate) fn detach<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        if !self.is_attached() {
            return;
        }
        {
            let mut drawing = self.borrow_mut();
            drawing.attachment = Attachment::Detached;
            drawing.hovered = false;
        }
        surface.detach(self);
    }
}

impl From<Drawing> for DrawingHandle {
    fn from(drawing: Drawing) -> Self {
        Self::new(drawing)
    }
}

impl PartialEq for DrawingHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for DrawingHandle {}
