//! Seams to the host chart.
//!
//! The drawing tool never renders or subscribes to events itself. The host
//! supplies its coordinate transform and visual surface through these traits,
//! and forwards its click and crosshair-move events to
//! [`DrawingTool::on_click`](crate::DrawingTool::on_click) and
//! [`DrawingTool::on_mouse_move`](crate::DrawingTool::on_mouse_move).

use crate::drawing::DrawingHandle;
use crate::types::{LogicalIndex, Point, PointerEvent, Timestamp};

/// Coordinate transform of the host's time and price scales.
///
/// Every method returns `None` when the input falls outside what the scale
/// can currently map (off-plot pointer, timestamp not on the axis, ...).
pub trait AxisTransform {
    /// Resolve a pointer position to a chart-space point.
    fn resolve(&self, event: &PointerEvent) -> Option<Point>;

    /// Timestamp to horizontal surface coordinate.
    fn time_to_coordinate(&self, time: Timestamp) -> Option<f32>;

    /// Horizontal surface coordinate to logical slot.
    fn coordinate_to_logical(&self, x: f32) -> Option<LogicalIndex>;

    /// Logical slot to horizontal surface coordinate.
    fn logical_to_coordinate(&self, logical: LogicalIndex) -> Option<f32>;

    /// Price to vertical surface coordinate.
    fn price_to_coordinate(&self, price: f64) -> Option<f32>;

    /// Horizontal coordinate of a point, honouring `time` over `logical`.
    fn point_x(&self, point: &Point) -> Option<f32> {
        match point.time {
            Some(time) => self.time_to_coordinate(time),
            None => point.logical.and_then(|l| self.logical_to_coordinate(l)),
        }
    }

    /// Surface position of a point.
    fn point_to_screen(&self, point: &Point) -> Option<(f32, f32)> {
        Some((self.point_x(point)?, self.price_to_coordinate(point.price)?))
    }
}

/// The visual surface drawings are attached to.
pub trait RenderSurface {
    /// Make a drawing visible. Called once per attachment.
    fn attach(&mut self, drawing: &DrawingHandle);

    /// Remove a drawing's visual.
    fn detach(&mut self, drawing: &DrawingHandle);

    /// A drawing's points changed; repaint it.
    fn points_changed(&mut self, _drawing: &DrawingHandle) {}

    /// A drawing's hover highlight flipped.
    fn hover_changed(&mut self, _drawing: &DrawingHandle) {}
}

/// A host chart: transform plus surface.
pub trait ChartHost: AxisTransform + RenderSurface {}

impl<T: AxisTransform + RenderSurface> ChartHost for T {}
