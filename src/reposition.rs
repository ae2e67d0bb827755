//! Re-projection of drawing anchors after the time axis changes.
//!
//! When new data arrives the host may re-index its time scale, so the logical
//! slot cached in a timestamp-anchored point goes stale. Re-deriving it from
//! the timestamp keeps the drawing pinned to the right historical bar. Points
//! placed purely by logical slot are axis-relative and carried over as-is.

use crate::drawing::DrawingHandle;
use crate::host::{AxisTransform, ChartHost};
use crate::registry::DrawingRegistry;
use crate::types::{LogicalIndex, Point};

/// Re-derive the logical slot of a single point.
///
/// Price is never touched. A timestamp that no longer maps onto the scale
/// gets `fallback` rather than being dropped.
pub fn reproject_point<T>(point: Point, transform: &T, fallback: LogicalIndex) -> Point
where
    T: AxisTransform + ?Sized,
{
    let logical = match point.time {
        Some(time) => Some(
            transform
                .time_to_coordinate(time)
                .and_then(|x| transform.coordinate_to_logical(x))
                .unwrap_or_else(|| {
                    tracing::trace!(time, fallback, "Timestamp off the time scale, using fallback slot");
                    fallback
                }),
        ),
        None => point.logical,
    };
    Point { logical, ..point }
}

/// Recompute the anchors of one drawing and apply them in a single update.
pub fn reposition_drawing<H>(drawing: &DrawingHandle, host: &mut H, fallback: LogicalIndex)
where
    H: ChartHost + ?Sized,
{
    let points: Vec<Option<Point>> = drawing
        .borrow()
        .points()
        .iter()
        .map(|slot| slot.map(|p| reproject_point(p, &*host, fallback)))
        .collect();

    if let Err(e) = drawing.borrow_mut().set_points(points) {
        tracing::warn!("Skipping reposition: {}", e);
        return;
    }
    host.points_changed(drawing);
}

/// Reposition every registered drawing. Returns how many were updated.
pub fn reposition_all<H>(registry: &DrawingRegistry, host: &mut H, fallback: LogicalIndex) -> usize
where
    H: ChartHost + ?Sized,
{
    for drawing in registry.iter() {
        reposition_drawing(drawing, host, fallback);
    }
    tracing::debug!(count = registry.len(), "Repositioned drawings on time scale");
    registry.len()
}
