//! Hit testing functions for detecting pointer hover over drawings.
//!
//! Everything here works in surface pixels; anchors are projected through the
//! host transform before they get here.

use crate::constants::DEGENERATE_SEGMENT_LEN_SQ;
use crate::types::DrawingVariant;

/// Surface position in pixels
pub type ScreenPos = (f32, f32);

#[inline]
fn distance(a: ScreenPos, b: ScreenPos) -> f32 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

/// Check if a point is within a given distance of a line segment
pub fn point_near_segment(
    point: ScreenPos,
    seg_start: ScreenPos,
    seg_end: ScreenPos,
    threshold: f32,
) -> bool {
    let line = (seg_end.0 - seg_start.0, seg_end.1 - seg_start.1);
    let line_len_sq = line.0 * line.0 + line.1 * line.1;

    if line_len_sq < DEGENERATE_SEGMENT_LEN_SQ {
        // Segment is essentially a point
        return distance(point, seg_start) <= threshold;
    }

    // Project point onto line, clamped to segment
    let t = (((point.0 - seg_start.0) * line.0 + (point.1 - seg_start.1) * line.1) / line_len_sq)
        .clamp(0.0, 1.0);
    let projection = (seg_start.0 + line.0 * t, seg_start.1 + line.1 * t);

    distance(point, projection) <= threshold
}

/// Check if a point lies inside the rectangle spanned by two corners,
/// grown by `padding` on every side
pub fn point_in_rect(point: ScreenPos, a: ScreenPos, b: ScreenPos, padding: f32) -> bool {
    let (min_x, max_x) = (a.0.min(b.0) - padding, a.0.max(b.0) + padding);
    let (min_y, max_y) = (a.1.min(b.1) - padding, a.1.max(b.1) + padding);
    point.0 >= min_x && point.0 <= max_x && point.1 >= min_y && point.1 <= max_y
}

/// Hover test for a drawing kind given its projected anchors.
pub fn hit_test(
    variant: DrawingVariant,
    first: ScreenPos,
    last: ScreenPos,
    pointer: ScreenPos,
    tolerance: f32,
) -> bool {
    match variant {
        DrawingVariant::HorizontalLine => (pointer.1 - first.1).abs() <= tolerance,
        DrawingVariant::VerticalLine => (pointer.0 - first.0).abs() <= tolerance,
        DrawingVariant::RayLine => {
            (pointer.1 - first.1).abs() <= tolerance && pointer.0 >= first.0 - tolerance
        }
        DrawingVariant::TrendLine => point_near_segment(pointer, first, last, tolerance),
        DrawingVariant::Box => point_in_rect(pointer, first, last, tolerance),
        DrawingVariant::Measure => point_in_rect(pointer, first, last, 0.0),
    }
}
