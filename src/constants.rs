//! Crate-wide constants.
//!
//! Centralizes the defaults the settings layer falls back to.

use crate::types::LogicalIndex;

/// Anchor slots every drawing carries (start, end). Single-click kinds keep
/// both slots equal.
pub const ANCHOR_SLOTS: usize = 2;

/// Default pointer distance, in pixels, that still counts as hovering a drawing
pub const DEFAULT_HOVER_TOLERANCE_PX: f32 = 6.0;

/// Smallest hit area regardless of configured tolerance
pub const MIN_HIT_AREA: f32 = 2.0;

/// Logical slot used when a timestamp no longer maps onto the time scale
pub const DEFAULT_FALLBACK_LOGICAL: LogicalIndex = 0;

/// Segments shorter than this (squared pixels) are hit-tested as a point
pub const DEGENERATE_SEGMENT_LEN_SQ: f32 = 0.0001;

/// Default `RUST_LOG` directive used by [`crate::logging::init`]
pub const DEFAULT_LOG_FILTER: &str = "chart_drawings=info";
