//! Core value types shared by the drawing tool.
//!
//! Points are expressed in chart space (time-or-logical, price). Screen
//! positions only appear in [`PointerEvent`] and in the host transform.

use crate::error::DrawingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UTC timestamp in seconds, as used by the host's time scale.
pub type Timestamp = i64;

/// Host-assigned bar slot along the time axis.
pub type LogicalIndex = i64;

/// An anchor in chart space.
///
/// `time` is authoritative when present. `logical` is kept alongside it as a
/// cached projection and becomes authoritative only for points placed where
/// no timestamp exists (e.g. past the last bar).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub time: Option<Timestamp>,
    pub logical: Option<LogicalIndex>,
    pub price: f64,
}

impl Point {
    pub fn new(time: Option<Timestamp>, logical: Option<LogicalIndex>, price: f64) -> Self {
        Self {
            time,
            logical,
            price,
        }
    }

    /// Point anchored to a timestamp.
    pub fn at_time(time: Timestamp, price: f64) -> Self {
        Self::new(Some(time), None, price)
    }

    /// Point anchored purely to a logical slot.
    pub fn at_logical(logical: LogicalIndex, price: f64) -> Self {
        Self::new(None, Some(logical), price)
    }

    /// Returns true if the horizontal coordinate is a timestamp.
    #[inline]
    pub fn is_time_anchored(&self) -> bool {
        self.time.is_some()
    }
}

/// Pointer position in surface pixels, as delivered by the host's click and
/// crosshair-move subscriptions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// How a drawing kind is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementPolicy {
    /// Physical clicks needed to complete placement (1 or 2).
    pub required_clicks: u8,
    /// Self-erasing kinds are detached on their last click and never reach
    /// the registry.
    pub self_erasing: bool,
}

/// The closed set of drawing kinds the toolbox can place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawingVariant {
    #[default]
    TrendLine,
    HorizontalLine,
    VerticalLine,
    RayLine,
    Box,
    Measure,
}

impl DrawingVariant {
    pub const ALL: [DrawingVariant; 6] = [
        DrawingVariant::TrendLine,
        DrawingVariant::HorizontalLine,
        DrawingVariant::VerticalLine,
        DrawingVariant::RayLine,
        DrawingVariant::Box,
        DrawingVariant::Measure,
    ];

    pub fn policy(self) -> PlacementPolicy {
        match self {
            Self::HorizontalLine | Self::VerticalLine | Self::RayLine => PlacementPolicy {
                required_clicks: 1,
                self_erasing: false,
            },
            Self::TrendLine | Self::Box => PlacementPolicy {
                required_clicks: 2,
                self_erasing: false,
            },
            Self::Measure => PlacementPolicy {
                required_clicks: 2,
                self_erasing: true,
            },
        }
    }

    #[inline]
    pub fn is_single_click(self) -> bool {
        self.policy().required_clicks == 1
    }

    #[inline]
    pub fn is_self_erasing(self) -> bool {
        self.policy().self_erasing
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::TrendLine => "trend-line",
            Self::HorizontalLine => "horizontal-line",
            Self::VerticalLine => "vertical-line",
            Self::RayLine => "ray-line",
            Self::Box => "box",
            Self::Measure => "measure",
        }
    }
}

impl fmt::Display for DrawingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrawingVariant {
    type Err = DrawingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DrawingError::UnknownVariant(s.to_string()))
    }
}
