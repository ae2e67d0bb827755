//! Tool settings.
//!
//! Loaded from JSON; missing fields fall back to the defaults in
//! [`crate::constants`].

use crate::constants::{DEFAULT_FALLBACK_LOGICAL, DEFAULT_HOVER_TOLERANCE_PX, MIN_HIT_AREA};
use crate::error::{SettingsError, SettingsResult};
use crate::types::LogicalIndex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Pointer distance in pixels that still counts as hovering a drawing
    pub hover_tolerance_px: f32,
    /// Logical slot assigned when a timestamp drops off the time scale
    pub fallback_logical: LogicalIndex,
    /// Whether `stop_drawing` also removes an uncommitted preview's visual
    pub detach_preview_on_stop: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            hover_tolerance_px: DEFAULT_HOVER_TOLERANCE_PX,
            fallback_logical: DEFAULT_FALLBACK_LOGICAL,
            detach_preview_on_stop: true,
        }
    }
}

impl ToolSettings {
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> SettingsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded tool settings");
        Ok(settings)
    }

    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !self.hover_tolerance_px.is_finite() || self.hover_tolerance_px < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "hover_tolerance_px must be a non-negative number, got {}",
                self.hover_tolerance_px
            )));
        }
        Ok(())
    }

    /// Tolerance actually used for hit tests.
    #[inline]
    pub fn effective_hover_tolerance(&self) -> f32 {
        self.hover_tolerance_px.max(MIN_HIT_AREA)
    }
}
