//! Placement state machine for the drawing tool.
//!
//! A single explicit state replaces separate "is drawing", "pending kind",
//! "active drawing" and "measure click count" flags, so a preview can only
//! exist while placing.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Placing { preview: None }     (begin_drawing)
//! Placing { None } -> Placing { Some }  (first click: preview created and attached)
//! Placing { Some } -> Idle              (last click: commit)
//! Placing { Some } -> Placing { None }  (last click of a self-erasing kind: discard)
//! Any -> Idle                           (stop_drawing)
//! ```

use crate::drawing::DrawingHandle;
use crate::types::DrawingVariant;

#[derive(Clone, Debug, Default)]
pub enum ToolState {
    /// Not placing anything; clicks are ignored
    #[default]
    Idle,

    /// A drawing kind is selected and waiting for clicks
    Placing {
        /// Kind being placed
        variant: DrawingVariant,
        /// Drawing attached for live preview after the first click
        preview: Option<DrawingHandle>,
    },
}

impl ToolState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drawing kind is selected
    pub fn is_placing(&self) -> bool {
        matches!(self, Self::Placing { .. })
    }

    /// Get the kind being placed, if any
    pub fn pending_variant(&self) -> Option<DrawingVariant> {
        match self {
            Self::Placing { variant, .. } => Some(*variant),
            Self::Idle => None,
        }
    }

    /// Get the live preview, if the first click has happened
    pub fn preview(&self) -> Option<&DrawingHandle> {
        match self {
            Self::Placing { preview, .. } => preview.as_ref(),
            Self::Idle => None,
        }
    }

    /// Start placing `variant` with no preview yet
    pub fn start_placing(&mut self, variant: DrawingVariant) {
        *self = Self::Placing {
            variant,
            preview: None,
        };
    }

    /// Record the preview created by the first click. Ignored when idle.
    pub fn set_preview(&mut self, drawing: DrawingHandle) {
        if let Self::Placing { preview, .. } = self {
            *preview = Some(drawing);
        }
    }

    /// Drop the preview but keep placing the same kind
    pub fn clear_preview(&mut self) -> Option<DrawingHandle> {
        match self {
            Self::Placing { preview, .. } => preview.take(),
            Self::Idle => None,
        }
    }

    /// Reset to Idle, handing back the uncommitted preview if there was one
    pub fn reset(&mut self) -> Option<DrawingHandle> {
        match std::mem::take(self) {
            Self::Placing { preview, .. } => preview,
            Self::Idle => None,
        }
    }
}
