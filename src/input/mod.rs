//! Pointer input handling for the drawing tool.
//!
//! ## Architecture
//!
//! The tool uses an explicit state machine (`ToolState`) to track whether a
//! drawing kind is being placed and whether its live preview exists yet.
//!
//! ## Modules
//!
//! - `state` - Placement state machine enum and helper methods
//! - `click` - Click handling (create preview, commit, self-erasing discard)
//! - `pointer_move` - Move handling (hover fan-out, preview rubber-banding)

mod click;
mod pointer_move;
mod state;

pub use state::ToolState;
