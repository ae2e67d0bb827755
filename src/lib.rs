//! Click-driven drawing placement for time/price charts.
//!
//! A [`DrawingTool`] sits between a host chart and its pointer events. The
//! host forwards clicks and moves; the tool turns them into drawings anchored
//! in (time-or-logical, price) space, keeps the committed ones in paint order
//! and re-projects them when the time scale is re-indexed.
//!
//! ## Modules
//!
//! - `types` - Points, pointer events, drawing kinds and their placement policy
//! - `drawing` - Drawings, shared handles and hover hit testing
//! - `host` - Traits the host chart implements (axis transform, render surface)
//! - `registry` - Ordered collection of committed drawings
//! - `input` - Placement state machine and click/move handlers
//! - `reposition` - Anchor re-projection after time axis changes
//! - `settings` - JSON-loadable tool settings

pub mod constants;
pub mod drawing;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod registry;
pub mod reposition;
pub mod settings;
pub mod tool;
pub mod types;

pub use drawing::{Attachment, Drawing, DrawingHandle};
pub use error::{DrawingError, DrawingResult, SettingsError, SettingsResult};
pub use host::{AxisTransform, ChartHost, RenderSurface};
pub use input::ToolState;
pub use registry::DrawingRegistry;
pub use settings::ToolSettings;
pub use tool::{DrawingTool, FinishCallback};
pub use types::{DrawingVariant, LogicalIndex, PlacementPolicy, Point, PointerEvent, Timestamp};
