//! Pointer move handling - hover fan-out and preview rubber-banding.
//!
//! Called on every crosshair move, so the idle path is a single pass over the
//! registry with no allocation.

use crate::host::ChartHost;
use crate::tool::DrawingTool;
use crate::types::PointerEvent;

impl<H: ChartHost> DrawingTool<H> {
    /// Handle a pointer move delivered by the host.
    ///
    /// Every registered drawing re-evaluates its hover state, whether or not a
    /// placement is in progress. While placing, the preview's last anchor
    /// follows the pointer; off-plot moves leave it where it was.
    pub fn on_mouse_move(&mut self, event: &PointerEvent) {
        let tolerance = self.settings.effective_hover_tolerance();
        for drawing in self.registry.iter() {
            let changed = drawing
                .borrow_mut()
                .update_hover(event, &self.host, tolerance);
            if changed {
                self.host.hover_changed(drawing);
            }
        }

        let Some(preview) = self.state.preview().cloned() else {
            return;
        };
        let Some(point) = self.host.resolve(event) else {
            return;
        };
        preview.borrow_mut().set_last_point(point);
        self.host.points_changed(&preview);
        tracing::trace!(price = point.price, "Preview moved");
    }
}
