//! Click handling - create the preview, then commit or discard it.

use crate::drawing::{Drawing, DrawingHandle};
use crate::host::ChartHost;
use crate::tool::DrawingTool;
use crate::types::{DrawingVariant, Point, PointerEvent};

impl<H: ChartHost> DrawingTool<H> {
    /// Handle a click delivered by the host.
    ///
    /// Ignored when no kind is being placed or the click is off the plot.
    /// Single-click kinds create and complete the preview within this call,
    /// reusing the point resolved for the physical click.
    pub fn on_click(&mut self, event: &PointerEvent) {
        let Some(variant) = self.state.pending_variant() else {
            tracing::trace!("Click ignored, not placing");
            return;
        };
        let Some(point) = self.host.resolve(event) else {
            tracing::trace!(x = event.x, y = event.y, "Click ignored, off plot");
            return;
        };

        match self.state.preview().cloned() {
            Some(preview) => self.complete_placement(variant, preview),
            None => {
                let preview = self.start_preview(variant, point);
                if variant.is_single_click() {
                    self.complete_placement(variant, preview);
                }
            }
        }
    }

    fn start_preview(&mut self, variant: DrawingVariant, point: Point) -> DrawingHandle {
        let preview = DrawingHandle::new(Drawing::at(variant, point));
        preview.attach(&mut self.host);
        self.state.set_preview(preview.clone());
        tracing::debug!(%variant, price = point.price, "Placement started");
        preview
    }

    /// Commit the preview as previewed, or discard it for self-erasing kinds.
    /// Self-erasing kinds stay armed for the next cycle.
    fn complete_placement(&mut self, variant: DrawingVariant, preview: DrawingHandle) {
        if variant.is_self_erasing() {
            self.state.clear_preview();
            preview.detach(&mut self.host);
            tracing::debug!(%variant, "Self-erasing drawing discarded");
        } else {
            self.state.reset();
            self.registry.add(preview, &mut self.host);
            tracing::debug!(%variant, "Placement committed");
        }

        self.notify_finished();
    }
}
