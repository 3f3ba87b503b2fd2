//! View transformations - zoom, reset and viewport resize.

use crate::editor::{Editor, Effect};
use crate::input::coords::CoordinateConverter;
use crate::types::{Point, ViewState, ViewportGeometry};
use tracing::debug;

impl Editor {
    pub fn zoom_in(&mut self) -> Option<Effect> {
        let before = self.view;
        self.view.zoom_in();
        self.view_effect(before)
    }

    pub fn zoom_out(&mut self) -> Option<Effect> {
        let before = self.view;
        self.view.zoom_out();
        self.view_effect(before)
    }

    /// Back to the configured zoom with no pan
    pub fn reset_view(&mut self) -> Option<Effect> {
        let before = self.view;
        self.view.reset(self.settings.default_zoom);
        self.view_effect(before)
    }

    pub fn resize(&mut self, viewport: ViewportGeometry) {
        debug!(width = viewport.width, height = viewport.height, "Viewport resized");
        self.viewport = viewport;
    }

    /// Screen position to world position under the current view
    pub fn screen_to_world(&self, screen: Point) -> Point {
        CoordinateConverter::screen_to_world(screen, &self.coordinate_context())
    }

    /// World position to screen position under the current view
    pub fn world_to_screen(&self, world: Point) -> Point {
        CoordinateConverter::world_to_screen(world, &self.coordinate_context())
    }

    fn view_effect(&self, before: ViewState) -> Option<Effect> {
        if self.view == before {
            return None;
        }
        debug!(zoom = self.view.zoom(), "View changed");
        Some(Effect::ViewChanged(self.view))
    }
}
