//! Pointer down - starts a gesture.

use crate::editor::{Editor, Effect};
use crate::profile_scope;
use crate::types::Point;
use tracing::trace;

impl Editor {
    pub fn handle_pointer_down(&mut self, pos: Point) -> Vec<Effect> {
        profile_scope!("handle_pointer_down");

        let mut effects = Vec::new();
        effects.extend(self.refresh_hover(pos));

        self.input_state.start_drag(pos);
        trace!(x = pos.x, y = pos.y, mode = %self.mode, "Gesture started");
        effects
    }
}
