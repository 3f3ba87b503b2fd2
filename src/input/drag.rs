//! Pointer move - hover tracking and panning.
//!
//! Move events arrive many times per second while dragging; only pan mode
//! does work here; every other mode waits for the pointer up.

use crate::editor::{Editor, Effect};
use crate::profile_scope;
use crate::types::{Mode, Point};
use tracing::trace;

impl Editor {
    pub fn handle_pointer_move(&mut self, pos: Point) -> Vec<Effect> {
        profile_scope!("handle_pointer_move");

        let mut effects = Vec::new();
        effects.extend(self.refresh_hover(pos));

        if self.mode != Mode::Pan {
            return effects;
        }

        // Delta is measured from the last move, not the gesture origin
        if let Some(delta) = self.input_state.advance(pos) {
            self.view.pan_by(delta);
            trace!(dx = delta.x, dy = delta.y, "Pan");
            effects.push(Effect::ViewChanged(self.view));
        }
        effects
    }
}
