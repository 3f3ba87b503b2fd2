//! Pointer up and leave - evaluate or abandon the gesture.

use crate::editor::{Editor, Effect};
use crate::input::coords::CoordinateConverter;
use crate::input::is_click;
use crate::profile_scope;
use crate::types::{Mode, Point};
use tracing::debug;

impl Editor {
    pub fn handle_pointer_up(&mut self, pos: Point) -> Vec<Effect> {
        profile_scope!("handle_pointer_up");

        let Some(origin) = self.input_state.finish() else {
            return Vec::new();
        };

        // Anything that moved past the tolerance was a drag, whatever the mode
        if !is_click(origin, pos, self.settings.click_tolerance_px) {
            debug!(mode = %self.mode, "Drag finished");
            return Vec::new();
        }

        match self.mode {
            Mode::Add => {
                let world = CoordinateConverter::screen_to_world(pos, &self.coordinate_context());
                self.mics.add(world).map(Effect::MicrophoneAdded).into_iter().collect()
            }
            Mode::Delete => {
                let Some(id) = self.hovered else {
                    return Vec::new();
                };
                let mut effects = Vec::new();
                if self.mics.remove(id).is_some() {
                    effects.push(Effect::MicrophoneRemoved(id));
                }
                self.hovered = None;
                effects.push(Effect::HoverChanged(None));
                effects
            }
            Mode::Edit => match self.hovered {
                Some(id) => self.open_edit(id).into_iter().collect(),
                None => Vec::new(),
            },
            Mode::Pan => Vec::new(),
        }
    }

    /// Pointer left the surface: drop any gesture without evaluating it.
    pub fn handle_pointer_leave(&mut self) -> Vec<Effect> {
        if self.input_state.is_dragging() {
            debug!("Gesture abandoned");
        }
        self.input_state.reset();
        self.set_hovered(None).into_iter().collect()
    }
}
