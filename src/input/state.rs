//! Input state machine - drag sub-state of the board.
//!
//! The active `Mode` is orthogonal to this state: mode decides what a finished
//! gesture means, this state only records whether a gesture is in progress.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (pointer down)
//! Dragging -> Dragging (pointer move, last_pos updated)
//! Dragging -> Idle     (pointer up - gesture evaluated)
//! Dragging -> Idle     (pointer leave - gesture abandoned)
//! ```

use crate::types::Point;

/// Unified drag state for pointer interactions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Between a pointer down and the matching pointer up or leave
    Dragging {
        /// Screen position of the pointer down, used for click detection
        origin: Point,
        /// Last recorded position, used for pan deltas
        last_pos: Point,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Start a gesture at the given screen position
    pub fn start_drag(&mut self, pos: Point) {
        *self = Self::Dragging {
            origin: pos,
            last_pos: pos,
        };
    }

    pub fn origin(&self) -> Option<Point> {
        match self {
            Self::Dragging { origin, .. } => Some(*origin),
            Self::Idle => None,
        }
    }

    pub fn last_pos(&self) -> Option<Point> {
        match self {
            Self::Dragging { last_pos, .. } => Some(*last_pos),
            Self::Idle => None,
        }
    }

    /// Record a new pointer position and return the delta from the previous one
    pub fn advance(&mut self, pos: Point) -> Option<Point> {
        match self {
            Self::Dragging { last_pos, .. } => {
                let delta = pos.delta_from(*last_pos);
                *last_pos = pos;
                Some(delta)
            }
            Self::Idle => None,
        }
    }

    /// End the gesture, returning its origin if one was in progress
    pub fn finish(&mut self) -> Option<Point> {
        let origin = self.origin();
        *self = Self::Idle;
        origin
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Whether a gesture stayed within `tolerance` pixels of its origin on both axes
#[inline]
pub fn is_click(origin: Point, current: Point, tolerance: f64) -> bool {
    (current.x - origin.x).abs() < tolerance && (current.y - origin.y).abs() < tolerance
}
