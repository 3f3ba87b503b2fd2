//! Pointer input handling for the board.
//!
//! ## Architecture
//!
//! The drag sub-state is an explicit state machine (`InputState`); the active
//! `Mode` decides what a completed click means. Handlers are methods on
//! `Editor` that mutate its owned state and return the resulting `Effect`s.
//!
//! ## Modules
//!
//! - `state` - Drag state machine and click detection
//! - `coords` - World/screen coordinate conversion
//! - `mouse_down` - Pointer down (gesture start)
//! - `drag` - Pointer move (hover refresh, panning)
//! - `mouse_up` - Pointer up and leave (gesture evaluation)
//! - `transform` - Zoom, view reset and viewport resize

pub mod coords;
mod state;
mod mouse_down;
mod mouse_up;
mod drag;
mod transform;

pub use state::{InputState, is_click};
