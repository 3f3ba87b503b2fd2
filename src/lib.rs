//! Micboard - place, edit and export microphone positions on a 2D plane.
//!
//! The crate is the interaction core of a pannable, zoomable board: coordinate
//! transforms, the pointer state machine, the microphone collection and the
//! exporters. Rendering, dialogs, keyboard wiring and the clipboard belong to
//! the host, which talks to the core through [`editor::Editor`] and the
//! capability traits in [`host`].

pub mod constants;
pub mod edit_form;
pub mod editor;
pub mod error;
pub mod export;
pub mod grid;
pub mod host;
pub mod input;
pub mod mic_set;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use editor::{Editor, EditorEvent, Effect};
