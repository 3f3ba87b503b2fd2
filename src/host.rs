//! Capabilities the editor needs from its host platform.
//!
//! Keyboard, pointer and clipboard plumbing stay on the host side; the editor
//! only sees these two small traits.

use crate::editor::EditorEvent;
use std::collections::VecDeque;

/// Delivers input events in the order the platform produced them.
pub trait InputSource {
    fn next_event(&mut self) -> Option<EditorEvent>;
}

/// Receives exported text for the system clipboard.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

impl InputSource for VecDeque<EditorEvent> {
    fn next_event(&mut self) -> Option<EditorEvent> {
        self.pop_front()
    }
}

/// Clipboard that keeps the last written text in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
