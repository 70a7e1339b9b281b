use crate::terminal::{KeyEvent, TerminalSize};
use crossterm::event::{Event, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Resize(TerminalSize),
}

impl TerminalEvent {
    /// Translate a crossterm event. Key releases and repeats, mouse, focus
    /// and paste events are dropped.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key.into())),
            Event::Resize(width, height) => Some(Self::Resize(TerminalSize { width, height })),
            _ => None,
        }
    }
}
