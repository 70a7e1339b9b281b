use crate::runtime::event::WidgetAction;
use crate::terminal::{CursorPos, KeyEvent, TerminalSize};
use crate::ui::span::SpanLine;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    /// Node does not participate in focus cycling.
    None,
    /// A component that manages focus internally among its own slots.
    Group,
}

// ---------------------------------------------------------------------------
// Render context & output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub focused_id: Option<String>,
    pub terminal_size: TerminalSize,
}

impl RenderContext {
    pub fn focused(id: impl Into<String>) -> Self {
        Self {
            focused_id: Some(id.into()),
            terminal_size: TerminalSize::default(),
        }
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id.as_deref() == Some(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

impl DrawOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn line(line: SpanLine) -> Self {
        Self { lines: vec![line] }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Drawable — every node can draw itself
// ---------------------------------------------------------------------------

pub trait Drawable: Send {
    fn id(&self) -> &str;
    fn label(&self) -> &str {
        ""
    }
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

// ---------------------------------------------------------------------------
// InteractionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self {
            handled: true,
            request_render: false,
            actions: Vec::new(),
        }
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }

    pub fn merge(&mut self, other: Self) {
        self.handled |= other.handled;
        self.request_render |= other.request_render;
        self.actions.extend(other.actions);
    }
}

// ---------------------------------------------------------------------------
// Interactive — input nodes
// ---------------------------------------------------------------------------

pub trait Interactive: Send {
    fn focus_mode(&self) -> FocusMode;

    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    fn cursor_pos(&self) -> Option<CursorPos> {
        None
    }
}
