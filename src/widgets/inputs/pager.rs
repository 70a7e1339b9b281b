use std::cell::Cell;

use crate::core::config::LayoutConfig;
use crate::core::state::PaginationState;
use crate::runtime::event::WidgetAction;
use crate::terminal::{CursorPos, KeyCode, KeyEvent};
use crate::ui::span::{Span, SpanLine};
use crate::widgets::base::WidgetBase;
use crate::widgets::components::pagination::{
    PaginationController, PaginationView, SharedSlotRenderer, Slot, SlotIdentity, SlotKey,
    SlotRenderer,
};
use crate::widgets::traits::{
    DrawOutput, Drawable, FocusMode, InteractionResult, Interactive, RenderContext,
};

/// Keyboard-driven host for the pagination control.
///
/// The current page is owned by the caller: this widget mirrors it through
/// [`PagerInput::set_state`] and reports requested moves as
/// [`WidgetAction::PageRequested`]. The only thing it keeps is which control
/// has keyboard focus.
pub struct PagerInput {
    base: WidgetBase,
    config: LayoutConfig,
    state: PaginationState,
    renderer: Option<SharedSlotRenderer>,
    focus: Option<SlotIdentity>,
}

impl PagerInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(id, label),
            config: LayoutConfig::default(),
            state: PaginationState::default(),
            renderer: None,
            focus: None,
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_state(mut self, state: PaginationState) -> Self {
        self.state = state;
        self
    }

    pub fn with_renderer(mut self, renderer: SharedSlotRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Mirror the owner's state after it applied (or refused) a request.
    pub fn set_state(&mut self, state: PaginationState) {
        self.state = state;
    }

    /// Control that currently holds keyboard focus.
    pub fn focused_slot(&self) -> Option<SlotIdentity> {
        let focusable = self.focusable();
        let current = SlotIdentity::Page(self.state.current_page);
        self.focus
            .filter(|identity| focusable.contains(identity))
            .or_else(|| focusable.contains(&current).then_some(current))
            .or_else(|| focusable.first().copied())
    }

    fn focusable(&self) -> Vec<SlotIdentity> {
        let notify = |_: usize| {};
        let controller = PaginationController::new(self.state, &self.config, &notify);
        controller
            .slots()
            .iter()
            .filter_map(Slot::descriptor)
            .filter(|descriptor| !descriptor.is_disabled)
            .map(|descriptor| descriptor.identity)
            .collect()
    }

    fn move_focus(&mut self, delta: isize) -> InteractionResult {
        let focusable = self.focusable();
        let Some(focused) = self.focused_slot() else {
            return InteractionResult::ignored();
        };
        let len = focusable.len() as isize;
        let idx = focusable
            .iter()
            .position(|identity| *identity == focused)
            .unwrap_or(0) as isize;
        self.focus = Some(focusable[((idx + delta + len) % len) as usize]);
        InteractionResult::handled()
    }

    fn request(&self, trigger: impl FnOnce(&PaginationController<'_>) -> bool) -> InteractionResult {
        let requested = Cell::new(None);
        let notify = |page: usize| requested.set(Some(page));
        let controller = PaginationController::new(self.state, &self.config, &notify);
        trigger(&controller);

        match requested.get() {
            Some(page) => InteractionResult::with_action(WidgetAction::PageRequested {
                target: self.base.id().to_string(),
                page,
            }),
            None => InteractionResult::consumed(),
        }
    }

    fn render_view(&self) -> PaginationView {
        let notify = |_: usize| {};
        let controller = PaginationController::new(self.state, &self.config, &notify);
        let renderer = self
            .renderer
            .as_deref()
            .map(|renderer| renderer as &dyn SlotRenderer);
        controller.render(renderer)
    }

    fn label_prefix(&self) -> Option<Span> {
        let label = self.base.label();
        (!label.is_empty()).then(|| Span::new(format!("{label} ")))
    }
}

impl Drawable for PagerInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let mut view = self.render_view();
        if view.is_empty() {
            return DrawOutput::empty();
        }

        if self.base.is_focused(ctx)
            && let Some(focused) = self.focused_slot()
            && let Some(element) = view.element_mut(SlotKey::Control(focused))
        {
            element.span.style = element.span.style.underline();
        }

        let mut line = SpanLine::new();
        line.extend(self.label_prefix());
        line.extend(view.to_line());
        DrawOutput::line(line)
    }
}

impl Interactive for PagerInput {
    fn focus_mode(&self) -> FocusMode {
        if self.state.is_paginated() {
            FocusMode::Group
        } else {
            FocusMode::None
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if !self.state.is_paginated() {
            return InteractionResult::ignored();
        }

        let current = self.state.current_page;
        let total = self.state.total_pages;
        match key.code {
            KeyCode::Left => self.move_focus(-1),
            KeyCode::Right => self.move_focus(1),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focused_slot() {
                Some(identity) => self.request(|controller| controller.activate(identity)),
                None => InteractionResult::ignored(),
            },
            KeyCode::PageUp => {
                self.request(|controller| controller.change_page(current.saturating_sub(1)))
            }
            KeyCode::PageDown => {
                self.request(|controller| controller.change_page(current.saturating_add(1)))
            }
            KeyCode::Home => self.request(|controller| controller.change_page(1)),
            KeyCode::End => self.request(|controller| controller.change_page(total)),
            _ => InteractionResult::ignored(),
        }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        let focused = self.focused_slot()?;
        let view = self.render_view();
        let prefix = self.label_prefix().map_or(0, |span| span.width());
        let col = prefix + view.column_of(SlotKey::Control(focused))?;
        Some(CursorPos {
            col: u16::try_from(col).unwrap_or(u16::MAX),
            row: 0,
        })
    }
}
