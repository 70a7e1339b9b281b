use super::render::SlotElement;
use super::slot::SlotKey;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;
use crate::widgets::traits::DrawOutput;

const SEPARATOR: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub key: SlotKey,
    pub element: SlotElement,
}

/// Rendered control: one element per visible slot, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationView {
    entries: Vec<ViewEntry>,
    container: Style,
}

impl PaginationView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_container(container: Style) -> Self {
        Self {
            entries: Vec::new(),
            container,
        }
    }

    pub fn container(&self) -> Style {
        self.container
    }

    pub(crate) fn push(&mut self, key: SlotKey, element: SlotElement) {
        self.entries.push(ViewEntry { key, element });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    pub fn element(&self, key: SlotKey) -> Option<&SlotElement> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.element)
    }

    pub(crate) fn element_mut(&mut self, key: SlotKey) -> Option<&mut SlotElement> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.element)
    }

    /// The entry flagged as the current page, if it is visible.
    pub fn current(&self) -> Option<&ViewEntry> {
        self.entries.iter().find(|entry| entry.element.current)
    }

    /// Display column where `key` starts in [`Self::to_line`].
    pub fn column_of(&self, key: SlotKey) -> Option<usize> {
        let separator = Span::new(SEPARATOR).width();
        let mut col = 0;
        for entry in &self.entries {
            if entry.key == key {
                return Some(col);
            }
            col += entry.element.span.width() + separator;
        }
        None
    }

    pub fn to_line(&self) -> SpanLine {
        let mut line = SpanLine::with_capacity(self.entries.len() * 2);
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                line.push(Span::styled(SEPARATOR, self.container));
            }
            line.push(entry.element.span.clone());
        }
        line
    }

    pub fn into_draw_output(self) -> DrawOutput {
        if self.is_empty() {
            return DrawOutput::empty();
        }
        DrawOutput::line(self.to_line())
    }
}
