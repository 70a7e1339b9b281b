use std::sync::Arc;

use super::slot::SlotDescriptor;
use crate::core::config::SlotStyles;
use crate::core::range::EllipsisId;
use crate::ui::span::Span;

/// Visual element produced for one slot.
///
/// `current` marks the page the user is on for assistive output; `disabled`
/// mirrors the slot's interactive state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotElement {
    pub span: Span,
    pub current: bool,
    pub disabled: bool,
}

impl SlotElement {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            current: false,
            disabled: false,
        }
    }

    pub fn with_current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl From<Span> for SlotElement {
    fn from(span: Span) -> Self {
        Self::new(span)
    }
}

/// Rendering capability substituted for the built-in renderer.
pub trait SlotRenderer {
    fn render_slot(&self, slot: &SlotDescriptor<'_>) -> SlotElement;

    /// Override the truncation marker. `None` keeps the configured one.
    fn render_ellipsis(&self, _id: EllipsisId) -> Option<SlotElement> {
        None
    }
}

impl<F> SlotRenderer for F
where
    F: Fn(&SlotDescriptor<'_>) -> SlotElement,
{
    fn render_slot(&self, slot: &SlotDescriptor<'_>) -> SlotElement {
        self(slot)
    }
}

pub type SharedSlotRenderer = Arc<dyn SlotRenderer + Send + Sync>;

/// Built-in renderer: padded label, base style layered with the active and
/// disabled styles.
#[derive(Debug, Clone, Default)]
pub struct DefaultSlotRenderer {
    styles: SlotStyles,
}

impl DefaultSlotRenderer {
    pub fn new(styles: SlotStyles) -> Self {
        Self { styles }
    }
}

impl SlotRenderer for DefaultSlotRenderer {
    fn render_slot(&self, slot: &SlotDescriptor<'_>) -> SlotElement {
        let mut style = self.styles.base;
        if slot.is_active {
            style = style.merge(self.styles.active);
        }
        if slot.is_disabled {
            style = style.merge(self.styles.disabled);
        }

        SlotElement::new(Span::styled(format!(" {} ", slot.label), style))
            .with_current(slot.is_active)
            .with_disabled(slot.is_disabled)
    }
}

pub fn default_slot_renderer(styles: SlotStyles) -> SharedSlotRenderer {
    Arc::new(DefaultSlotRenderer::new(styles))
}

#[cfg(test)]
mod tests {
    use super::{DefaultSlotRenderer, SlotRenderer};
    use crate::core::config::SlotStyles;
    use crate::core::state::PaginationState;
    use crate::ui::style::Color;
    use crate::widgets::components::pagination::slot::{
        PageRequester, SlotDescriptor, SlotIdentity,
    };

    fn noop(_: usize) {}

    #[test]
    fn active_slot_gets_active_style_and_current_flag() {
        let requester = PageRequester::new(PaginationState::new(2, 5), false, &noop);
        let slot = SlotDescriptor::new(SlotIdentity::Page(2), true, false, "2".into(), &requester);

        let element = DefaultSlotRenderer::default().render_slot(&slot);
        assert_eq!(element.span.text, " 2 ");
        assert!(element.current);
        assert!(!element.disabled);
        assert_eq!(element.span.style.background, Some(Color::Blue));
        assert!(element.span.style.bold);
    }

    #[test]
    fn disabled_slot_is_dimmed_but_keeps_base_color() {
        let requester = PageRequester::new(PaginationState::new(1, 5), false, &noop);
        let slot = SlotDescriptor::new(
            SlotIdentity::Previous,
            false,
            true,
            "← Previous".into(),
            &requester,
        );

        let styles = SlotStyles::default();
        let element = DefaultSlotRenderer::new(styles).render_slot(&slot);
        assert!(element.disabled);
        assert!(!element.current);
        assert!(element.span.style.dim);
        assert_eq!(element.span.style.color, styles.base.color);
    }

    #[test]
    fn ellipsis_defaults_to_configured_marker() {
        let renderer = DefaultSlotRenderer::default();
        assert!(
            renderer
                .render_ellipsis(crate::core::range::EllipsisId::HEAD)
                .is_none()
        );
    }
}
