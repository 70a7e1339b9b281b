mod render;
mod slot;
mod view;

use std::borrow::Cow;

use crate::core::config::LayoutConfig;
use crate::core::range::{PageSlot, compute_range};
use crate::core::state::PaginationState;
use crate::ui::span::Span;

pub use render::{
    DefaultSlotRenderer, SharedSlotRenderer, SlotElement, SlotRenderer, default_slot_renderer,
};
pub use slot::{PageRequester, Slot, SlotDescriptor, SlotIdentity, SlotKey};
pub use view::{PaginationView, ViewEntry};

/// Stateless per-invocation controller.
///
/// Built from the caller's state, layout and page-change callback every time
/// the control is drawn or activated; nothing is kept between invocations.
pub struct PaginationController<'a> {
    config: &'a LayoutConfig,
    requester: PageRequester<'a>,
}

impl<'a> PaginationController<'a> {
    pub fn new(
        state: PaginationState,
        config: &'a LayoutConfig,
        on_page_change: &'a dyn Fn(usize),
    ) -> Self {
        Self {
            config,
            requester: PageRequester::new(state, config.disabled, on_page_change),
        }
    }

    pub fn state(&self) -> PaginationState {
        self.requester.state()
    }

    pub fn config(&self) -> &LayoutConfig {
        self.config
    }

    /// Ask the owner to move to `target`. Out-of-range, current-page and
    /// disabled requests are ignored.
    pub fn change_page(&self, target: usize) -> bool {
        self.requester.change_page(target)
    }

    /// Slots in display order. Empty when there is at most one page.
    pub fn slots(&self) -> Vec<Slot<'_>> {
        let state = self.state();
        if !state.is_paginated() {
            return Vec::new();
        }

        let config = self.config;
        let disabled = config.disabled;
        let at_start = state.is_first_page() || disabled;
        let at_end = state.is_last_page() || disabled;
        let range = compute_range(
            state.current_page,
            state.total_pages,
            config.max_visible_pages,
        );

        let mut slots = Vec::with_capacity(range.len() + 4);
        let nav = |identity, is_disabled, label: &'a str| {
            Slot::Control(SlotDescriptor::new(
                identity,
                false,
                is_disabled,
                Cow::Borrowed(label),
                &self.requester,
            ))
        };

        if config.show_first_last {
            slots.push(nav(SlotIdentity::First, at_start, config.labels.first.as_str()));
        }
        if config.show_previous_next {
            slots.push(nav(SlotIdentity::Previous, at_start, config.labels.previous.as_str()));
        }

        slots.extend(range.into_iter().map(|entry| match entry {
            PageSlot::Page(page) => Slot::Control(SlotDescriptor::new(
                SlotIdentity::Page(page),
                page == state.current_page,
                disabled,
                Cow::Owned(page.to_string()),
                &self.requester,
            )),
            PageSlot::Ellipsis(id) => Slot::Ellipsis(id),
        }));

        if config.show_previous_next {
            slots.push(nav(SlotIdentity::Next, at_end, config.labels.next.as_str()));
        }
        if config.show_first_last {
            slots.push(nav(SlotIdentity::Last, at_end, config.labels.last.as_str()));
        }

        slots
    }

    /// Activate the slot with `identity` if it is currently shown.
    pub fn activate(&self, identity: SlotIdentity) -> bool {
        self.slots()
            .iter()
            .filter_map(Slot::descriptor)
            .find(|descriptor| descriptor.identity == identity)
            .is_some_and(SlotDescriptor::activate)
    }

    /// Render every slot through `renderer`, or the built-in renderer when
    /// `None`. Ellipses are drawn as inert markers.
    pub fn render(&self, renderer: Option<&dyn SlotRenderer>) -> PaginationView {
        let fallback;
        let renderer = match renderer {
            Some(renderer) => renderer,
            None => {
                fallback = DefaultSlotRenderer::new(self.config.styles);
                &fallback as &dyn SlotRenderer
            }
        };

        let mut view = PaginationView::with_container(self.config.styles.container);
        for slot in self.slots() {
            let element = match &slot {
                Slot::Control(descriptor) => renderer.render_slot(descriptor),
                Slot::Ellipsis(id) => renderer.render_ellipsis(*id).unwrap_or_else(|| {
                    SlotElement::new(Span::styled(
                        self.config.labels.ellipsis.as_str(),
                        self.config.styles.ellipsis,
                    ))
                }),
            };
            view.push(slot.key(), element);
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::{PaginationController, Slot, SlotElement, SlotIdentity, SlotKey};
    use crate::core::config::LayoutConfig;
    use crate::core::range::EllipsisId;
    use crate::core::state::PaginationState;
    use crate::ui::span::{Span, line_text};
    use crate::ui::style::Color;
    use std::cell::{Cell, RefCell};

    fn keys(controller: &PaginationController<'_>) -> Vec<String> {
        controller
            .slots()
            .iter()
            .map(|slot| slot.key().to_string())
            .collect()
    }

    #[test]
    fn single_page_renders_nothing() {
        let config = LayoutConfig::default();
        let notify = |_: usize| {};
        for total in [0, 1] {
            let controller =
                PaginationController::new(PaginationState::new(1, total), &config, &notify);
            assert!(controller.slots().is_empty());
            assert!(controller.render(None).is_empty());
        }
    }

    #[test]
    fn slots_follow_fixed_order() {
        let config = LayoutConfig::default();
        let notify = |_: usize| {};
        let controller =
            PaginationController::new(PaginationState::new(1, 20), &config, &notify);
        assert_eq!(
            keys(&controller),
            vec![
                "first", "previous", "page-1", "page-2", "page-3", "ellipsis-1", "page-20",
                "next", "last"
            ]
        );
    }

    #[test]
    fn hidden_navigation_is_omitted() {
        let config = LayoutConfig::default()
            .with_first_last(false)
            .with_previous_next(false);
        let notify = |_: usize| {};
        let controller = PaginationController::new(PaginationState::new(2, 3), &config, &notify);
        assert_eq!(keys(&controller), vec!["page-1", "page-2", "page-3"]);
    }

    #[test]
    fn edge_controls_are_disabled_at_edges() {
        let config = LayoutConfig::default();
        let notify = |_: usize| {};

        let controller = PaginationController::new(PaginationState::new(1, 4), &config, &notify);
        let disabled: Vec<_> = controller
            .slots()
            .iter()
            .filter_map(Slot::descriptor)
            .filter(|slot| slot.is_disabled)
            .map(|slot| slot.identity)
            .collect();
        assert_eq!(disabled, vec![SlotIdentity::First, SlotIdentity::Previous]);

        let controller = PaginationController::new(PaginationState::new(4, 4), &config, &notify);
        let disabled: Vec<_> = controller
            .slots()
            .iter()
            .filter_map(Slot::descriptor)
            .filter(|slot| slot.is_disabled)
            .map(|slot| slot.identity)
            .collect();
        assert_eq!(disabled, vec![SlotIdentity::Next, SlotIdentity::Last]);
    }

    #[test]
    fn only_current_page_is_active() {
        let config = LayoutConfig::default();
        let notify = |_: usize| {};
        let controller = PaginationController::new(PaginationState::new(3, 5), &config, &notify);
        let active: Vec<_> = controller
            .slots()
            .iter()
            .filter_map(Slot::descriptor)
            .filter(|slot| slot.is_active)
            .map(|slot| slot.identity)
            .collect();
        assert_eq!(active, vec![SlotIdentity::Page(3)]);
    }

    #[test]
    fn activation_requests_target_page() {
        let config = LayoutConfig::default();
        let seen = RefCell::new(Vec::new());
        let notify = |page: usize| seen.borrow_mut().push(page);
        let controller = PaginationController::new(PaginationState::new(3, 10), &config, &notify);

        assert!(controller.activate(SlotIdentity::Next));
        assert!(controller.activate(SlotIdentity::Previous));
        assert!(controller.activate(SlotIdentity::First));
        assert!(controller.activate(SlotIdentity::Last));
        assert!(!controller.activate(SlotIdentity::Page(3)));
        // Page 7 is hidden behind the ellipsis at this width.
        assert!(!controller.activate(SlotIdentity::Page(7)));
        assert_eq!(*seen.borrow(), vec![4, 2, 1, 10]);
    }

    #[test]
    fn disabled_control_never_notifies() {
        let config = LayoutConfig::default().with_disabled(true);
        let calls = Cell::new(0);
        let notify = |_: usize| calls.set(calls.get() + 1);
        let controller = PaginationController::new(PaginationState::new(3, 10), &config, &notify);

        for slot in controller.slots() {
            if let Slot::Control(descriptor) = slot {
                assert!(descriptor.is_disabled);
                assert!(!descriptor.activate());
            }
        }
        assert!(!controller.change_page(4));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn default_render_marks_current_and_draws_ellipsis() {
        let config = LayoutConfig::default();
        let notify = |_: usize| {};
        let controller =
            PaginationController::new(PaginationState::new(20, 20), &config, &notify);
        let view = controller.render(None);

        assert_eq!(
            line_text(&view.to_line()),
            " « First   ← Previous   1  ...  18   19   20   Next →   Last » "
        );
        let current = view.current().expect("current page visible");
        assert_eq!(current.key, SlotKey::Control(SlotIdentity::Page(20)));
        let marker = view
            .element(SlotKey::Ellipsis(EllipsisId::HEAD))
            .expect("ellipsis rendered");
        assert!(!marker.current);
        assert_eq!(marker.span.style, config.styles.ellipsis);
    }

    #[test]
    fn configured_container_style_reaches_the_line() {
        let config = LayoutConfig::from_yaml_str(
            "styles:\n  container:\n    background: dark_grey\n",
        )
        .expect("valid layout");
        let notify = |_: usize| {};
        let controller = PaginationController::new(PaginationState::new(2, 3), &config, &notify);
        let view = controller.render(None);

        assert_eq!(view.container().background, Some(Color::DarkGrey));
        let line = view.to_line();
        let gaps: Vec<_> = line.iter().filter(|span| span.text == " ").collect();
        assert!(!gaps.is_empty());
        assert!(gaps.iter().all(|span| span.style == config.styles.container));
    }

    #[test]
    fn custom_renderer_receives_every_control() {
        let config = LayoutConfig::default();
        let notify = |_: usize| {};
        let controller = PaginationController::new(PaginationState::new(2, 3), &config, &notify);
        let rendered = RefCell::new(Vec::new());
        let renderer = |slot: &super::SlotDescriptor<'_>| {
            rendered.borrow_mut().push(slot.identity);
            SlotElement::new(Span::new(format!("[{}]", slot.label)))
        };

        let view = controller.render(Some(&renderer));
        assert_eq!(line_text(&view.to_line()), "[« First] [← Previous] [1] [2] [3] [Next →] [Last »]");
        assert_eq!(rendered.borrow().len(), 7);
    }
}
