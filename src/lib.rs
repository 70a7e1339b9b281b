pub mod core;
pub mod runtime;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use crate::core::config::{ConfigError, LayoutConfig, NavLabels, SlotStyles};
pub use crate::core::range::{EllipsisId, PageSlot, Truncation, compute_range, truncation};
pub use crate::core::state::PaginationState;

pub use crate::runtime::event::WidgetAction;

pub use crate::ui::span;
pub use crate::ui::style;

pub use crate::widgets::components::pagination::{
    DefaultSlotRenderer, PaginationController, PaginationView, SharedSlotRenderer, Slot,
    SlotDescriptor, SlotElement, SlotIdentity, SlotKey, SlotRenderer, ViewEntry,
    default_slot_renderer,
};
pub use crate::widgets::inputs::pager::PagerInput;
