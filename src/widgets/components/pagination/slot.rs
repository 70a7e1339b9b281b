use std::borrow::Cow;
use std::fmt;

use crate::core::range::EllipsisId;
use crate::core::state::PaginationState;

/// What an interactive slot stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotIdentity {
    Page(usize),
    First,
    Previous,
    Next,
    Last,
}

impl SlotIdentity {
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }

    /// Page this slot requests when activated.
    pub fn target(self, state: PaginationState) -> usize {
        match self {
            Self::Page(page) => page,
            Self::First => 1,
            Self::Previous => state.current_page.saturating_sub(1),
            Self::Next => state.current_page.saturating_add(1),
            Self::Last => state.total_pages,
        }
    }
}

impl fmt::Display for SlotIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::First => f.write_str("first"),
            Self::Previous => f.write_str("previous"),
            Self::Next => f.write_str("next"),
            Self::Last => f.write_str("last"),
        }
    }
}

/// Rendering identity, unique within one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Control(SlotIdentity),
    Ellipsis(EllipsisId),
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Control(SlotIdentity::Page(page)) => write!(f, "page-{page}"),
            Self::Control(identity) => write!(f, "{identity}"),
            Self::Ellipsis(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    BelowFirst,
    BeyondLast,
    AlreadyCurrent,
    Disabled,
}

impl Rejection {
    fn as_str(self) -> &'static str {
        match self {
            Self::BelowFirst => "below first page",
            Self::BeyondLast => "beyond last page",
            Self::AlreadyCurrent => "already current",
            Self::Disabled => "control disabled",
        }
    }
}

/// Validates page requests and forwards accepted ones to the owner's callback.
pub struct PageRequester<'a> {
    state: PaginationState,
    disabled: bool,
    on_page_change: &'a dyn Fn(usize),
}

impl<'a> PageRequester<'a> {
    pub fn new(state: PaginationState, disabled: bool, on_page_change: &'a dyn Fn(usize)) -> Self {
        Self {
            state,
            disabled,
            on_page_change,
        }
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    fn check(&self, target: usize) -> Result<(), Rejection> {
        if target < 1 {
            return Err(Rejection::BelowFirst);
        }
        if target > self.state.total_pages {
            return Err(Rejection::BeyondLast);
        }
        if target == self.state.current_page {
            return Err(Rejection::AlreadyCurrent);
        }
        if self.disabled {
            return Err(Rejection::Disabled);
        }
        Ok(())
    }

    /// Forward `target` to the callback exactly once if it is a real move.
    /// Invalid requests are dropped silently; returns whether it was forwarded.
    pub fn change_page(&self, target: usize) -> bool {
        match self.check(target) {
            Ok(()) => {
                (self.on_page_change)(target);
                true
            }
            Err(rejection) => {
                tracing::debug!(
                    target_page = target,
                    current_page = self.state.current_page,
                    total_pages = self.state.total_pages,
                    reason = rejection.as_str(),
                    "page change ignored"
                );
                false
            }
        }
    }
}

/// Everything a renderer needs to draw one interactive slot.
pub struct SlotDescriptor<'a> {
    pub identity: SlotIdentity,
    pub is_active: bool,
    pub is_disabled: bool,
    pub label: Cow<'a, str>,
    pub target_page: usize,
    requester: &'a PageRequester<'a>,
}

impl<'a> SlotDescriptor<'a> {
    pub(crate) fn new(
        identity: SlotIdentity,
        is_active: bool,
        is_disabled: bool,
        label: Cow<'a, str>,
        requester: &'a PageRequester<'a>,
    ) -> Self {
        Self {
            identity,
            is_active,
            is_disabled,
            label,
            target_page: identity.target(requester.state()),
            requester,
        }
    }

    pub fn key(&self) -> SlotKey {
        SlotKey::Control(self.identity)
    }

    /// The slot's activation action.
    pub fn activate(&self) -> bool {
        if self.is_disabled {
            return false;
        }
        self.requester.change_page(self.target_page)
    }
}

impl fmt::Debug for SlotDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotDescriptor")
            .field("identity", &self.identity)
            .field("is_active", &self.is_active)
            .field("is_disabled", &self.is_disabled)
            .field("label", &self.label)
            .field("target_page", &self.target_page)
            .finish()
    }
}

/// One entry of the assembled control, in display order.
#[derive(Debug)]
pub enum Slot<'a> {
    Control(SlotDescriptor<'a>),
    /// Inert truncation marker.
    Ellipsis(EllipsisId),
}

impl Slot<'_> {
    pub fn key(&self) -> SlotKey {
        match self {
            Self::Control(descriptor) => descriptor.key(),
            Self::Ellipsis(id) => SlotKey::Ellipsis(*id),
        }
    }

    pub fn descriptor(&self) -> Option<&SlotDescriptor<'_>> {
        match self {
            Self::Control(descriptor) => Some(descriptor),
            Self::Ellipsis(_) => None,
        }
    }
}
