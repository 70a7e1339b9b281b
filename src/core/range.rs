use std::fmt;

/// Default width of the visible window before truncation kicks in.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// Stable identity of a truncation marker.
///
/// Up to two markers can appear in one range, so each carries a distinct
/// negative id that a rendering layer can key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EllipsisId(i32);

impl EllipsisId {
    /// Marker before the last page when only the tail is truncated.
    pub const TAIL: Self = Self(-1);
    /// Marker right after page 1.
    pub const HEAD: Self = Self(-2);
    /// Marker before the last page when both sides are truncated.
    pub const CENTER_TAIL: Self = Self(-3);

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EllipsisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ellipsis{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSlot {
    Page(usize),
    Ellipsis(EllipsisId),
}

impl PageSlot {
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis(_) => None,
        }
    }
}

/// Which side(s) of the page list are collapsed into a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// Everything fits, or the window is too close to both edges to truncate.
    None,
    /// Leading pages are listed, the tail collapses before the last page.
    Tail,
    /// The head collapses after page 1, trailing pages are listed.
    Head,
    /// Page 1, marker, a centered window, marker, last page.
    Both,
}

/// Classify the layout for the given inputs without building the range.
pub fn truncation(current_page: usize, total_pages: usize, max_visible_pages: usize) -> Truncation {
    if total_pages <= max_visible_pages {
        return Truncation::None;
    }

    let left_sibling = current_page.saturating_sub(1).max(1);
    let right_sibling = current_page.saturating_add(1).min(total_pages);

    let head = left_sibling > 2;
    let tail = right_sibling < total_pages - 1;

    match (head, tail) {
        (false, true) => Truncation::Tail,
        (true, false) => Truncation::Head,
        (true, true) => Truncation::Both,
        (false, false) => Truncation::None,
    }
}

/// Compute the ordered slots of a pagination control.
///
/// Page 1 and `total_pages` stay anchored whenever truncation happens; the
/// window in between follows `current_page`. An out-of-range `current_page`
/// only biases the window, it never fails.
///
/// `max_visible_pages` below 3 is not rejected. Arithmetic that would go
/// negative saturates at zero, so the affected runs are simply empty. In the
/// both-sides layout the middle run is `min(max_visible_pages - 4, 3)` pages
/// wide: at the default width of 5 only the current page is shown there.
pub fn compute_range(
    current_page: usize,
    total_pages: usize,
    max_visible_pages: usize,
) -> Vec<PageSlot> {
    let layout = truncation(current_page, total_pages, max_visible_pages);
    let mut range = Vec::with_capacity(max_visible_pages.min(total_pages).max(1));

    match layout {
        Truncation::Tail => {
            let leading = max_visible_pages
                .saturating_sub(2)
                .min(total_pages.saturating_sub(2));
            range.extend((1..=leading).map(PageSlot::Page));
            range.push(PageSlot::Ellipsis(EllipsisId::TAIL));
            range.push(PageSlot::Page(total_pages));
        }
        Truncation::Head => {
            let trailing = max_visible_pages
                .saturating_sub(2)
                .min(total_pages.saturating_sub(1));
            range.push(PageSlot::Page(1));
            range.push(PageSlot::Ellipsis(EllipsisId::HEAD));
            range.extend((total_pages - trailing + 1..=total_pages).map(PageSlot::Page));
        }
        Truncation::Both => {
            let middle = max_visible_pages.saturating_sub(4).min(3);
            // current_page >= 4 here, so the start never drops below 1.
            let start = current_page - middle / 2;
            range.push(PageSlot::Page(1));
            range.push(PageSlot::Ellipsis(EllipsisId::HEAD));
            range.extend((start..start + middle).map(PageSlot::Page));
            range.push(PageSlot::Ellipsis(EllipsisId::CENTER_TAIL));
            range.push(PageSlot::Page(total_pages));
        }
        Truncation::None => {
            range.extend((1..=total_pages).map(PageSlot::Page));
        }
    }

    tracing::trace!(
        current_page,
        total_pages,
        max_visible_pages,
        slots = range.len(),
        "pagination range computed"
    );
    range
}

#[cfg(test)]
mod tests {
    use super::{EllipsisId, PageSlot, Truncation, compute_range, truncation};

    fn render(range: &[PageSlot]) -> String {
        range
            .iter()
            .map(|slot| match slot {
                PageSlot::Page(page) => page.to_string(),
                PageSlot::Ellipsis(_) => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn lists_every_page_when_it_fits() {
        assert_eq!(render(&compute_range(1, 5, 5)), "1 2 3 4 5");
        assert_eq!(render(&compute_range(3, 3, 5)), "1 2 3");
    }

    #[test]
    fn zero_pages_is_empty() {
        assert!(compute_range(1, 0, 5).is_empty());
    }

    #[test]
    fn truncates_tail_near_start() {
        assert_eq!(render(&compute_range(1, 20, 5)), "1 2 3 … 20");
        assert_eq!(truncation(1, 20, 5), Truncation::Tail);
    }

    #[test]
    fn truncates_head_near_end() {
        assert_eq!(render(&compute_range(20, 20, 5)), "1 … 18 19 20");
        assert_eq!(truncation(20, 20, 5), Truncation::Head);
    }

    #[test]
    fn centers_window_with_seven_slots() {
        assert_eq!(render(&compute_range(5, 20, 7)), "1 … 4 5 6 … 20");
    }

    #[test]
    fn default_width_keeps_only_current_in_middle() {
        // min(5 - 4, 3) = 1, so only the current page sits between the markers.
        assert_eq!(render(&compute_range(5, 20, 5)), "1 … 5 … 20");
    }

    #[test]
    fn even_width_window_is_asymmetric() {
        // width 6 -> middle run of 2 starting one before the current page.
        assert_eq!(render(&compute_range(10, 20, 6)), "1 … 9 10 … 20");
    }

    #[test]
    fn small_width_collapses_middle_run() {
        assert_eq!(render(&compute_range(10, 20, 4)), "1 … … 20");
        assert_eq!(render(&compute_range(10, 20, 3)), "1 … … 20");
    }

    #[test]
    fn falls_back_to_full_listing_when_no_marker_fits() {
        assert_eq!(truncation(2, 4, 3), Truncation::None);
        assert_eq!(render(&compute_range(2, 4, 3)), "1 2 3 4");
    }

    #[test]
    fn ellipsis_ids_are_distinct_in_both_sides_layout() {
        let range = compute_range(10, 30, 7);
        let markers: Vec<EllipsisId> = range
            .iter()
            .filter_map(|slot| match slot {
                PageSlot::Ellipsis(id) => Some(*id),
                PageSlot::Page(_) => None,
            })
            .collect();
        assert_eq!(markers, vec![EllipsisId::HEAD, EllipsisId::CENTER_TAIL]);
    }

    #[test]
    fn out_of_range_current_page_does_not_panic() {
        assert_eq!(render(&compute_range(0, 20, 5)), "1 2 3 … 20");
        assert_eq!(render(&compute_range(99, 20, 5)), "1 … 18 19 20");
        assert_eq!(render(&compute_range(usize::MAX, 20, 5)), "1 … 18 19 20");
    }

    #[test]
    fn zero_width_emits_only_anchors() {
        assert_eq!(render(&compute_range(1, 10, 0)), "… 10");
        assert_eq!(render(&compute_range(10, 10, 0)), "1 …");
    }
}
