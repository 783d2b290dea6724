//! Page-window computation for pagination strips.
//!
//! [`compute_window`] turns `(current_page, total_pages, max_visible)` into
//! the ordered marker sequence a pagination strip renders: a contiguous
//! window of page numbers around the current page, plus the first and last
//! pages with ellipsis placeholders where pages are hidden. The function is
//! pure and cheap enough to re-run on every render.

/// One rendered unit in a pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A selectable page number.
    Page(usize),
    /// A non-interactive placeholder standing in for two or more hidden pages.
    Ellipsis,
}

/// Computes the marker sequence for a pagination strip.
///
/// The window spans up to `max_visible` pages centered on `current_page`
/// and is shifted, not shrunk, at either boundary. Outside the window the
/// first and last pages are always shown; a gap of exactly one page is
/// shown directly while a gap of two or more collapses to one
/// [`PageMarker::Ellipsis`].
///
/// `total_pages == 0` yields an empty sequence and `total_pages == 1`
/// yields `[Page(1)]`. Callers own clamping: `current_page` must already be
/// within `1..=total_pages` and `max_visible` must be at least 1. Both are
/// debug-asserted rather than corrected, so out-of-range calls surface at
/// the call site that holds the real state.
pub fn compute_window(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages == 1 {
        return vec![PageMarker::Page(1)];
    }
    debug_assert!(max_visible >= 1, "max_visible must be at least 1");
    debug_assert!(
        (1..=total_pages).contains(&current_page),
        "current_page {current_page} outside 1..={total_pages}"
    );

    // The extra slot of an even budget goes after the current page so the
    // window never exceeds max_visible.
    let before = max_visible.saturating_sub(1) / 2;
    let after = max_visible / 2;
    let mut start = current_page.saturating_sub(before).max(1);
    let mut end = current_page.saturating_add(after).min(total_pages);

    // Near a boundary the centered window comes up short; extend the far
    // side so the strip still shows min(max_visible, total_pages) pages.
    if end - start + 1 < max_visible {
        if start == 1 {
            end = start.saturating_add(max_visible - 1).min(total_pages);
        } else if end == total_pages {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }
    }

    let mut markers = Vec::with_capacity(end - start + 5);
    if start > 1 {
        markers.push(PageMarker::Page(1));
        if start == 3 {
            markers.push(PageMarker::Page(2));
        } else if start > 3 {
            markers.push(PageMarker::Ellipsis);
        }
    }
    for page in start..=end {
        markers.push(PageMarker::Page(page));
    }
    if end < total_pages {
        if end + 2 == total_pages {
            markers.push(PageMarker::Page(total_pages - 1));
        } else if end + 1 < total_pages {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(total_pages));
    }
    markers
}

/// Number of pages needed to hold `item_count` items at `per_page` each.
///
/// A `per_page` of zero is treated as one so the result stays meaningful.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamps a one-based page number into `1..=total_pages`.
///
/// An empty collection still has a page 1, so `total_pages == 0` clamps to
/// 1. This is the caller-side companion to [`compute_window`], which never
/// clamps on its own.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::PageMarker::{Ellipsis, Page};
    use super::*;

    #[test]
    fn window_fills_forward_from_first_page() {
        assert_eq!(
            compute_window(1, 5, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)],
        );
    }

    #[test]
    fn centered_window_truncates_both_sides() {
        assert_eq!(
            compute_window(10, 20, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20),
            ],
        );
    }

    #[test]
    fn window_touching_first_page_needs_no_leading_ellipsis() {
        assert_eq!(
            compute_window(2, 15, 5),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(15),
            ],
        );
    }

    #[test]
    fn window_pulls_back_near_last_page() {
        assert_eq!(
            compute_window(14, 15, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(11),
                Page(12),
                Page(13),
                Page(14),
                Page(15),
            ],
        );
    }

    #[test]
    fn two_pages_render_without_ellipsis() {
        assert_eq!(compute_window(1, 2, 5), vec![Page(1), Page(2)]);
    }

    #[test]
    fn wider_budget_keeps_window_centered() {
        assert_eq!(
            compute_window(50, 100, 7),
            vec![
                Page(1),
                Ellipsis,
                Page(47),
                Page(48),
                Page(49),
                Page(50),
                Page(51),
                Page(52),
                Page(53),
                Ellipsis,
                Page(100),
            ],
        );
    }

    #[test]
    fn single_hidden_page_after_head_is_shown_directly() {
        // Window starts at 3, hiding only page 2.
        assert_eq!(
            compute_window(5, 10, 5),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10),
            ],
        );
    }

    #[test]
    fn single_hidden_page_before_tail_is_shown_directly() {
        // Window ends at 8, hiding only page 9.
        assert_eq!(
            compute_window(6, 10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10),
            ],
        );
    }

    #[test]
    fn zero_total_renders_no_markers() {
        assert_eq!(compute_window(1, 0, 5), Vec::new());
    }

    #[test]
    fn single_page_renders_only_itself() {
        assert_eq!(compute_window(1, 1, 5), vec![Page(1)]);
    }

    #[test]
    fn total_below_budget_lists_every_page_without_ellipsis() {
        assert_eq!(
            compute_window(2, 3, 7),
            vec![Page(1), Page(2), Page(3)],
        );
    }

    #[test]
    fn even_budget_never_exceeds_requested_width() {
        assert_eq!(
            compute_window(10, 20, 4),
            vec![
                Page(1),
                Ellipsis,
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20),
            ],
        );
    }

    #[test]
    fn budget_of_one_keeps_only_current_in_body() {
        assert_eq!(
            compute_window(5, 10, 1),
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)],
        );
    }

    #[test]
    fn narrow_budget_at_second_page_keeps_strip_contiguous() {
        // Forced first page adjoins the one-wide body, so no gap markers.
        assert_eq!(
            compute_window(2, 3, 1),
            vec![Page(1), Page(2), Page(3)],
        );
    }

    #[test]
    fn current_page_appears_exactly_once() {
        for total in 1..=30 {
            for current in 1..=total {
                let count = compute_window(current, total, 5)
                    .iter()
                    .filter(|marker| **marker == Page(current))
                    .count();
                assert_eq!(count, 1, "current {current} of {total}");
            }
        }
    }

    #[test]
    fn total_pages_rounds_up_and_survives_zero_per_page() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(7, 0), 7);
    }

    #[test]
    fn clamp_page_stays_inside_bounds() {
        assert_eq!(clamp_page(0, 10), 1);
        assert_eq!(clamp_page(5, 10), 5);
        assert_eq!(clamp_page(11, 10), 10);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside 1..=")]
    fn out_of_range_current_page_panics_in_debug() {
        compute_window(11, 10, 5);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside 1..=")]
    fn zero_current_page_panics_in_debug() {
        compute_window(0, 10, 5);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "max_visible")]
    fn zero_budget_panics_in_debug() {
        compute_window(1, 10, 0);
    }
}
