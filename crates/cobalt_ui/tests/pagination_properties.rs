use cobalt_ui::{clamp_page, compute_window, total_pages, PageMarker};
use proptest::prelude::*;

fn window_inputs() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..400, 1usize..=12).prop_flat_map(|(total, max_visible)| {
        (1..=total).prop_map(move |current| (current, total, max_visible))
    })
}

fn page_numbers(markers: &[PageMarker]) -> Vec<usize> {
    markers
        .iter()
        .filter_map(|marker| match marker {
            PageMarker::Page(page) => Some(*page),
            PageMarker::Ellipsis => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn window_always_contains_current_exactly_once(
        (current, total, max_visible) in window_inputs(),
    ) {
        let markers = compute_window(current, total, max_visible);
        let hits = markers
            .iter()
            .filter(|marker| **marker == PageMarker::Page(current))
            .count();
        prop_assert_eq!(hits, 1);
    }

    #[test]
    fn window_pages_stay_ordered_and_in_bounds(
        (current, total, max_visible) in window_inputs(),
    ) {
        let markers = compute_window(current, total, max_visible);
        let pages = page_numbers(&markers);

        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(total));
        for pair in pages.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for page in pages {
            prop_assert!((1..=total).contains(&page));
        }
    }

    #[test]
    fn ellipsis_is_never_terminal_or_doubled(
        (current, total, max_visible) in window_inputs(),
    ) {
        let markers = compute_window(current, total, max_visible);

        prop_assert!(matches!(markers.first(), Some(PageMarker::Page(_))));
        prop_assert!(matches!(markers.last(), Some(PageMarker::Page(_))));
        for pair in markers.windows(2) {
            prop_assert!(
                pair != [PageMarker::Ellipsis, PageMarker::Ellipsis],
                "adjacent ellipsis markers in {:?}",
                markers,
            );
        }
    }

    #[test]
    fn ellipsis_always_stands_for_at_least_two_pages(
        (current, total, max_visible) in window_inputs(),
    ) {
        let markers = compute_window(current, total, max_visible);

        for triple in markers.windows(3) {
            if let [PageMarker::Page(low), PageMarker::Ellipsis, PageMarker::Page(high)] = triple {
                prop_assert!(
                    high - low >= 3,
                    "ellipsis between {} and {} hides fewer than two pages",
                    low,
                    high,
                );
            }
        }
        for pair in markers.windows(2) {
            if let [PageMarker::Page(low), PageMarker::Page(high)] = pair {
                prop_assert_eq!(low + 1, *high);
            }
        }
    }

    #[test]
    fn marker_count_stays_bounded(
        (current, total, max_visible) in window_inputs(),
    ) {
        let markers = compute_window(current, total, max_visible);
        prop_assert!(markers.len() <= max_visible + 4);
        prop_assert!(markers.len() <= total + 2);
    }

    #[test]
    fn recomputing_the_same_inputs_is_stable(
        (current, total, max_visible) in window_inputs(),
    ) {
        prop_assert_eq!(
            compute_window(current, total, max_visible),
            compute_window(current, total, max_visible),
        );
    }

    #[test]
    fn fitting_totals_render_every_page_without_gaps(
        total in 1usize..40,
        extra in 0usize..8,
    ) {
        let max_visible = total + extra;
        for current in 1..=total {
            let markers = compute_window(current, total, max_visible);
            let expected: Vec<PageMarker> = (1..=total).map(PageMarker::Page).collect();
            prop_assert_eq!(markers, expected);
        }
    }

    #[test]
    fn clamped_pages_land_in_the_valid_range(
        page in 0usize..10_000,
        total in 0usize..500,
    ) {
        let clamped = clamp_page(page, total);
        prop_assert!((1..=total.max(1)).contains(&clamped));
        if (1..=total).contains(&page) {
            prop_assert_eq!(clamped, page);
        }
    }

    #[test]
    fn page_count_covers_every_item(
        item_count in 0usize..100_000,
        per_page in 1usize..500,
    ) {
        let total = total_pages(item_count, per_page);
        if item_count == 0 {
            prop_assert_eq!(total, 0);
        } else {
            prop_assert!(total * per_page >= item_count);
            prop_assert!((total - 1) * per_page < item_count);
        }
    }
}

#[test]
fn shrinking_the_page_count_reclamps_into_a_full_window() {
    let coarse_total = total_pages(95, 25);
    assert_eq!(coarse_total, 4);

    let clamped = clamp_page(10, coarse_total);
    assert_eq!(clamped, 4);

    let markers = compute_window(clamped, coarse_total, 5);
    let expected: Vec<PageMarker> = (1..=4).map(PageMarker::Page).collect();
    assert_eq!(markers, expected);
}

#[test]
fn growing_the_page_count_keeps_the_current_page_centered() {
    let fine_total = total_pages(95, 5);
    assert_eq!(fine_total, 19);

    let markers = compute_window(10, fine_total, 5);
    assert_eq!(
        markers,
        vec![
            PageMarker::Page(1),
            PageMarker::Ellipsis,
            PageMarker::Page(8),
            PageMarker::Page(9),
            PageMarker::Page(10),
            PageMarker::Page(11),
            PageMarker::Page(12),
            PageMarker::Ellipsis,
            PageMarker::Page(19),
        ]
    );
}
