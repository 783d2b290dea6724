use super::*;

use crate::{compute_window, PageMarker};

#[component]
/// Shared tab list primitive.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger primitive.
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: MaybeSignal<String>,
    #[prop(into)] controls: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(into)] tabindex: MaybeSignal<i32>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let aria_selected = Signal::derive(move || selected.get().to_string());

    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            id=id.get()
            role="tab".to_string()
            aria_controls=controls.get()
            aria_selected=aria_selected
            selected=selected
            tabindex=tabindex.get()
            ui_slot="tab"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
            on_keydown=Callback::new(move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Paged navigation strip over a marker window computed by
/// [`compute_window`](crate::compute_window).
///
/// The component is fully controlled: the owner holds the current page,
/// keeps it clamped to `1..=total_pages`, and applies updates delivered
/// through `on_page_change`. Activating the current page again never fires
/// the callback, and requests outside the valid range are ignored. With one
/// page or fewer the strip renders nothing at all.
///
/// First/previous controls render disabled on the first page, next/last on
/// the last page; `show_first_last` and `show_prev_next` omit those
/// controls entirely. Ellipsis gaps are inert placeholders and can never
/// receive focus or clicks.
pub fn Pagination(
    #[prop(into)] current_page: MaybeSignal<usize>,
    #[prop(into)] total_pages: MaybeSignal<usize>,
    #[prop(default = 5)] max_visible: usize,
    #[prop(default = true)] show_first_last: bool,
    #[prop(default = true)] show_prev_next: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let markers = Signal::derive(move || {
        compute_window(current_page.get(), total_pages.get(), max_visible)
    });
    let at_first = Signal::derive(move || current_page.get() <= 1);
    let at_last = Signal::derive(move || current_page.get() >= total_pages.get());

    let select_page = move |page: usize| {
        let current = current_page.get_untracked();
        let total = total_pages.get_untracked();
        if page != current && (1..=total).contains(&page) {
            on_page_change.call(page);
        }
    };

    let class = merge_layout_class("ui-pagination", layout_class);
    let strip_label = aria_label.unwrap_or_else(|| "Pagination".to_string());

    view! {
        <Show when=move || { total_pages.get() > 1 } fallback=|| ()>
            <nav
                class=class.clone()
                aria-label=strip_label.clone()
                data-ui-primitive="true"
                data-ui-kind="pagination"
            >
                {show_first_last.then(|| view! {
                    <IconButton
                        icon=IconName::ChevronDoubleLeft
                        size=ButtonSize::Sm
                        ui_slot="first"
                        aria_label="First page"
                        disabled=at_first
                        on_click=Callback::new(move |_| select_page(1))
                    />
                })}
                {show_prev_next.then(|| view! {
                    <IconButton
                        icon=IconName::ChevronLeft
                        size=ButtonSize::Sm
                        ui_slot="previous"
                        aria_label="Previous page"
                        disabled=at_first
                        on_click=Callback::new(move |_| {
                            select_page(current_page.get_untracked().saturating_sub(1));
                        })
                    />
                })}
                <span data-ui-slot="pages">
                    {move || {
                        markers
                            .get()
                            .into_iter()
                            .map(|marker| match marker {
                                PageMarker::Page(page) => {
                                    let aria_current = Signal::derive(move || {
                                        if current_page.get() == page {
                                            "page".to_string()
                                        } else {
                                            String::new()
                                        }
                                    });
                                    let is_current =
                                        Signal::derive(move || current_page.get() == page);
                                    view! {
                                        <Button
                                            variant=ButtonVariant::Quiet
                                            size=ButtonSize::Sm
                                            shape=ButtonShape::Pill
                                            ui_slot="page"
                                            aria_label=format!("Page {page}")
                                            aria_current=aria_current
                                            selected=is_current
                                            on_click=Callback::new(move |_| select_page(page))
                                        >
                                            {page.to_string()}
                                        </Button>
                                    }
                                    .into_view()
                                }
                                PageMarker::Ellipsis => view! {
                                    <span
                                        class="ui-pagination-gap"
                                        data-ui-slot="gap"
                                        aria-hidden="true"
                                    >
                                        "\u{2026}"
                                    </span>
                                }
                                .into_view(),
                            })
                            .collect_view()
                    }}
                </span>
                {show_prev_next.then(|| view! {
                    <IconButton
                        icon=IconName::ChevronRight
                        size=ButtonSize::Sm
                        ui_slot="next"
                        aria_label="Next page"
                        disabled=at_last
                        on_click=Callback::new(move |_| {
                            select_page(current_page.get_untracked().saturating_add(1));
                        })
                    />
                })}
                {show_first_last.then(|| view! {
                    <IconButton
                        icon=IconName::ChevronDoubleRight
                        size=ButtonSize::Sm
                        ui_slot="last"
                        aria_label="Last page"
                        disabled=at_last
                        on_click=Callback::new(move |_| {
                            select_page(total_pages.get_untracked());
                        })
                    />
                })}
            </nav>
        </Show>
    }
}
