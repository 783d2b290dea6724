use cobalt_ui::{EmptyState, IconName, MenuItem, MenuSurface, Modal, Text, TextField, TextTone};
use leptos::*;

use super::a11y;
use crate::{
    context::{use_chrome, SEARCH_INPUT_DOM_ID, SEARCH_RESULTS_DOM_ID},
    reducer::ChromeAction,
};

#[derive(Clone, Copy, PartialEq, Eq)]
struct SearchEntry {
    icon: IconName,
    title: &'static str,
    keywords: &'static str,
    target_id: &'static str,
}

const SEARCH_INDEX: &[SearchEntry] = &[
    SearchEntry {
        icon: IconName::Home,
        title: "Welcome",
        keywords: "overview intro start",
        target_id: "overview",
    },
    SearchEntry {
        icon: IconName::Grid,
        title: "Controls",
        keywords: "buttons fields switches segmented tabs",
        target_id: "controls",
    },
    SearchEntry {
        icon: IconName::Table,
        title: "Data table",
        keywords: "pagination rows pages per-page",
        target_id: "data-table",
    },
    SearchEntry {
        icon: IconName::DocumentText,
        title: "Overlays",
        keywords: "modal dialog menu",
        target_id: "overlays",
    },
];

fn matching_entries(query: &str) -> Vec<SearchEntry> {
    let needle = query.trim().to_ascii_lowercase();
    SEARCH_INDEX
        .iter()
        .copied()
        .filter(|entry| {
            needle.is_empty()
                || entry.title.to_ascii_lowercase().contains(&needle)
                || entry.keywords.contains(&needle)
        })
        .collect()
}

fn reveal_section(target_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(target_id))
        else {
            return;
        };
        element.scroll_into_view();
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = target_id;
}

fn option_dom_id(target_id: &str) -> String {
    format!("chrome-search-option-{target_id}")
}

#[component]
/// Section search overlay opened with Ctrl/Cmd+K.
///
/// The overlay filters a static section index as the query changes. Enter activates
/// the first match, ArrowDown moves focus into the result list, and activating a
/// result scrolls its section into view and closes the overlay.
pub fn SearchOverlay() -> impl IntoView {
    let chrome = use_chrome();
    let open = Signal::derive(move || chrome.state.get().search_open);
    let query = create_rw_signal(String::new());
    let results = Signal::derive(move || matching_entries(&query.get()));

    let close = Callback::new(move |_: ()| {
        query.set(String::new());
        chrome.dispatch_action(ChromeAction::CloseSearch);
    });

    let activate = move |target_id: &str| {
        reveal_section(target_id);
        close.call(());
    };

    view! {
        <Modal open=open title="Search" aria_label="Section search" on_close=close>
            <TextField
                id=SEARCH_INPUT_DOM_ID
                placeholder="Search sections"
                aria_label="Search sections"
                autocomplete="off"
                spellcheck=false
                ui_slot="search-input"
                value=query
                on_input=Callback::new(move |ev| {
                    query.set(event_target_value(&ev));
                })
                on_keydown=Callback::new(move |ev: leptos::ev::KeyboardEvent| {
                    match ev.key().as_str() {
                        "ArrowDown" => {
                            if a11y::focus_first_option(SEARCH_RESULTS_DOM_ID) {
                                ev.prevent_default();
                            }
                        }
                        "Enter" => {
                            if let Some(entry) = results.get_untracked().first().copied() {
                                ev.prevent_default();
                                activate(entry.target_id);
                            }
                        }
                        _ => {}
                    }
                })
            />
            <div
                class="chrome-search-results"
                on:keydown=move |ev| {
                    let _ = a11y::handle_option_roving_keydown(&ev, SEARCH_RESULTS_DOM_ID);
                }
            >
                <MenuSurface
                    id=SEARCH_RESULTS_DOM_ID
                    role="listbox".to_string()
                    aria_label="Search results".to_string()
                    ui_slot="search-results"
                >
                    {move || {
                        let entries = results.get();
                        if entries.is_empty() {
                            view! {
                                <EmptyState>
                                    <Text tone=TextTone::Secondary>"No matching sections"</Text>
                                </EmptyState>
                            }
                            .into_view()
                        } else {
                            entries
                                .into_iter()
                                .map(|entry| view! {
                                    <MenuItem
                                        id=option_dom_id(entry.target_id)
                                        role="option".to_string()
                                        leading_icon=entry.icon
                                        on_click=Callback::new(move |_| {
                                            activate(entry.target_id);
                                        })
                                    >
                                        {entry.title}
                                    </MenuItem>
                                })
                                .collect_view()
                        }
                    }}
                </MenuSurface>
            </div>
        </Modal>
    }
}
