use cobalt_ui::{Icon, IconName, IconSize, LayoutGap, LayoutPadding, Stack, Text, TextRole, TextTone};
use leptos::*;

use crate::context::{use_chrome, SIDEBAR_DOM_ID};

struct NavEntry {
    icon: IconName,
    label: &'static str,
    target_id: &'static str,
}

struct NavSection {
    title: &'static str,
    entries: &'static [NavEntry],
}

const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Start",
        entries: &[NavEntry {
            icon: IconName::Home,
            label: "Welcome",
            target_id: "overview",
        }],
    },
    NavSection {
        title: "Components",
        entries: &[
            NavEntry {
                icon: IconName::Grid,
                label: "Controls",
                target_id: "controls",
            },
            NavEntry {
                icon: IconName::Table,
                label: "Data table",
                target_id: "data-table",
            },
            NavEntry {
                icon: IconName::DocumentText,
                label: "Overlays",
                target_id: "overlays",
            },
        ],
    },
];

#[component]
/// Collapsible navigation sidebar listing the gallery sections.
pub fn Sidebar() -> impl IntoView {
    let chrome = use_chrome();
    let open = Signal::derive(move || chrome.state.get().sidebar_open);

    view! {
        <aside id=SIDEBAR_DOM_ID class="chrome-sidebar" hidden=move || !open.get()>
            <nav aria-label="Site sections">
                <Stack gap=LayoutGap::Lg padding=LayoutPadding::Sm>
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| view! {
                            <Stack gap=LayoutGap::Sm ui_slot="nav-section">
                                <Text role=TextRole::Label tone=TextTone::Secondary>
                                    {section.title}
                                </Text>
                                {section
                                    .entries
                                    .iter()
                                    .map(|entry| view! {
                                        <a
                                            class="chrome-nav-link"
                                            href=format!("#{}", entry.target_id)
                                        >
                                            <Icon icon=entry.icon size=IconSize::Sm />
                                            <span>{entry.label}</span>
                                        </a>
                                    })
                                    .collect_view()}
                            </Stack>
                        })
                        .collect_view()}
                </Stack>
            </nav>
        </aside>
    }
}
