use cobalt_ui::{
    Button, ButtonVariant, Cluster, Heading, Icon, IconButton, IconName, IconSize, LayoutGap,
    LayoutJustify, LayoutPadding, SegmentedControl, SegmentedControlOption,
};
use leptos::*;

use crate::{
    context::{use_chrome, SIDEBAR_DOM_ID},
    model::ThemeMode,
    reducer::ChromeAction,
};

fn theme_mode_icon(mode: ThemeMode) -> IconName {
    match mode {
        ThemeMode::Light => IconName::WeatherSunny,
        ThemeMode::Dark => IconName::WeatherMoon,
        ThemeMode::System => IconName::Desktop,
    }
}

#[component]
/// Top application bar with the sidebar toggle, brand title, search trigger, and theme control.
pub fn AppHeader(#[prop(into)] title: String) -> impl IntoView {
    let chrome = use_chrome();
    let sidebar_open = Signal::derive(move || chrome.state.get().sidebar_open);

    view! {
        <header class="chrome-header">
            <Cluster
                gap=LayoutGap::Sm
                justify=LayoutJustify::Between
                padding=LayoutPadding::Sm
            >
                <Cluster gap=LayoutGap::Sm ui_slot="brand">
                    <IconButton
                        icon=IconName::Navigation
                        aria_label="Toggle navigation sidebar"
                        aria_controls=SIDEBAR_DOM_ID
                        aria_expanded=sidebar_open
                        on_click=Callback::new(move |_| {
                            chrome.dispatch_action(ChromeAction::ToggleSidebar);
                        })
                    />
                    <Heading>{title}</Heading>
                </Cluster>
                <Cluster gap=LayoutGap::Sm ui_slot="tools">
                    <Button
                        variant=ButtonVariant::Quiet
                        leading_icon=IconName::Search
                        aria_label="Open search"
                        aria_keyshortcuts="Control+K"
                        title="Search (Ctrl+K)"
                        on_click=Callback::new(move |_| {
                            chrome.dispatch_action(ChromeAction::OpenSearch);
                        })
                    >
                        "Search"
                    </Button>
                    <ThemeToggle />
                </Cluster>
            </Cluster>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let chrome = use_chrome();

    view! {
        <SegmentedControl aria_label="Theme mode" ui_slot="theme">
            {ThemeMode::ALL
                .into_iter()
                .map(|mode| {
                    let selected = Signal::derive(move || chrome.state.get().theme_mode == mode);
                    view! {
                        <SegmentedControlOption
                            aria_label=mode.label()
                            ui_slot=mode.token()
                            selected=selected
                            on_click=Callback::new(move |_| {
                                chrome.dispatch_action(ChromeAction::SetThemeMode { mode });
                            })
                        >
                            <Icon icon=theme_mode_icon(mode) size=IconSize::Sm />
                            <span>{mode.label()}</span>
                        </SegmentedControlOption>
                    }
                })
                .collect_view()}
        </SegmentedControl>
    }
}
