//! Chrome provider and context wiring for the application shell.
//!
//! This module owns the long-lived reducer container, chrome effect queue, theme
//! synchronization, and global keyboard shortcuts. UI composition stays in
//! [`crate::components`].

use leptos::*;

use crate::{
    effects,
    model::{ChromeState, ResolvedTheme, ThemeMode},
    persistence,
    reducer::{reduce_chrome, ChromeAction, ChromeEffect},
};

/// DOM id rendered on the search overlay input so focus effects can reach it.
pub const SEARCH_INPUT_DOM_ID: &str = "chrome-search-input";

/// DOM id rendered on the search overlay result list for roving focus.
pub const SEARCH_RESULTS_DOM_ID: &str = "chrome-search-results";

/// DOM id rendered on the navigation sidebar so the header toggle can reference it.
pub const SIDEBAR_DOM_ID: &str = "chrome-sidebar";

#[derive(Clone, Copy)]
/// Leptos context for reading chrome state and dispatching [`ChromeAction`] values.
pub struct ChromeContext {
    /// Reactive chrome state signal.
    pub state: RwSignal<ChromeState>,
    /// Queue of chrome effects emitted by the reducer and processed by the provider.
    pub effects: RwSignal<Vec<ChromeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ChromeAction>,
}

impl ChromeContext {
    /// Dispatches a reducer action through the context callback.
    pub fn dispatch_action(&self, action: ChromeAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`ChromeContext`] to descendant components and boots persisted preferences.
pub fn ChromeProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(ChromeState::default());
    let effect_queue = create_rw_signal(Vec::<ChromeEffect>::new());

    let dispatch = Callback::new(move |action: ChromeAction| {
        let mut chrome = state.get_untracked();
        let previous = chrome;
        let new_effects = reduce_chrome(&mut chrome, action);
        if chrome != previous {
            state.set(chrome);
        }
        if !new_effects.is_empty() {
            let mut queue = effect_queue.get_untracked();
            queue.extend(new_effects);
            effect_queue.set(queue);
        }
    });

    let chrome = ChromeContext {
        state,
        effects: effect_queue,
        dispatch,
    };

    provide_context(chrome);

    if let Some(prefs) = persistence::load_prefs() {
        chrome.dispatch_action(ChromeAction::HydratePrefs { prefs });
    }
    effects::install(chrome);
    install_theme_sync(chrome);
    install_global_shortcuts(chrome);

    children().into_view()
}

/// Returns the current [`ChromeContext`].
///
/// # Panics
///
/// Panics if called outside [`ChromeProvider`].
pub fn use_chrome() -> ChromeContext {
    use_context::<ChromeContext>().expect("ChromeContext not provided")
}

/// Resolves a theme mode to the concrete light/dark theme applied to the document.
///
/// [`ThemeMode::System`] consults the host `prefers-color-scheme` media query at
/// resolution time; outside a browser it falls back to light.
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => system_resolved_theme(),
    }
}

fn system_resolved_theme() -> ResolvedTheme {
    #[cfg(target_arch = "wasm32")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|window| {
                window
                    .match_media("(prefers-color-scheme: dark)")
                    .ok()
                    .flatten()
            })
            .map(|query| query.matches())
            .unwrap_or(false);
        if prefers_dark {
            return ResolvedTheme::Dark;
        }
    }

    ResolvedTheme::Light
}

fn install_theme_sync(chrome: ChromeContext) {
    create_effect(move |_| {
        let theme = resolve_theme(chrome.state.get().theme_mode);
        apply_document_theme(theme);
    });
}

fn apply_document_theme(theme: ResolvedTheme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let _ = root.set_attribute("data-ui-theme", theme.token());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

fn install_global_shortcuts(chrome: ChromeContext) {
    // Escape is owned by the overlay itself; the window listener only carries the
    // open/close accelerator.
    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }

        let plain_meta = (ev.ctrl_key() || ev.meta_key()) && !ev.alt_key() && !ev.shift_key();
        if plain_meta && ev.key().eq_ignore_ascii_case("k") {
            ev.prevent_default();
            chrome.dispatch_action(ChromeAction::ToggleSearch);
        }
    });
    on_cleanup(move || shortcut_listener.remove());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn explicit_modes_resolve_to_themselves() {
        assert_eq!(resolve_theme(ThemeMode::Light), ResolvedTheme::Light);
        assert_eq!(resolve_theme(ThemeMode::Dark), ResolvedTheme::Dark);
    }

    #[test]
    fn system_mode_falls_back_to_light_off_browser() {
        assert_eq!(resolve_theme(ThemeMode::System), ResolvedTheme::Light);
    }
}
