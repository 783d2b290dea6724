//! Chrome actions, side-effect intents, and transition logic for the application shell.

use crate::model::{ChromePrefs, ChromeState, ThemeMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_chrome`] to mutate [`ChromeState`].
pub enum ChromeAction {
    /// Select a theme mode.
    SetThemeMode {
        /// Theme mode to apply.
        mode: ThemeMode,
    },
    /// Toggle the navigation sidebar open/closed.
    ToggleSidebar,
    /// Force the sidebar into a specific open state.
    SetSidebarOpen {
        /// Whether the sidebar should be open.
        open: bool,
    },
    /// Open the search overlay.
    OpenSearch,
    /// Close the search overlay if open.
    CloseSearch,
    /// Toggle the search overlay open/closed.
    ToggleSearch,
    /// Hydrate chrome state from persisted preferences.
    HydratePrefs {
        /// Preferences payload to restore.
        prefs: ChromePrefs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_chrome`] for the provider to execute.
pub enum ChromeEffect {
    /// Persist the current preference snapshot.
    PersistPrefs,
    /// Move focus into the search overlay input.
    FocusSearchInput,
}

/// Applies a [`ChromeAction`] to the chrome state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for shell-level theme,
/// sidebar, and search-overlay state. Actions that would not change state emit no
/// effects, so repeated dispatches of the same intent never trigger redundant
/// persistence or focus work.
pub fn reduce_chrome(state: &mut ChromeState, action: ChromeAction) -> Vec<ChromeEffect> {
    let mut effects = Vec::new();
    match action {
        ChromeAction::SetThemeMode { mode } => {
            if state.theme_mode != mode {
                state.theme_mode = mode;
                effects.push(ChromeEffect::PersistPrefs);
            }
        }
        ChromeAction::ToggleSidebar => {
            state.sidebar_open = !state.sidebar_open;
            effects.push(ChromeEffect::PersistPrefs);
        }
        ChromeAction::SetSidebarOpen { open } => {
            if state.sidebar_open != open {
                state.sidebar_open = open;
                effects.push(ChromeEffect::PersistPrefs);
            }
        }
        ChromeAction::OpenSearch => {
            if !state.search_open {
                state.search_open = true;
                effects.push(ChromeEffect::FocusSearchInput);
            }
        }
        ChromeAction::CloseSearch => {
            state.search_open = false;
        }
        ChromeAction::ToggleSearch => {
            let next = if state.search_open {
                ChromeAction::CloseSearch
            } else {
                ChromeAction::OpenSearch
            };
            effects.extend(reduce_chrome(state, next));
        }
        ChromeAction::HydratePrefs { prefs } => {
            // No persist effect here, so boot never writes back what it just read.
            state.theme_mode = prefs.theme_mode;
            state.sidebar_open = prefs.sidebar_open;
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::CHROME_PREFS_SCHEMA_VERSION;

    #[test]
    fn selecting_a_new_theme_mode_persists_preferences() {
        let mut state = ChromeState::default();

        let effects = reduce_chrome(
            &mut state,
            ChromeAction::SetThemeMode {
                mode: ThemeMode::Dark,
            },
        );

        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(effects, vec![ChromeEffect::PersistPrefs]);
    }

    #[test]
    fn reselecting_the_active_theme_mode_changes_nothing() {
        let mut state = ChromeState::default();
        let before = state;

        let effects = reduce_chrome(
            &mut state,
            ChromeAction::SetThemeMode {
                mode: ThemeMode::System,
            },
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn toggling_the_sidebar_flips_state_and_persists() {
        let mut state = ChromeState::default();
        assert!(state.sidebar_open);

        let effects = reduce_chrome(&mut state, ChromeAction::ToggleSidebar);
        assert!(!state.sidebar_open);
        assert_eq!(effects, vec![ChromeEffect::PersistPrefs]);

        let effects = reduce_chrome(&mut state, ChromeAction::ToggleSidebar);
        assert!(state.sidebar_open);
        assert_eq!(effects, vec![ChromeEffect::PersistPrefs]);
    }

    #[test]
    fn forcing_the_sidebar_into_its_current_state_is_silent() {
        let mut state = ChromeState::default();

        let effects = reduce_chrome(&mut state, ChromeAction::SetSidebarOpen { open: true });

        assert!(state.sidebar_open);
        assert!(effects.is_empty());
    }

    #[test]
    fn opening_search_requests_input_focus_once() {
        let mut state = ChromeState::default();

        let effects = reduce_chrome(&mut state, ChromeAction::OpenSearch);
        assert!(state.search_open);
        assert_eq!(effects, vec![ChromeEffect::FocusSearchInput]);

        let effects = reduce_chrome(&mut state, ChromeAction::OpenSearch);
        assert!(state.search_open);
        assert!(effects.is_empty());
    }

    #[test]
    fn toggling_search_opens_then_closes() {
        let mut state = ChromeState::default();

        let effects = reduce_chrome(&mut state, ChromeAction::ToggleSearch);
        assert!(state.search_open);
        assert_eq!(effects, vec![ChromeEffect::FocusSearchInput]);

        let effects = reduce_chrome(&mut state, ChromeAction::ToggleSearch);
        assert!(!state.search_open);
        assert!(effects.is_empty());
    }

    #[test]
    fn closing_search_never_touches_preferences() {
        let mut state = ChromeState {
            search_open: true,
            ..ChromeState::default()
        };

        let effects = reduce_chrome(&mut state, ChromeAction::CloseSearch);

        assert!(!state.search_open);
        assert!(effects.is_empty());
    }

    #[test]
    fn hydrating_prefs_restores_theme_and_sidebar_without_persisting() {
        let mut state = ChromeState::default();
        let prefs = ChromePrefs {
            schema_version: CHROME_PREFS_SCHEMA_VERSION,
            theme_mode: ThemeMode::Dark,
            sidebar_open: false,
        };

        let effects = reduce_chrome(&mut state, ChromeAction::HydratePrefs { prefs });

        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert!(!state.sidebar_open);
        assert!(!state.search_open);
        assert!(effects.is_empty());
    }

    #[test]
    fn preference_snapshot_reflects_current_state() {
        let mut state = ChromeState::default();
        let _ = reduce_chrome(
            &mut state,
            ChromeAction::SetThemeMode {
                mode: ThemeMode::Light,
            },
        );
        let _ = reduce_chrome(&mut state, ChromeAction::ToggleSidebar);

        let prefs = state.prefs();

        assert_eq!(prefs.schema_version, CHROME_PREFS_SCHEMA_VERSION);
        assert_eq!(prefs.theme_mode, ThemeMode::Light);
        assert!(!prefs.sidebar_open);
    }
}
