//! Explicit chrome effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{context::ChromeContext, persistence, reducer::ChromeEffect};

/// Installs the effect executor that drains reducer-emitted chrome effects in order.
pub(crate) fn install(chrome: ChromeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh
    // batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = chrome.effects.get();
        if queued.is_empty() {
            return;
        }

        chrome.effects.set(Vec::new());

        for effect in queued {
            run_chrome_effect(chrome, effect);
        }
    });
}

fn run_chrome_effect(chrome: ChromeContext, effect: ChromeEffect) {
    match effect {
        ChromeEffect::PersistPrefs => {
            let prefs = chrome.state.get_untracked().prefs();
            if let Err(err) = persistence::save_prefs(&prefs) {
                logging::warn!("chrome prefs persist failed: {err}");
            }
        }
        ChromeEffect::FocusSearchInput => focus_search_input(),
    }
}

fn focus_search_input() {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        use crate::context::SEARCH_INPUT_DOM_ID;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(SEARCH_INPUT_DOM_ID) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        // Defer one task so focus lands after the overlay finishes mounting.
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
}
