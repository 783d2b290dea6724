//! Internal DOM focus helpers for chrome overlay widgets.

use wasm_bindgen::JsCast;

/// Returns the current active element as an [`web_sys::HtmlElement`] when possible.
pub(super) fn active_html_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an HTML element, ignoring browser focus errors.
pub(super) fn focus_html_element(element: &web_sys::HtmlElement) {
    let _ = element.focus();
}

fn listbox_options(list_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Some(list) = document.get_element_by_id(list_id) else {
        return Vec::new();
    };
    let Ok(nodes) = list.query_selector_all(r#"[role="option"]"#) else {
        return Vec::new();
    };

    let mut options = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(option) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if option.get_attribute("disabled").is_some() {
            continue;
        }
        if option.get_attribute("aria-disabled").as_deref() == Some("true") {
            continue;
        }
        options.push(option);
    }

    options
}

/// Focuses the first enabled option inside a listbox container.
pub(super) fn focus_first_option(list_id: &str) -> bool {
    let options = listbox_options(list_id);
    if let Some(first) = options.first() {
        focus_html_element(first);
        true
    } else {
        false
    }
}

fn focus_option_relative(list_id: &str, delta: i32) -> bool {
    let options = listbox_options(list_id);
    if options.is_empty() {
        return false;
    }

    let active_id = active_html_element().map(|el| el.id()).unwrap_or_default();
    let current_index = options
        .iter()
        .position(|option| !active_id.is_empty() && option.id() == active_id)
        .unwrap_or(0);
    let len = options.len() as i32;
    let next_index = (current_index as i32 + delta).rem_euclid(len) as usize;
    focus_html_element(&options[next_index]);
    true
}

fn focus_option_edge(list_id: &str, first: bool) -> bool {
    let options = listbox_options(list_id);
    if options.is_empty() {
        return false;
    }
    let index = if first {
        0
    } else {
        options.len().saturating_sub(1)
    };
    focus_html_element(&options[index]);
    true
}

/// Handles arrow/home/end listbox navigation and prevents default when handled.
pub(super) fn handle_option_roving_keydown(ev: &web_sys::KeyboardEvent, list_id: &str) -> bool {
    let handled = match ev.key().as_str() {
        "ArrowDown" => focus_option_relative(list_id, 1),
        "ArrowUp" => focus_option_relative(list_id, -1),
        "Home" => focus_option_edge(list_id, true),
        "End" => focus_option_edge(list_id, false),
        _ => false,
    };

    if handled {
        ev.prevent_default();
        ev.stop_propagation();
    }
    handled
}
