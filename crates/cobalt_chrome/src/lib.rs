pub mod components;
pub mod context;
pub mod model;
pub mod persistence;
pub mod reducer;

mod effects;

pub use components::{AppHeader, SearchOverlay, Sidebar};
pub use context::{
    resolve_theme, use_chrome, ChromeContext, ChromeProvider, SEARCH_INPUT_DOM_ID,
    SEARCH_RESULTS_DOM_ID, SIDEBAR_DOM_ID,
};
pub use model::*;
pub use persistence::{load_prefs, save_prefs};
pub use reducer::{reduce_chrome, ChromeAction, ChromeEffect};
