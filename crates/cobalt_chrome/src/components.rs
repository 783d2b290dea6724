//! Application chrome composition for the shell header, sidebar, and search overlay.

mod a11y;
mod header;
mod search;
mod sidebar;

pub use self::{header::AppHeader, search::SearchOverlay, sidebar::Sidebar};
