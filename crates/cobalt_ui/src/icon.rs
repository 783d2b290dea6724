//! Centralized Fluent UI System Icon abstraction for the design system.
//!
//! This module provides semantic icon identifiers and a single SVG renderer
//! so components do not embed raw icon strings or ad-hoc SVG snippets. The
//! catalog uses a subset of Fluent UI System Icons (`@fluentui/svg-icons`,
//! regular 24px) mapped to design-system semantics.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by design-system components.
pub enum IconName {
    /// Collapse/back chevron icon.
    ChevronLeft,
    /// Expand/forward chevron icon.
    ChevronRight,
    /// Jump-to-start double chevron icon.
    ChevronDoubleLeft,
    /// Jump-to-end double chevron icon.
    ChevronDoubleRight,
    /// Expand/open chevron icon.
    ChevronDown,
    /// Checkmark icon.
    Checkmark,
    /// Dismiss/close icon.
    Dismiss,
    /// Search magnifier icon.
    Search,
    /// Navigation/menu toggle icon.
    Navigation,
    /// Light theme icon.
    WeatherSunny,
    /// Dark theme icon.
    WeatherMoon,
    /// System/monitor icon.
    Desktop,
    /// Home destination icon.
    Home,
    /// Component grid icon.
    Grid,
    /// Data table icon.
    Table,
    /// Text document icon.
    DocumentText,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDoubleLeft => "chevron-double-left",
            Self::ChevronDoubleRight => "chevron-double-right",
            Self::ChevronDown => "chevron-down",
            Self::Checkmark => "checkmark",
            Self::Dismiss => "dismiss",
            Self::Search => "search",
            Self::Navigation => "navigation",
            Self::WeatherSunny => "weather-sunny",
            Self::WeatherMoon => "weather-moon",
            Self::Desktop => "desktop",
            Self::Home => "home",
            Self::Grid => "grid",
            Self::Table => "table",
            Self::DocumentText => "document-text",
        }
    }

    /// Raw SVG body markup for the icon.
    ///
    /// The paths are copied from `@fluentui/svg-icons` regular 24px SVG assets.
    fn svg_body(self) -> &'static str {
        match self {
            Self::ChevronLeft => {
                r#"<path d="M15.53 4.22c.3.3.3.77 0 1.06L8.81 12l6.72 6.72a.75.75 0 1 1-1.06 1.06l-7.25-7.25a.75.75 0 0 1 0-1.06l7.25-7.25c.3-.3.77-.3 1.06 0Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22a.75.75 0 0 0 0 1.06L15.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25c.3-.3.3-.77 0-1.06L9.53 4.22a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::ChevronDoubleLeft => {
                r#"<path d="M12.29 4.45c.3.28.33.75.05 1.06L6.76 11.5h-.02l5.6 5.99a.75.75 0 1 1-1.1 1.02l-6.07-6.5a.75.75 0 0 1 0-1.02l6.06-6.49a.75.75 0 0 1 1.06-.05Zm6.5 0c.3.28.33.75.05 1.06l-5.58 5.99 5.58 5.99a.75.75 0 1 1-1.1 1.02l-6.06-6.5a.75.75 0 0 1 0-1.02l6.05-6.49a.75.75 0 0 1 1.06-.05Z"/>"#
            }
            Self::ChevronDoubleRight => {
                r#"<path d="M11.71 4.45a.75.75 0 0 0-.05 1.06l5.58 5.99-5.58 5.99a.75.75 0 1 0 1.1 1.02l6.06-6.5a.75.75 0 0 0 0-1.02L12.77 4.5a.75.75 0 0 0-1.06-.05Zm-6.5 0a.75.75 0 0 0-.05 1.06l5.58 5.99-5.58 5.99a.75.75 0 1 0 1.1 1.02l6.07-6.5a.75.75 0 0 0 0-1.02L6.27 4.5a.75.75 0 0 0-1.06-.05Z"/>"#
            }
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Search => {
                r#"<path d="M10 2.75a7.25 7.25 0 0 1 5.63 11.82l4.9 4.9a.75.75 0 0 1-.98 1.13l-.08-.07-4.9-4.9A7.25 7.25 0 1 1 10 2.75Zm0 1.5a5.75 5.75 0 1 0 0 11.5 5.75 5.75 0 0 0 0-11.5Z"/>"#
            }
            Self::Navigation => {
                r#"<path d="M2.75 18h18.5a.75.75 0 0 1 .1 1.49l-.1.01H2.75a.75.75 0 0 1-.1-1.49l.1-.01h18.5-18.5Zm0-6.5h18.5a.75.75 0 0 1 .1 1.49l-.1.01H2.75a.75.75 0 0 1-.1-1.49l.1-.01h18.5-18.5Zm0-6.5h18.5a.75.75 0 0 1 .1 1.49l-.1.01H2.75a.75.75 0 0 1-.1-1.49L2.75 5h18.5-18.5Z"/>"#
            }
            Self::WeatherSunny => {
                r#"<path d="M12 2a.75.75 0 0 1 .75.75v1.5a.75.75 0 0 1-1.5 0v-1.5A.75.75 0 0 1 12 2Zm0 15a5 5 0 1 0 0-10 5 5 0 0 0 0 10Zm0-1.5a3.5 3.5 0 1 1 0-7 3.5 3.5 0 0 1 0 7Zm9.25-4.25a.75.75 0 0 1 .75.75.75.75 0 0 1-.75.75h-1.5a.75.75 0 0 1 0-1.5h1.5ZM4.25 11.25a.75.75 0 0 1 0 1.5h-1.5a.75.75 0 0 1 0-1.5h1.5ZM12 19a.75.75 0 0 1 .75.75v1.5a.75.75 0 0 1-1.5 0v-1.5A.75.75 0 0 1 12 19Zm6.89-13.95a.75.75 0 0 1 0 1.06l-1.06 1.07a.75.75 0 1 1-1.06-1.07l1.06-1.06a.75.75 0 0 1 1.06 0Zm-12.72 0a.75.75 0 0 1 1.06 0l1.06 1.06a.75.75 0 1 1-1.06 1.07L5.17 6.11a.75.75 0 0 1 0-1.06Zm12.72 13.9a.75.75 0 0 1-1.06 0l-1.06-1.06a.75.75 0 1 1 1.06-1.06l1.06 1.06c.3.29.3.76 0 1.06Zm-12.72 0a.75.75 0 0 1 0-1.06l1.06-1.06a.75.75 0 1 1 1.06 1.06l-1.06 1.06a.75.75 0 0 1-1.06 0Z"/>"#
            }
            Self::WeatherMoon => {
                r#"<path d="M20.03 12.63a.75.75 0 0 0-.9-.6 7 7 0 0 1-8.32-8.7.75.75 0 0 0-.95-.92A8.5 8.5 0 1 0 20.6 13.5c.1-.32-.03-.66-.3-.86l-.27-.01Zm-9.8-8.32a8.5 8.5 0 0 0 8.55 9.8 7 7 0 1 1-8.55-9.8Z"/>"#
            }
            Self::Desktop => {
                r#"<path d="M3 5.25C3 4.01 4 3 5.25 3h13.5C19.99 3 21 4 21 5.25v9.5c0 1.24-1 2.25-2.25 2.25H15v2.5h1.25a.75.75 0 0 1 0 1.5h-8.5a.75.75 0 0 1 0-1.5H9V17H5.25C4.01 17 3 16 3 14.75v-9.5ZM10.5 17v2.5h3V17h-3ZM5.25 4.5a.75.75 0 0 0-.75.75v9.5c0 .41.34.75.75.75h13.5c.41 0 .75-.34.75-.75v-9.5a.75.75 0 0 0-.75-.75H5.25Z"/>"#
            }
            Self::Home => {
                r#"<path d="M10.55 2.53a2.25 2.25 0 0 1 2.9 0l6.75 5.7c.5.42.8 1.05.8 1.71v9.81c0 .69-.56 1.25-1.25 1.25h-4.5c-.69 0-1.25-.56-1.25-1.25v-5.5a.25.25 0 0 0-.25-.25h-3.5a.25.25 0 0 0-.25.25v5.5c0 .69-.56 1.25-1.25 1.25h-4.5C4.56 21 4 20.44 4 19.75v-9.81c0-.66.3-1.29.8-1.72l6.75-5.69Zm1.93 1.15a.75.75 0 0 0-.96 0l-6.75 5.69a.75.75 0 0 0-.27.57v9.56h4v-5.25c0-.97.78-1.75 1.75-1.75h3.5c.97 0 1.75.78 1.75 1.75v5.25h4V9.94a.75.75 0 0 0-.27-.57l-6.75-5.7Z"/>"#
            }
            Self::Grid => {
                r#"<path d="M5.75 3A2.75 2.75 0 0 0 3 5.75v2.5A2.75 2.75 0 0 0 5.75 11h2.5A2.75 2.75 0 0 0 11 8.25v-2.5A2.75 2.75 0 0 0 8.25 3h-2.5ZM4.5 5.75c0-.69.56-1.25 1.25-1.25h2.5c.69 0 1.25.56 1.25 1.25v2.5c0 .69-.56 1.25-1.25 1.25h-2.5c-.69 0-1.25-.56-1.25-1.25v-2.5ZM5.75 13A2.75 2.75 0 0 0 3 15.75v2.5A2.75 2.75 0 0 0 5.75 21h2.5A2.75 2.75 0 0 0 11 18.25v-2.5A2.75 2.75 0 0 0 8.25 13h-2.5ZM4.5 15.75c0-.69.56-1.25 1.25-1.25h2.5c.69 0 1.25.56 1.25 1.25v2.5c0 .69-.56 1.25-1.25 1.25h-2.5c-.69 0-1.25-.56-1.25-1.25v-2.5ZM15.75 3A2.75 2.75 0 0 0 13 5.75v2.5A2.75 2.75 0 0 0 15.75 11h2.5A2.75 2.75 0 0 0 21 8.25v-2.5A2.75 2.75 0 0 0 18.25 3h-2.5ZM14.5 5.75c0-.69.56-1.25 1.25-1.25h2.5c.69 0 1.25.56 1.25 1.25v2.5c0 .69-.56 1.25-1.25 1.25h-2.5c-.69 0-1.25-.56-1.25-1.25v-2.5ZM15.75 13A2.75 2.75 0 0 0 13 15.75v2.5A2.75 2.75 0 0 0 15.75 21h2.5A2.75 2.75 0 0 0 21 18.25v-2.5A2.75 2.75 0 0 0 18.25 13h-2.5ZM14.5 15.75c0-.69.56-1.25 1.25-1.25h2.5c.69 0 1.25.56 1.25 1.25v2.5c0 .69-.56 1.25-1.25 1.25h-2.5c-.69 0-1.25-.56-1.25-1.25v-2.5Z"/>"#
            }
            Self::Table => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h11.5c1.8 0 3.25-1.46 3.25-3.25V6.25C21 4.45 19.54 3 17.75 3H6.25ZM4.5 9.5H9V12H4.5V9.5Zm0 4H9v2.5H4.5v-2.5Zm6 0h3v2.5h-3v-2.5Zm4.5 0h4.5v2.5H15v-2.5Zm4.5-1.5H15V9.5h4.5V12Zm-9 0V9.5h3V12h-3Zm-6 5.5h4.5v2H6.25c-.8 0-1.46-.53-1.68-1.25-.05-.24-.07-.49-.07-.75Zm6 2v-2h3v2h-3Zm4.5 0v-2h4.5c0 .26-.02.51-.07.75a1.75 1.75 0 0 1-1.68 1.25H15ZM19.5 8h-15V6.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V8Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (buttons/menus).
    #[default]
    Sm,
    /// 20px medium icon (prominent controls).
    Md,
    /// 24px large icon (feature tiles).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a Fluent UI System Icon SVG from the centralized icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
