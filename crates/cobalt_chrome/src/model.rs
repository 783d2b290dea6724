use serde::{Deserialize, Serialize};

pub const CHROME_PREFS_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    pub fn from_token(raw: &str) -> Option<ThemeMode> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::System
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeState {
    pub theme_mode: ThemeMode,
    pub sidebar_open: bool,
    pub search_open: bool,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            sidebar_open: true,
            search_open: false,
        }
    }
}

impl ChromeState {
    pub fn prefs(&self) -> ChromePrefs {
        ChromePrefs {
            schema_version: CHROME_PREFS_SCHEMA_VERSION,
            theme_mode: self.theme_mode,
            sidebar_open: self.sidebar_open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromePrefs {
    pub schema_version: u32,
    pub theme_mode: ThemeMode,
    pub sidebar_open: bool,
}

impl Default for ChromePrefs {
    fn default() -> Self {
        Self {
            schema_version: CHROME_PREFS_SCHEMA_VERSION,
            theme_mode: ThemeMode::default(),
            sidebar_open: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_tokens_parse_to_their_modes() {
        assert_eq!(ThemeMode::from_token("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_token("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_token("system"), Some(ThemeMode::System));
    }

    #[test]
    fn theme_parser_trims_and_rejects_unknown_tokens() {
        assert_eq!(ThemeMode::from_token(" dark \n"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_token("sepia"), None);
        assert_eq!(ThemeMode::from_token(""), None);
    }
}
