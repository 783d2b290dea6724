//! Chrome preference persistence over window local storage.

use crate::model::{ChromePrefs, ThemeMode, CHROME_PREFS_SCHEMA_VERSION};

const PREFS_KEY: &str = "cobalt.chrome.prefs.v1";
const LEGACY_THEME_KEY: &str = "cobalt.theme";

/// Decodes a persisted preferences payload.
///
/// Payloads from older schema versions are coerced forward; payloads written by a
/// newer schema are rejected rather than partially applied.
pub(crate) fn decode_prefs(raw: &str) -> Option<ChromePrefs> {
    let mut prefs = serde_json::from_str::<ChromePrefs>(raw).ok()?;
    if prefs.schema_version > CHROME_PREFS_SCHEMA_VERSION {
        return None;
    }
    prefs.schema_version = CHROME_PREFS_SCHEMA_VERSION;
    Some(prefs)
}

/// Loads persisted chrome preferences, falling back to the legacy standalone
/// theme key (a bare theme token) when no versioned payload exists.
///
/// On non-WASM targets this returns `None`.
pub fn load_prefs() -> Option<ChromePrefs> {
    if let Some(prefs) = load_raw(PREFS_KEY).and_then(|raw| decode_prefs(&raw)) {
        return Some(prefs);
    }

    let raw = load_raw(LEGACY_THEME_KEY)?;
    let theme_mode = ThemeMode::from_token(&raw)?;
    Some(ChromePrefs {
        theme_mode,
        ..ChromePrefs::default()
    })
}

/// Persists the chrome preference snapshot under the versioned key.
pub fn save_prefs(prefs: &ChromePrefs) -> Result<(), String> {
    let raw = serde_json::to_string(prefs).map_err(|err| err.to_string())?;
    save_raw(PREFS_KEY, &raw)
}

/// Loads the raw string stored under a storage key.
fn load_raw(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

/// Writes a raw string under a storage key.
fn save_raw(key: &str, raw: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, raw)
            .map_err(|_| "localStorage write rejected".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decode_accepts_a_current_schema_payload() {
        let prefs = ChromePrefs {
            schema_version: CHROME_PREFS_SCHEMA_VERSION,
            theme_mode: ThemeMode::Dark,
            sidebar_open: false,
        };
        let raw = serde_json::to_string(&prefs).expect("encode prefs");

        assert_eq!(decode_prefs(&raw), Some(prefs));
    }

    #[test]
    fn decode_coerces_older_schema_versions_forward() {
        let raw = r#"{"schema_version":0,"theme_mode":"Light","sidebar_open":false}"#;

        let prefs = decode_prefs(raw).expect("older payload should decode");

        assert_eq!(prefs.schema_version, CHROME_PREFS_SCHEMA_VERSION);
        assert_eq!(prefs.theme_mode, ThemeMode::Light);
        assert!(!prefs.sidebar_open);
    }

    #[test]
    fn decode_fills_missing_fields_with_defaults() {
        let prefs = decode_prefs(r#"{"theme_mode":"Dark"}"#).expect("partial payload");

        assert_eq!(prefs.theme_mode, ThemeMode::Dark);
        assert!(prefs.sidebar_open);
    }

    #[test]
    fn decode_rejects_newer_schema_versions() {
        let raw = format!(
            r#"{{"schema_version":{},"theme_mode":"Dark","sidebar_open":true}}"#,
            CHROME_PREFS_SCHEMA_VERSION + 1,
        );

        assert_eq!(decode_prefs(&raw), None);
    }

    #[test]
    fn decode_rejects_malformed_payloads() {
        assert_eq!(decode_prefs("not json"), None);
        assert_eq!(decode_prefs(r#"{"theme_mode":"Sepia"}"#), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn loading_off_the_web_platform_yields_no_prefs() {
        assert_eq!(load_prefs(), None);
    }
}
