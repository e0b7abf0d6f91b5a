//! Theme persistence and document wiring.
//!
//! The preference lives under one local-storage key; the active theme is
//! reflected onto `<html data-theme="...">` so stylesheets can follow it.
//! Storage being absent or failing is a degraded-but-valid state: the app
//! continues on the light default.

use pulse_core::theme::Theme;

const THEME_STORAGE_KEY: &str = "dashboard-theme";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted theme preference, defaulting to light.
pub fn load_theme() -> Theme {
    let Some(storage) = storage() else {
        log::warn!("local storage unavailable; using the default theme");
        return Theme::default();
    };
    match storage.get_item(THEME_STORAGE_KEY) {
        Ok(Some(saved)) => saved.parse().unwrap_or_else(|err| {
            log::warn!("ignoring saved theme: {}", err);
            Theme::default()
        }),
        _ => Theme::default(),
    }
}

/// Persist the theme preference. Failures are logged, never fatal.
pub fn store_theme(theme: Theme) {
    if let Some(storage) = storage() {
        if storage.set_item(THEME_STORAGE_KEY, theme.name()).is_err() {
            log::warn!("failed to persist theme preference");
        }
    }
}

/// Reflect the theme onto the document element's `data-theme` attribute.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.name());
    }
}
