//! Light/dark theme toggle button.

use crate::state::AppState;
use dioxus::prelude::*;
use pulse_core::theme::Theme;

/// Toggle between light and dark theme.
///
/// Only flips the signal; persisting the preference and updating the
/// document attribute happen in the app's theme effect.
#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let theme = (state.theme)();
    let (glyph, title) = match theme {
        Theme::Light => ("🌙", "Switch to dark theme"),
        Theme::Dark => ("☀️", "Switch to light theme"),
    };

    rsx! {
        button {
            style: "border: 1px solid rgba(128, 128, 128, 0.3); background: transparent; border-radius: 10px; padding: 8px 12px; cursor: pointer; font-size: 16px;",
            title: "{title}",
            onclick: move |_| {
                let next = (state.theme)().toggled();
                state.theme.set(next);
            },
            "{glyph}"
        }
    }
}
