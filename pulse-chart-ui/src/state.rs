//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use pulse_core::metrics::Timeframe;
use pulse_core::mock::DashboardData;
use pulse_core::theme::Theme;

use crate::theme;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the simulated data load is still in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current UI theme (restored from local storage)
    pub theme: Signal<Theme>,
    /// Whether the sidebar is collapsed
    pub sidebar_collapsed: Signal<bool>,
    /// Currently selected navigation section id
    pub active_section: Signal<String>,
    /// Reporting window selected in the header
    pub timeframe: Signal<Timeframe>,
    /// Generated dashboard dataset (None until loaded)
    pub data: Signal<Option<DashboardData>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            theme: Signal::new(theme::load_theme()),
            sidebar_collapsed: Signal::new(false),
            active_section: Signal::new("dashboard".to_string()),
            timeframe: Signal::new(Timeframe::default()),
            data: Signal::new(None),
        }
    }
}
