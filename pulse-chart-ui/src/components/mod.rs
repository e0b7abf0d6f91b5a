//! Reusable Dioxus RSX components for the Pulse dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod metric_cards;
mod sidebar;
mod theme_toggle;
mod timeframe_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_cards::MetricCards;
pub use sidebar::{Sidebar, NAV_SECTIONS};
pub use theme_toggle::ThemeToggle;
pub use timeframe_selector::TimeframeSelector;
