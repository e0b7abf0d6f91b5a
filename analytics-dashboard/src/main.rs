//! Pulse Analytics Dashboard
//!
//! Single-page dashboard of mock business metrics: headline stat cards plus
//! revenue, sales, traffic, and performance charts, with theme toggling, a
//! collapsible sidebar, and a timeframe selector.
//!
//! Data flow:
//! 1. There is no backend. `pulse_core::mock` derives every dataset in
//!    memory from the selected timeframe; the initial "load" is a short
//!    simulated delay.
//! 2. The viewport is tracked through `use_responsive`; grid columns,
//!    chart heights, and sidebar behavior all come from the responsive
//!    resolver, recomputed on every resize notification.
//! 3. Charts render through the Chart.js bridge: options and datasets are
//!    composed in `pulse_core::chart` and handed over as JSON.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use pulse_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MetricCards, Sidebar, ThemeToggle,
    TimeframeSelector,
};
use pulse_chart_ui::state::AppState;
use pulse_chart_ui::viewport::use_responsive;
use pulse_chart_ui::{js_bridge, theme};
use pulse_core::breakpoint::Breakpoint;
use pulse_core::chart::{self, ChartKind};
use pulse_core::mock;
use pulse_core::responsive::{FontVariant, ResponsiveValues, SpacingSize};

/// Chart container DOM element ids used by Chart.js to render into.
const REVENUE_CHART_ID: &str = "revenue-chart";
const SALES_CHART_ID: &str = "sales-chart";
const TRAFFIC_CHART_ID: &str = "traffic-chart";
const PERFORMANCE_CHART_ID: &str = "performance-chart";

/// Simulated latency for the initial load and for refreshes.
const INITIAL_LOAD_MS: u32 = 1500;
const REFRESH_MS: u32 = 1000;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("analytics-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let responsive = use_responsive();

    // Simulated initial load: the dataset appears after a short delay.
    use_future(move || async move {
        TimeoutFuture::new(INITIAL_LOAD_MS).await;
        state.loading.set(false);
        log::info!("dashboard data loaded");
    });

    // Re-derive the dataset whenever the timeframe changes.
    use_effect(move || {
        let timeframe = (state.timeframe)();
        state.data.set(Some(mock::dashboard_data(timeframe)));
    });

    // Apply and persist the theme on every change.
    use_effect(move || {
        let current = (state.theme)();
        theme::apply_theme(current);
        theme::store_theme(current);
    });

    // Follow the viewport: collapse the sidebar below the desktop
    // breakpoint, expand it again above. Runs on every resize
    // notification.
    use_effect(move || {
        let snapshot = responsive.snapshot();
        state
            .sidebar_collapsed
            .set(snapshot.collapse_sidebar_by_default());
    });

    rsx! {
        if (state.loading)() {
            div {
                style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 4px;",
                h2 { "Loading Dashboard..." }
                p {
                    style: "opacity: 0.65; margin: 0;",
                    "Preparing your analytics data"
                }
            }
        } else {
            div {
                style: "display: flex; min-height: 100vh;",
                Sidebar {}
                Dashboard {}
            }
        }
    }
}

#[component]
fn Dashboard() -> Element {
    let mut state = use_context::<AppState>();
    let responsive = use_responsive();
    let snapshot = responsive.snapshot();

    // Charts only need rebuilding when the device class flips, not on
    // every pixel of a resize; Chart.js follows the container in between.
    let device_class = use_memo(move || responsive.snapshot().device_class());

    // Render all four charts whenever the dataset, theme, or device class
    // changes.
    use_effect(move || {
        let Some(data) = (state.data)() else {
            return;
        };
        let current_theme = (state.theme)();
        let device = device_class();

        js_bridge::init_charts();
        let charts = [
            (ChartKind::Line, &data.revenue, REVENUE_CHART_ID),
            (ChartKind::Bar, &data.sales, SALES_CHART_ID),
            (ChartKind::Doughnut, &data.traffic, TRAFFIC_CHART_ID),
            (ChartKind::Line, &data.performance, PERFORMANCE_CHART_ID),
        ];
        for (kind, chart_data, container) in charts {
            match chart::chart_payload(kind, chart_data, current_theme, device) {
                Ok((data_json, options_json)) => match kind {
                    ChartKind::Line => {
                        js_bridge::render_line_chart(container, &data_json, &options_json)
                    }
                    ChartKind::Bar => {
                        js_bridge::render_bar_chart(container, &data_json, &options_json)
                    }
                    ChartKind::Doughnut => {
                        js_bridge::render_doughnut_chart(container, &data_json, &options_json)
                    }
                },
                Err(err) => {
                    log::error!("failed to compose {}: {}", container, err);
                    state
                        .error_msg
                        .set(Some(format!("Failed to prepare charts: {}", err)));
                }
            }
        }
    });

    // spawn_forever: the task must outlive this component, which unmounts
    // while the loading screen is up.
    let on_refresh = move |_| {
        spawn_forever(async move {
            state.loading.set(true);
            TimeoutFuture::new(REFRESH_MS).await;
            state.data.with_mut(|data| {
                if let Some(data) = data {
                    mock::refresh(data, js_sys::Math::random(), js_sys::Math::random());
                }
            });
            state.loading.set(false);
        });
    };
    let on_sidebar_toggle = move |_| {
        let collapsed = (state.sidebar_collapsed)();
        state.sidebar_collapsed.set(!collapsed);
    };

    // Layout parameters for the current viewport.
    let chart_height = snapshot.chart_height();
    let metric_columns = snapshot.grid_columns();
    let chart_columns = snapshot
        .resolve(&ResponsiveValues::from([
            (Breakpoint::Xs, 1u32),
            (Breakpoint::Lg, 2u32),
        ]))
        .copied()
        .unwrap_or(1);
    let padding = snapshot.spacing(SpacingSize::Md);
    let title_size = snapshot.font_size(FontVariant::H3);

    let charts_grid_style = format!(
        "display: grid; grid-template-columns: repeat({}, 1fr); gap: 16px;",
        chart_columns
    );

    rsx! {
        main {
            style: "flex: 1; min-width: 0; padding: {padding};",

            header {
                style: "display: flex; flex-wrap: wrap; gap: 12px; justify-content: space-between; align-items: center; margin-bottom: 24px;",
                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    button {
                        style: "border: 1px solid rgba(128, 128, 128, 0.3); background: transparent; border-radius: 10px; padding: 8px 12px; cursor: pointer; font-size: 16px;",
                        title: "Toggle sidebar",
                        onclick: on_sidebar_toggle,
                        "☰"
                    }
                    div {
                        h1 {
                            style: "margin: 0; font-size: {title_size};",
                            "Analytics Dashboard"
                        }
                        p {
                            style: "margin: 2px 0 0 0; font-size: 13px; opacity: 0.65;",
                            "Monitor your business performance in real-time"
                        }
                    }
                }
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    TimeframeSelector {}
                    button {
                        style: "border: 1px solid rgba(128, 128, 128, 0.3); background: transparent; border-radius: 10px; padding: 8px 12px; cursor: pointer; font-size: 16px;",
                        title: "Refresh data",
                        onclick: on_refresh,
                        "🔄"
                    }
                    ThemeToggle {}
                }
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            if let Some(data) = (state.data)() {
                MetricCards {
                    metrics: data.metrics.clone(),
                    columns: metric_columns,
                }

                div {
                    style: "{charts_grid_style}",
                    ChartPanel {
                        container_id: REVENUE_CHART_ID,
                        title: "Revenue Overview",
                        subtitle: "Monthly revenue, current vs prior year",
                        height: chart_height,
                    }
                    ChartPanel {
                        container_id: SALES_CHART_ID,
                        title: "Sales by Channel",
                        subtitle: "Quarterly totals across channels",
                        height: chart_height,
                    }
                    ChartPanel {
                        container_id: TRAFFIC_CHART_ID,
                        title: "Traffic Sources",
                        subtitle: "Share of visits by source",
                        height: chart_height,
                    }
                    ChartPanel {
                        container_id: PERFORMANCE_CHART_ID,
                        title: "Weekly Performance",
                        subtitle: "Sales and leads per week",
                        height: chart_height,
                    }
                }
            } else {
                LoadingSpinner {}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ChartPanelProps {
    container_id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    height: u32,
}

/// One card wrapping a chart header and its Chart.js container.
#[component]
fn ChartPanel(props: ChartPanelProps) -> Element {
    rsx! {
        div {
            class: "chart-card",
            style: "padding: 16px; border-radius: 16px; border: 1px solid rgba(128, 128, 128, 0.2);",
            ChartHeader {
                title: props.title.to_string(),
                subtitle: props.subtitle.to_string(),
            }
            ChartContainer {
                id: props.container_id.to_string(),
                height: props.height,
            }
        }
    }
}
