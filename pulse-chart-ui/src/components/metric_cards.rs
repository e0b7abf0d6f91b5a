//! Metric stat cards arranged in a responsive grid.

use dioxus::prelude::*;
use pulse_core::metrics::{Metric, Trend};

/// Props for MetricCards
#[derive(Props, Clone, PartialEq)]
pub struct MetricCardsProps {
    pub metrics: Vec<Metric>,
    /// Column count, usually from `Responsive::grid_columns()`
    #[props(default = 4)]
    pub columns: u32,
}

/// Grid of headline stat cards.
#[component]
pub fn MetricCards(props: MetricCardsProps) -> Element {
    if props.metrics.is_empty() {
        return rsx! {
            div {
                style: "padding: 24px; text-align: center; opacity: 0.65;",
                "No metrics available"
            }
        };
    }

    let grid_style = format!(
        "display: grid; grid-template-columns: repeat({}, 1fr); gap: 16px; margin-bottom: 24px;",
        props.columns
    );

    rsx! {
        div {
            style: "{grid_style}",
            for metric in props.metrics {
                MetricCard {
                    key: "{metric.key}",
                    metric,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MetricCardProps {
    metric: Metric,
}

/// One stat card: icon, trend arrow, title, value, change, description.
#[component]
fn MetricCard(props: MetricCardProps) -> Element {
    let metric = &props.metric;
    let trend = metric.trend();
    let change_color = match trend {
        Trend::Up => "#22C55E",
        Trend::Down => "#EF4444",
        Trend::Flat => "#9CA3AF",
    };

    rsx! {
        div {
            class: "metric-card",
            style: "padding: 20px; border-radius: 16px; border: 1px solid rgba(128, 128, 128, 0.2);",
            aria_label: "{metric.title}: {metric.formatted_value()}, {metric.formatted_change()} {metric.description}",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                span {
                    style: "font-size: 24px;",
                    aria_hidden: "true",
                    "{metric.icon}"
                }
                span {
                    style: "color: {change_color}; font-size: 14px;",
                    aria_hidden: "true",
                    "{trend.arrow()}"
                }
            }
            h3 {
                style: "margin: 0 0 4px 0; font-size: 13px; font-weight: 500; opacity: 0.7;",
                "{metric.title}"
            }
            div {
                style: "font-size: 26px; font-weight: 700; margin-bottom: 8px;",
                "{metric.formatted_value()}"
            }
            div {
                style: "display: flex; gap: 8px; align-items: baseline; font-size: 12px;",
                span {
                    style: "color: {change_color}; font-weight: 600;",
                    "{metric.formatted_change()}"
                }
                span {
                    style: "opacity: 0.6;",
                    "{metric.description}"
                }
            }
        }
    }
}
