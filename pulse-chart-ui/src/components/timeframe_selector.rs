//! Reporting window selector for the dashboard header.

use crate::state::AppState;
use dioxus::prelude::*;
use pulse_core::metrics::Timeframe;

/// Button group selecting the reporting window (24h/7d/30d/90d).
#[component]
pub fn TimeframeSelector() -> Element {
    let state = use_context::<AppState>();
    let current = (state.timeframe)();

    rsx! {
        div {
            style: "display: inline-flex; gap: 4px; padding: 4px; border: 1px solid rgba(128, 128, 128, 0.3); border-radius: 10px;",
            for timeframe in Timeframe::ALL {
                TimeframeButton {
                    key: "{timeframe.label()}",
                    timeframe,
                    active: timeframe == current,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TimeframeButtonProps {
    timeframe: Timeframe,
    active: bool,
}

#[component]
fn TimeframeButton(props: TimeframeButtonProps) -> Element {
    let mut state = use_context::<AppState>();
    let button_style = if props.active {
        "border: none; border-radius: 8px; padding: 6px 12px; cursor: pointer; font-size: 12px; font-weight: 600; background: rgba(99, 102, 241, 0.8); color: #fff;"
    } else {
        "border: none; border-radius: 8px; padding: 6px 12px; cursor: pointer; font-size: 12px; background: transparent;"
    };
    let timeframe = props.timeframe;

    rsx! {
        button {
            style: "{button_style}",
            onclick: move |_| state.timeframe.set(timeframe),
            "{props.timeframe.label()}"
        }
    }
}
