//! Navigation sidebar with mobile overlay behavior.

use crate::state::AppState;
use crate::viewport::use_responsive;
use dioxus::prelude::*;

/// Navigation sections: (id, label, icon, description).
pub const NAV_SECTIONS: [(&str, &str, &str, &str); 7] = [
    ("dashboard", "Dashboard", "📊", "Overview & Analytics"),
    ("analytics", "Analytics", "📈", "Detailed Reports"),
    ("revenue", "Revenue", "💰", "Financial Data"),
    ("users", "Users", "👥", "User Statistics"),
    ("performance", "Performance", "⚡", "System Metrics"),
    ("reports", "Reports", "📋", "Generated Reports"),
    ("settings", "Settings", "⚙️", "Configuration"),
];

/// Collapsible navigation sidebar.
///
/// On mobile the sidebar spans the viewport over a click-to-close overlay
/// and selecting a section closes it; on wider screens it keeps a fixed
/// width from the responsive resolver.
#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<AppState>();
    let responsive = use_responsive();
    let snapshot = responsive.snapshot();
    let collapsed = (state.sidebar_collapsed)();

    if collapsed {
        return rsx! {};
    }

    let is_mobile = snapshot.is_mobile();
    let width = snapshot.sidebar_width().to_string();
    let aside_style = if is_mobile {
        format!(
            "position: fixed; top: 0; bottom: 0; left: 0; width: {}; z-index: 20; padding: 16px; overflow-y: auto; box-sizing: border-box;",
            width
        )
    } else {
        format!(
            "width: {}; flex-shrink: 0; padding: 16px; overflow-y: auto; box-sizing: border-box;",
            width
        )
    };

    rsx! {
        if is_mobile {
            div {
                style: "position: fixed; top: 0; right: 0; bottom: 0; left: 0; background: rgba(0, 0, 0, 0.4); z-index: 10;",
                aria_hidden: "true",
                onclick: move |_| state.sidebar_collapsed.set(true),
            }
        }

        aside {
            class: "sidebar",
            role: "navigation",
            style: "{aside_style}",
            nav {
                for (id, label, icon, description) in NAV_SECTIONS {
                    NavItem {
                        key: "{id}",
                        id,
                        label,
                        icon,
                        description,
                        mobile: is_mobile,
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavItemProps {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    description: &'static str,
    mobile: bool,
}

/// One sidebar entry; selecting it on mobile closes the sidebar.
#[component]
fn NavItem(props: NavItemProps) -> Element {
    let mut state = use_context::<AppState>();
    let is_active = (state.active_section)() == props.id;
    let item_style = if is_active {
        "display: flex; gap: 12px; align-items: center; width: 100%; text-align: left; padding: 10px 12px; margin-bottom: 4px; border-radius: 10px; border: none; cursor: pointer; background: rgba(99, 102, 241, 0.18);"
    } else {
        "display: flex; gap: 12px; align-items: center; width: 100%; text-align: left; padding: 10px 12px; margin-bottom: 4px; border-radius: 10px; border: none; cursor: pointer; background: transparent;"
    };
    let id = props.id;
    let mobile = props.mobile;

    rsx! {
        button {
            style: "{item_style}",
            onclick: move |_| {
                state.active_section.set(id.to_string());
                if mobile {
                    state.sidebar_collapsed.set(true);
                }
            },
            span {
                style: "font-size: 18px;",
                aria_hidden: "true",
                "{props.icon}"
            }
            span {
                div {
                    style: "font-size: 14px; font-weight: 600;",
                    "{props.label}"
                }
                div {
                    style: "font-size: 11px; opacity: 0.6;",
                    "{props.description}"
                }
            }
        }
    }
}
