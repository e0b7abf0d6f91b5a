//! Shared Dioxus components and Chart.js bridge for the Pulse dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js render functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `viewport`: Browser viewport source, resize subscription, `use_responsive`
//! - `theme`: Theme persistence (local storage) and document attribute wiring
//! - `components`: Reusable RSX components (cards, containers, sidebar, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod theme;
pub mod viewport;
