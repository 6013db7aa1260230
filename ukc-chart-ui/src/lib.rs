//! Shared Dioxus components and D3.js bridge for the UK climate dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `hooks`: window size tracking and the selection -> API sync loop
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod hooks;
pub mod js_bridge;
pub mod state;
