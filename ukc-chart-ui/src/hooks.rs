//! Custom hooks: window size tracking and the selection -> API sync loop.

use crate::state::AppState;
use dioxus::prelude::*;
use std::rc::Rc;
use ukc_climate::sync::{FetchOutcome, PendingFetch};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Current `window.innerWidth`, or 0 outside a browser.
fn window_inner_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Track `window.innerWidth`, updated on every `resize` event.
///
/// The listener is removed when the calling component is dropped.
pub fn use_window_width() -> Signal<f64> {
    let mut width = use_signal(window_inner_width);

    let listener = use_hook(move || {
        let closure = Closure::<dyn FnMut()>::new(move || {
            width.set(window_inner_width());
        });
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to register resize listener: {:?}", e);
            }
        }
        Rc::new(closure)
    });

    use_drop(move || {
        let closure: &Closure<dyn FnMut()> = &listener;
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    });

    width
}

/// Fetch records whenever the selection changes and publish the pivoted rows.
///
/// Each change issues exactly one request. A response is applied only if no
/// newer request has been issued since; failures are logged and the previous
/// chart data is kept.
pub fn use_climate_sync(mut state: AppState) {
    use_effect(move || {
        let selection = (state.selection)();
        let pending = PendingFetch::begin(&mut state.requests.write(), &selection);
        let api = state.api.peek().clone();
        state.loading.set(true);

        log::info!(
            "Fetching climate records (request {}): {}",
            pending.ticket.get(),
            pending.query.to_query_string()
        );

        spawn(async move {
            let completed = pending
                .run(|query| async move { api.climate_list(&query).await })
                .await;
            let ticket = completed.ticket;

            match completed.resolve(&state.requests.peek()) {
                FetchOutcome::Updated(data) => state.chart.set(data),
                FetchOutcome::Stale(_) => {
                    log::info!("Dropping stale response for request {}", ticket.get());
                    return;
                }
                FetchOutcome::Failed(e) => log::error!("Error fetching data: {}", e),
            }
            state.loading.set(false);
        });
    });
}
