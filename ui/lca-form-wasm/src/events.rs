//! Event binding.
//!
//! Async handlers are spawned with `wasm_bindgen_futures::spawn_local`.

use crate::dom::Elements;
use crate::endpoint;
use crate::other;
use crate::submit;
use wasm_bindgen::prelude::*;

/// Helper: attach async click handler to an element.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    // ── Endpoint ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            endpoint::on_save(&els2);
        }) as Box<dyn FnMut(_)>);
        els.save_api
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    if let Some(check_api) = &els.check_api {
        on_click_async!(check_api, els, endpoint::on_check_health);
    }

    // ── "Other" inputs ──
    other::bind_other_fields()?;

    // ── Submit ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submit::on_submit(&els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
