//! "Other" free-text fallbacks.
//!
//! A `<select data-other-target="#wrapSelector">` reveals the wrapper (and
//! focuses its input) while `OTHER` is chosen, and hides and clears it otherwise.

use crate::dom;
use lca_form::config::{OtherToggle, other_toggle};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

fn toggle(select: &HtmlSelectElement, wrap: &Element, input: Option<&HtmlInputElement>) {
    match other_toggle(&select.value()) {
        OtherToggle::Reveal => {
            dom::remove_class(wrap, "hidden");
            if let Some(input) = input {
                let _ = input.focus();
            }
        }
        OtherToggle::HideAndClear => {
            dom::add_class(wrap, "hidden");
            if let Some(input) = input {
                input.set_value("");
            }
        }
    }
}

/// Wire every select carrying `data-other-target` and apply its initial state.
pub fn bind_other_fields() -> Result<(), JsValue> {
    for el in dom::query_all("[data-other-target]") {
        let Ok(select) = el.dyn_into::<HtmlSelectElement>() else {
            continue;
        };
        let Some(target) = select.dataset().get("otherTarget") else {
            continue;
        };
        let Some(wrap) = dom::query(&target) else {
            continue;
        };
        let input = wrap
            .query_selector("input")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());

        {
            let select2 = select.clone();
            let wrap2 = wrap.clone();
            let input2 = input.clone();
            let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                toggle(&select2, &wrap2, input2.as_ref());
            }) as Box<dyn FnMut(_)>);
            select.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }

        toggle(&select, &wrap, input.as_ref());
    }
    Ok(())
}
