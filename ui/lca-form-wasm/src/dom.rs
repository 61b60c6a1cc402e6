//! DOM element bindings.
//!
//! Fixed elements are resolved once at startup into [`Elements`]. Field
//! controls are looked up by id on every submission through [`DomForm`].

use lca_form::FormControls;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

// ── Helpers ──

fn doc() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = doc().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

/// Value of an `<input>` or `<select>` with the given id.
pub fn control_value(id: &str) -> Option<String> {
    let el = by_id(id)?;
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    el.dyn_ref::<HtmlInputElement>().map(|input| input.value())
}

// ── Elements struct ──

/// Fixed DOM references used by the form controller.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Endpoint
    pub api_url: HtmlInputElement,
    pub save_api: HtmlElement,
    pub check_api: Option<HtmlElement>,
    pub api_status: Element,

    // Form
    pub form: Element,
    pub form_message: Element,

    // Result
    pub result_box: Element,
    pub result_content: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after the document has loaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            api_url: get_input!("apiUrl"),
            save_api: get_html!("saveApi"),
            // Optional: pages without the health button still work.
            check_api: by_id_typed::<HtmlElement>("checkApi"),
            api_status: get_el!("apiStatus"),

            form: get_el!("predictForm"),
            form_message: get_el!("formMessage"),

            result_box: get_el!("result"),
            result_content: get_el!("resultContent"),
        })
    }
}

/// The live document as a [`FormControls`]; invalid controls get the `error` class.
pub struct DomForm;

impl FormControls for DomForm {
    fn value(&self, id: &str) -> Option<String> {
        control_value(id)
    }

    fn set_invalid(&self, id: &str, invalid: bool) {
        if let Some(el) = by_id(id) {
            toggle_class(&el, "error", invalid);
        }
    }
}
