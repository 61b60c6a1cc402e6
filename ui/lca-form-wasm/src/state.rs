//! Page-level persisted state: the saved API address and the `?api=` override.

use gloo_storage::{LocalStorage, Storage};
use lca_form::config::{QUERY_PARAM, STORAGE_KEY};
use web_sys::UrlSearchParams;

// ── localStorage helpers ──

pub fn local_get(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok()?
}

pub fn local_set(key: &str, value: &str) {
    if let Err(e) = LocalStorage::raw().set_item(key, value) {
        gloo_console::warn!("failed to persist", key, e);
    }
}

pub fn saved_endpoint() -> Option<String> {
    local_get(STORAGE_KEY)
}

pub fn save_endpoint(address: &str) {
    local_set(STORAGE_KEY, address);
}

/// The `api` query parameter of the current page, if present.
pub fn query_endpoint() -> Option<String> {
    let search = gloo_utils::window().location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(QUERY_PARAM)
}
