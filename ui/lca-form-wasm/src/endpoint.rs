//! API address input: initial value, explicit save, and the health check.

use crate::api;
use crate::dom::{self, Elements};
use crate::state;
use gloo_timers::callback::Timeout;
use lca_form::config::{self, SAVE_NOTICE_MS};
use lca_form::render::health_notice;
use lca_form::submit;

/// Fill the address input from the query string, saved value, or default.
pub fn init_endpoint(els: &Elements) -> String {
    let address = config::resolve_endpoint(
        state::query_endpoint().as_deref(),
        state::saved_endpoint().as_deref(),
    );
    els.api_url.set_value(&address);
    address
}

pub fn on_save(els: &Elements) {
    let address = dom::get_input_value(&els.api_url);
    state::save_endpoint(&address);
    els.api_status.set_text_content(Some("Address saved."));

    let status = els.api_status.clone();
    let _ = Timeout::new(SAVE_NOTICE_MS, move || status.set_text_content(None)).forget();
}

/// GET /health
pub async fn on_check_health(els: &Elements) {
    let url = match submit::health_url(&els.api_url.value()) {
        Ok(url) => url,
        Err(e) => {
            els.api_status.set_text_content(Some(&e.to_string()));
            return;
        }
    };
    els.api_status.set_text_content(Some("Checking…"));

    let notice = match api::health(&url).await {
        Ok(h) => health_notice(Ok(&h)),
        Err(e) => {
            let msg = e.to_string();
            gloo_console::error!("health check failed", msg.clone());
            health_notice(Err(msg.as_str()))
        }
    };
    els.api_status.set_text_content(Some(&notice));
}
