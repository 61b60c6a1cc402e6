//! Form submission and result display.

use crate::api;
use crate::dom::{self, DomForm, Elements};
use lca_form::{PredictOutcome, SubmitError, prepare_submission, render_outcome};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

/// Show a message under the form, or hide it when `message` is empty.
pub fn show_form_message(els: &Elements, message: &str, kind: MessageKind) {
    let el = &els.form_message;
    if message.is_empty() {
        el.set_text_content(None);
        dom::add_class(el, "hidden");
        dom::remove_class(el, "error");
        dom::remove_class(el, "success");
        return;
    }
    el.set_text_content(Some(message));
    dom::remove_class(el, "hidden");
    dom::toggle_class(el, "error", kind == MessageKind::Error);
    dom::toggle_class(el, "success", kind == MessageKind::Success);
}

fn clear_form_message(els: &Elements) {
    show_form_message(els, "", MessageKind::Error);
}

pub fn render_result(els: &Elements, outcome: &PredictOutcome) {
    els.result_content.set_inner_html(&render_outcome(outcome));
    dom::remove_class(&els.result_box, "hidden");
}

/// POST /predict
pub async fn on_submit(els: &Elements) {
    clear_form_message(els);
    dom::add_class(&els.result_box, "hidden");

    let submission = match prepare_submission(&els.api_url.value(), &DomForm) {
        Ok(s) => s,
        Err(e) => {
            if let SubmitError::Invalid(errors) = &e {
                gloo_console::warn!("form invalid:", errors.len() as u32);
            }
            show_form_message(els, &e.to_string(), MessageKind::Error);
            return;
        }
    };

    let outcome = match api::predict(&submission).await {
        Ok(data) => PredictOutcome::from_response(data),
        Err(e) => {
            gloo_console::error!("prediction request failed", e.to_string());
            PredictOutcome::from_failure(e)
        }
    };
    render_result(els, &outcome);
}
