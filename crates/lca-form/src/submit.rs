//! Turning the form into a request.
//!
//! Everything here happens before the network is touched: a refused
//! submission never produces a [`Submission`].

use crate::config::{self, HEALTH_PATH, PREDICT_PATH};
use crate::error::SubmitError;
use crate::form::{FormControls, gather_payload};
use lca_api_types::PredictRequest;
use tracing::info;

/// A validated `POST /predict` ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub url: String,
    pub body: PredictRequest,
}

impl Submission {
    pub fn body_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

/// Check the address, then validate the form.
///
/// A missing address is reported before any field is inspected.
pub fn prepare_submission<F: FormControls + ?Sized>(
    address: &str,
    form: &F,
) -> Result<Submission, SubmitError> {
    let base = config::normalize_base(address).ok_or(SubmitError::MissingEndpoint)?;
    let body = gather_payload(form).into_request()?;
    let url = config::endpoint_url(&base, PREDICT_PATH);
    info!(%url, "prediction request prepared");
    Ok(Submission { url, body })
}

/// URL for the health probe of the configured API.
pub fn health_url(address: &str) -> Result<String, SubmitError> {
    let base = config::normalize_base(address).ok_or(SubmitError::MissingEndpoint)?;
    Ok(config::endpoint_url(&base, HEALTH_PATH))
}
