//! HTTP client for the prediction API.
//!
//! Bodies are decoded as JSON whatever the status code: the API reports
//! problems in the body (`{"error": ...}` or a validation `detail`).

use gloo_net::http::Request;
use lca_api_types::HealthResponse;
use lca_form::Submission;
use serde_json::Value;

/// POST the prepared body as JSON and decode the reply.
pub async fn predict(submission: &Submission) -> Result<Value, gloo_net::Error> {
    let resp = Request::post(&submission.url)
        .json(&submission.body)?
        .send()
        .await?;
    resp.json::<Value>().await
}

/// GET the health probe.
pub async fn health(url: &str) -> Result<HealthResponse, gloo_net::Error> {
    let resp = Request::get(url).send().await?;
    resp.json::<HealthResponse>().await
}
