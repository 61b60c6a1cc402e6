//! Result view model and markup.
//!
//! A response either carries an `error` property, which is shown verbatim in a
//! warning card, or is read as a prediction. Transport failures go through the
//! same warning card via [`PredictOutcome::from_failure`].

use lca_api_types::{HealthResponse, PredictionLabel};
use serde_json::Value;
use std::fmt::{self, Write as _};

#[derive(Debug, Clone, PartialEq)]
pub enum PredictOutcome {
    Error(String),
    Prediction(Value),
}

impl PredictOutcome {
    /// A `null` body is a failure: there is nothing to read a label or error from.
    pub fn from_response(value: Value) -> Self {
        if value.is_null() {
            return Self::Error("response body is null".to_owned());
        }
        match value.get("error") {
            Some(err) if is_truthy(err) => Self::Error(match err {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            _ => Self::Prediction(value),
        }
    }

    /// Wrap a failed request; the card text is the failure's `Display` form.
    pub fn from_failure(err: impl fmt::Display) -> Self {
        Self::Error(err.to_string())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    Warning,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub tone: Tone,
    pub badge: &'static str,
    pub description: String,
    /// `None` for error cards.
    pub probability: Option<String>,
    /// Pretty-printed response, `None` for error cards.
    pub raw_json: Option<String>,
}

impl ResultView {
    pub fn from_outcome(outcome: &PredictOutcome) -> Self {
        match outcome {
            PredictOutcome::Error(message) => Self {
                tone: Tone::Warning,
                badge: "Something went wrong",
                description: message.clone(),
                probability: None,
                raw_json: None,
            },
            PredictOutcome::Prediction(data) => {
                let label = PredictionLabel::from_wire(data.get("label").and_then(Value::as_str));
                let (tone, badge, description) = match label {
                    PredictionLabel::Certified => (
                        Tone::Positive,
                        "Likely approved",
                        "The model expects this application to be certified.",
                    ),
                    PredictionLabel::Denied => (
                        Tone::Negative,
                        "Likely denied",
                        "The model expects this application to be denied.",
                    ),
                    PredictionLabel::Unknown => (
                        Tone::Neutral,
                        "Unknown status",
                        "The model could not determine an outcome.",
                    ),
                };
                let probability = match format_probability(data.get("proba_certified")) {
                    Some(pct) => format!("{pct} chance of approval"),
                    None => "Probability not available.".to_owned(),
                };
                let raw_json = serde_json::to_string_pretty(data)
                    .unwrap_or_else(|_| data.to_string());
                Self {
                    tone,
                    badge,
                    description: description.to_owned(),
                    probability: Some(probability),
                    raw_json: Some(raw_json),
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div class="result-card {}"><div class="badge">{}</div><p>{}</p>"#,
            self.tone.css_class(),
            escape_html(self.badge),
            escape_html(&self.description),
        );
        if let Some(probability) = &self.probability {
            let _ = write!(html, r#"<p class="probability">{}</p>"#, escape_html(probability));
        }
        html.push_str("</div>");
        if let Some(raw) = &self.raw_json {
            let _ = write!(
                html,
                r#"<details class="raw-details"><summary>Show response details</summary><pre>{}</pre></details>"#,
                escape_html(raw),
            );
        }
        html
    }
}

/// Percentage with one decimal, e.g. `0.873` → `87.3%`. Non-numbers give `None`.
pub fn format_probability(value: Option<&Value>) -> Option<String> {
    let p = value?.as_f64().filter(|p| p.is_finite())?;
    let pct = (p * 1000.0).round() / 10.0;
    Some(format!("{pct}%"))
}

pub fn render_outcome(outcome: &PredictOutcome) -> String {
    ResultView::from_outcome(outcome).to_html()
}

/// Status line text for a health probe.
pub fn health_notice(result: Result<&HealthResponse, &str>) -> String {
    match result {
        Ok(h) if h.model_loaded => "API reachable, model loaded.".to_owned(),
        Ok(_) => "API reachable, model not loaded.".to_owned(),
        Err(e) => format!("API unreachable: {e}"),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
