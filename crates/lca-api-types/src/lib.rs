use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PredictRequest {
    pub full_time_position: String,
    pub employer_state: String,
    pub worksite_state: String,
    pub soc_code: String,
    pub wage_rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionLabel {
    Certified,
    Denied,
    #[serde(other)]
    Unknown,
}

impl PredictionLabel {
    /// Anything other than the two known labels, including a missing one, is `Unknown`.
    pub fn from_wire(label: Option<&str>) -> Self {
        match label {
            Some("CERTIFIED") => Self::Certified,
            Some("DENIED") => Self::Denied,
            _ => Self::Unknown,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}
