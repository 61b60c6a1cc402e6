//! Endpoint configuration.
//!
//! The base address of the prediction API is resolved once per page load:
//! `?api=` query parameter, then the value saved in local storage under
//! [`STORAGE_KEY`], then [`DEFAULT_ENDPOINT`].

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const STORAGE_KEY: &str = "apiBaseUrl";
pub const QUERY_PARAM: &str = "api";

pub const PREDICT_PATH: &str = "/predict";
pub const HEALTH_PATH: &str = "/health";

/// How long the "saved" notice stays visible.
pub const SAVE_NOTICE_MS: u32 = 1_500;

/// Choice value that switches a field over to its free-text input.
pub const OTHER_SENTINEL: &str = "OTHER";

/// Pick the address to show on load. Empty values count as absent.
pub fn resolve_endpoint(query: Option<&str>, saved: Option<&str>) -> String {
    query
        .filter(|v| !v.is_empty())
        .or_else(|| saved.filter(|v| !v.is_empty()))
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_owned()
}

/// Trim the user's address and drop trailing slashes; `None` if nothing is left.
pub fn normalize_base(input: &str) -> Option<String> {
    let base = input.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_owned())
    }
}

pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// What a choice control's free-text input should do for the chosen value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherToggle {
    /// Show the input and focus it.
    Reveal,
    /// Hide the input and clear whatever was typed.
    HideAndClear,
}

pub fn other_toggle(value: &str) -> OtherToggle {
    if value == OTHER_SENTINEL {
        OtherToggle::Reveal
    } else {
        OtherToggle::HideAndClear
    }
}
