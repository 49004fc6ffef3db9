//! Snapshot loading. One attempt per page load: no retries, no timeout.

use thiserror::Error;
use tracing::{error, info};

use super::config::DashboardConfig;
use super::snapshot::DashboardSnapshot;

/// Operator-facing text shown whenever the snapshot can't be used.
pub const DATA_UNAVAILABLE_MESSAGE: &str = "Data file not found. Run generate_data.py first.";

#[derive(Debug, Error)]
pub enum LoadError {
    /// Fetch failed, returned a non-success status, or the body didn't decode.
    #[error("{}", DATA_UNAVAILABLE_MESSAGE)]
    DataUnavailable { detail: String },
}

impl LoadError {
    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::DataUnavailable {
            detail: detail.into(),
        }
    }

    /// Underlying cause, kept for diagnostics only.
    pub fn detail(&self) -> &str {
        match self {
            Self::DataUnavailable { detail } => detail,
        }
    }
}

/// Load and decode the snapshot named by `config.data_path`.
pub async fn load_snapshot(config: &DashboardConfig) -> Result<DashboardSnapshot, LoadError> {
    let outcome = match read_source(&config.data_path).await {
        Ok(body) => decode_snapshot(&body),
        Err(err) => Err(err),
    };

    match &outcome {
        Ok(snapshot) => info!(
            path = %config.data_path,
            generated_at = %snapshot.generated_at,
            "dashboard snapshot loaded"
        ),
        Err(err) => error!(
            path = %config.data_path,
            detail = err.detail(),
            "error loading dashboard data"
        ),
    }

    outcome
}

/// Map an HTTP status onto the loader's single failure kind.
pub fn ensure_success(status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::unavailable(format!("HTTP status {status}")))
    }
}

pub fn decode_snapshot(body: &str) -> Result<DashboardSnapshot, LoadError> {
    serde_json::from_str(body)
        .map_err(|err| LoadError::unavailable(format!("invalid snapshot document: {err}")))
}

#[cfg(target_arch = "wasm32")]
async fn read_source(path: &str) -> Result<String, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| LoadError::unavailable("window unavailable"))?;
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|err| LoadError::unavailable(format!("fetch failed: {err:?}")))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| LoadError::unavailable("fetch did not yield a Response"))?;

    ensure_success(response.status())?;

    let text_promise = response
        .text()
        .map_err(|err| LoadError::unavailable(format!("response body unavailable: {err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| LoadError::unavailable(format!("response body unreadable: {err:?}")))?;

    text.as_string()
        .ok_or_else(|| LoadError::unavailable("response body was not text"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_source(path: &str) -> Result<String, LoadError> {
    std::fs::read_to_string(path)
        .map_err(|err| LoadError::unavailable(format!("{path}: {err}")))
}
