//! API utilities for console-backend communication
//!
//! Provides the URL helpers and the [`Transport`] seam every loader goes
//! through. The browser implementation sits on top of `gloo-net`.

use async_trait::async_trait;
use contracts::usecases::u501_submit_request::request::RequestSubmission;
use gloo_net::http::Request;
use thiserror::Error;

use crate::domain::a001_equipment::cart::{HandoffOutcome, RequestSubmitter};
use crate::shared::config::ApiConfig;

/// Ошибки транспортного уровня
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Get the origin for API requests
///
/// Constructs the origin from the current window location.
///
/// # Returns
/// - Origin like "http://localhost:8000" or "https://example.com"
/// - Empty string if window is not available (tests, native builds)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Join the configured base path and an endpoint path
///
/// # Example
/// ```rust
/// use checkout_frontend::shared::api_utils::api_path;
/// use checkout_frontend::shared::config::ApiConfig;
///
/// let api = ApiConfig { base_path: "/api/".to_string() };
/// assert_eq!(api_path(&api, "/categories"), "/api/categories");
/// ```
pub fn api_path(api: &ApiConfig, path: &str) -> String {
    format!(
        "{}/{}",
        api.base_path.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Something that can GET a JSON document.
///
/// Paths are relative to the API root (`/categories`, `/equipment?per_page=100`).
#[async_trait(?Send)]
pub trait Transport {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, TransportError>;
}

/// Browser transport over `fetch`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    origin: String,
    api: ApiConfig,
}

impl HttpTransport {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            origin: api_base(),
            api,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, api_path(&self.api, path))
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, TransportError> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("GET {} failed: HTTP {}", url, response.status());
            return Err(TransportError::Status(response.status()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Sends requests as JSON to a configured endpoint
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    transport: HttpTransport,
    path: String,
}

impl HttpSubmitter {
    pub fn new(api: ApiConfig, path: impl Into<String>) -> Self {
        Self {
            transport: HttpTransport::new(api),
            path: path.into(),
        }
    }
}

#[async_trait(?Send)]
impl RequestSubmitter for HttpSubmitter {
    async fn submit(&self, request: &RequestSubmission) -> HandoffOutcome {
        let url = self.transport.url(&self.path);
        log::debug!("POST {} ({})", url, request.client_ref);

        let sent = match Request::post(&url).json(request) {
            Ok(req) => req.send().await,
            Err(e) => return HandoffOutcome::Rejected(format!("Failed to encode request: {}", e)),
        };
        match sent {
            Ok(response) if response.ok() => HandoffOutcome::Accepted,
            Ok(response) => HandoffOutcome::Rejected(format!("HTTP {}", response.status())),
            Err(e) => HandoffOutcome::Rejected(format!("Network error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path_joins_slashes() {
        let api = ApiConfig {
            base_path: "/api".to_string(),
        };
        assert_eq!(api_path(&api, "/employees"), "/api/employees");
        assert_eq!(api_path(&api, "employees"), "/api/employees");
    }
}
