//! The HTTP collaborator: given a URL, return a JSON body or an error.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::Settings;
use crate::error::AppError;

const USER_AGENT: &str = concat!("rental-listings/", env!("CARGO_PKG_VERSION"));

/// Anything that can GET a URL and hand back its JSON body.
///
/// Non-2xx statuses, transport failures and unparseable bodies are all errors.
pub trait JsonSource {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, AppError>> + Send;
}

/// reqwest-backed source used outside of tests.
#[derive(Debug, Clone)]
pub struct HttpJsonSource {
    client: Client,
}

impl HttpJsonSource {
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        Self::new(settings.http_timeout_secs)
    }
}

impl JsonSource for HttpJsonSource {
    async fn get_json(&self, url: &str) -> Result<Value, AppError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::upstream(format!(
                "Request failed with status {}.",
                resp.status()
            )));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| AppError::upstream(format!("Failed to parse response body: {e}")))
    }
}
