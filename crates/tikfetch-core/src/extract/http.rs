//! HTTP implementation of the extractor client.
//!
//! Uses the curl crate (libcurl) to POST the candidate URL as JSON and decode
//! the service's verdict. Blocking; runs in the current thread.

use std::time::Duration;

use super::{interpret, ExtractRequest, ExtractResponse, Extractor, SubmitError};
use crate::config::TikfetchConfig;
use crate::state::ResultPayload;

/// Extractor talking to the remote serverless function over HTTP.
pub struct HttpExtractor {
    endpoint: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpExtractor {
    /// Creates an extractor for `endpoint` with default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(cfg: &TikfetchConfig) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    /// Performs the POST and returns (status code, raw body).
    fn post(&self, body: &[u8]) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(&self.endpoint)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut headers = curl::easy::List::new();
        headers.append("Content-Type: application/json")?;
        easy.http_headers(headers)?;

        let mut response = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let code = easy.response_code()?;
        Ok((code, response))
    }
}

impl Extractor for HttpExtractor {
    fn extract(&self, url: &str) -> Result<ResultPayload, SubmitError> {
        let body = serde_json::to_vec(&ExtractRequest { url })
            .map_err(|e| transport(&self.endpoint, format!("encode request: {e}")))?;

        tracing::debug!("POST {} for {}", self.endpoint, url);
        let (code, response) = self
            .post(&body)
            .map_err(|e| transport(&self.endpoint, format!("curl: {e}")))?;

        // Non-2xx is a transport failure regardless of body content.
        if !(200..300).contains(&code) {
            return Err(transport(&self.endpoint, format!("HTTP {code}")));
        }

        let decoded: ExtractResponse = serde_json::from_slice(&response)
            .map_err(|e| transport(&self.endpoint, format!("decode response: {e}")))?;

        interpret(decoded)
    }
}

/// Builds a transport error and emits the developer-facing diagnostic.
fn transport(endpoint: &str, reason: String) -> SubmitError {
    tracing::error!("extraction request to {} failed: {}", endpoint, reason);
    SubmitError::Transport { reason }
}
