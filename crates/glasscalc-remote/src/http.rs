//! HTTP implementation of [`RemoteEvaluator`] using reqwest

use std::time::Duration;

use serde::Serialize;
use url::Url;

use glasscalc_core::prelude::*;

use crate::evaluator::RemoteEvaluator;
use crate::protocol::{
    decode_reply, CalculateRequest, FunctionRequest, ServiceReply, CALCULATE_FUNCTION_PATH,
    CALCULATE_PATH, HEALTH_PATH,
};

/// Default service address
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// Health probes give up quickly; they are informational only
const HEALTH_TIMEOUT: Duration = Duration::from_secs(3);

/// Evaluation service client
#[derive(Debug, Clone)]
pub struct HttpEvaluator {
    /// Base URL, always ending in `/`
    base_url: Url,
    client: reqwest::Client,
}

impl HttpEvaluator {
    /// Create a client for the service at `base_url`.
    ///
    /// Only the connection phase is bounded by `connect_timeout`; an
    /// accepted request waits for the service as long as it takes.
    pub fn new(base_url: &str, connect_timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| Error::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::invalid_service_url(self.base_url.as_str(), e.to_string()))
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<ServiceReply> {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        debug!("Reply {}: {}", status, text);
        decode_reply(status.is_success(), &text)
    }
}

impl RemoteEvaluator for HttpEvaluator {
    async fn calculate(&self, request: &CalculateRequest) -> Result<ServiceReply> {
        self.post(CALCULATE_PATH, request).await
    }

    async fn calculate_function(&self, request: &FunctionRequest) -> Result<ServiceReply> {
        self.post(CALCULATE_FUNCTION_PATH, request).await
    }

    async fn health(&self) -> bool {
        let Ok(url) = self.endpoint(HEALTH_PATH) else {
            return false;
        };
        match self.client.get(url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Health check failed: {}", e);
                false
            }
        }
    }
}

/// Parse and validate the service base URL.
///
/// The path is given a trailing slash so endpoint paths are appended to it
/// rather than replacing its last segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw.trim()).map_err(|e| Error::invalid_service_url(raw, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_service_url(
            raw,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
