use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{Error, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Response handed back by a transport: final status plus the fully read
/// body.
///
/// The body is read to completion before the response is returned, so the
/// underlying connection is released on every exit path.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network collaborator performing the actual HTTP I/O.
///
/// The client issues exactly one call per operation and never retries;
/// pooling, retry and timeout policy belong to the implementation behind
/// this trait. The `Send + Sync` bound makes a `Client` shareable across
/// tasks whenever its transport is.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<RawResponse>;

    async fn post(&self, url: &str, body: Vec<u8>, headers: &[(&str, String)])
        -> Result<RawResponse>;

    async fn delete(&self, url: &str, headers: &[(&str, String)]) -> Result<RawResponse>;
}

/// Default transport over a shared reqwest client.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    fn apply_headers(
        mut request: reqwest::RequestBuilder,
        headers: &[(&str, String)],
    ) -> reqwest::RequestBuilder {
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }
        request
    }

    async fn read_response(response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?
            .to_vec();

        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<RawResponse> {
        let request = Self::apply_headers(self.client.get(url), headers);
        let response = request.send().await.map_err(|e| Error::Transport(e.to_string()))?;

        Self::read_response(response).await
    }

    async fn post(
        &self,
        url: &str,
        body: Vec<u8>,
        headers: &[(&str, String)],
    ) -> Result<RawResponse> {
        let request = Self::apply_headers(self.client.post(url), headers).body(body);
        let response = request.send().await.map_err(|e| Error::Transport(e.to_string()))?;

        Self::read_response(response).await
    }

    async fn delete(&self, url: &str, headers: &[(&str, String)]) -> Result<RawResponse> {
        let request = Self::apply_headers(self.client.delete(url), headers);
        let response = request.send().await.map_err(|e| Error::Transport(e.to_string()))?;

        Self::read_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        assert!(RawResponse { status: 200, body: Vec::new() }.is_success());
        assert!(RawResponse { status: 204, body: Vec::new() }.is_success());
        assert!(!RawResponse { status: 301, body: Vec::new() }.is_success());
        assert!(!RawResponse { status: 404, body: Vec::new() }.is_success());
        assert!(!RawResponse { status: 500, body: Vec::new() }.is_success());
    }

    #[test]
    fn test_transport_builds_with_custom_timeout() {
        assert!(HttpTransport::with_timeout(Duration::from_secs(5)).is_ok());
    }
}
