use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;

use crate::api::FormatError;
use crate::format::SourceEncoding;

/// Where raw timestamps come from. The router holds this behind a trait
/// object so tests can substitute a canned upstream.
#[async_trait]
pub trait TimeSource: Send + Sync {
    async fn fetch(&self, encoding: SourceEncoding) -> Result<String, FormatError>;
}

/// HTTP client for the timesource service. The request timeout is fixed
/// at construction; a timed-out call is abandoned and reported as
/// unavailable, never retried.
pub struct HttpTimeSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTimeSource {
    pub fn new(base_url: String, request_timeout: Duration) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("text/plain"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent("formatter")
            .timeout(request_timeout)
            .build()
            .expect("failed to construct reqwest client for the formatter");

        Self { client, base_url }
    }
}

#[async_trait]
impl TimeSource for HttpTimeSource {
    async fn fetch(&self, encoding: SourceEncoding) -> Result<String, FormatError> {
        let response = self
            .client
            .post(&self.base_url)
            .body(encoding.as_str())
            .send()
            .await
            .map_err(|err| {
                tracing::error!("timesource request failed: {}", err);
                FormatError::UpstreamUnavailable
            })?
            .error_for_status()
            .map_err(|err| {
                tracing::error!("timesource returned an error status: {}", err);
                FormatError::UpstreamUnavailable
            })?;

        response.text().await.map_err(|err| {
            tracing::error!("failed to read timesource response body: {}", err);
            FormatError::UpstreamUnavailable
        })
    }
}
