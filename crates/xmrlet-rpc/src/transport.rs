//! HTTP transport with optional digest authentication.
//!
//! The dispatcher only needs "POST these bytes, give me the response bytes";
//! [`Transport`] is that seam, and [`HttpTransport`] is the reqwest-backed
//! implementation used against a real wallet service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use reqwest::{StatusCode, Url};
use tracing::debug;

use xmrlet_core::config::{Config, DigestCredentials};

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("timeout waiting for response")]
    Timeout,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("authentication failed: {0}")]
    Auth(String),
}

impl TransportError {
    /// Sort a reqwest failure into timeout, connection or generic HTTP error.
    fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Http(err)
        }
    }
}

/// Moves one JSON request body to the service and returns the response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>, TransportError>;
}

/// reqwest-based transport.
///
/// When credentials are set, a `401` carrying a `Digest` challenge is
/// answered once with an `Authorization` header computed for that request.
/// No nonce state is kept between calls, so one transport can be shared by
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    credentials: Option<DigestCredentials>,
}

impl HttpTransport {
    pub fn new(
        credentials: Option<DigestCredentials>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            credentials,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        Self::new(config.digest.clone(), config.read_timeout())
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    async fn post(
        &self,
        url: &str,
        body: &[u8],
        authorization: Option<HeaderValue>,
    ) -> Result<reqwest::Response, TransportError> {
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec());
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }
        request.send().await.map_err(TransportError::classify)
    }

    /// Compute the `Authorization` header answering a digest challenge.
    fn answer_challenge(
        credentials: &DigestCredentials,
        url: &str,
        body: &[u8],
        response: &reqwest::Response,
    ) -> Result<HeaderValue, TransportError> {
        let challenge = response
            .headers()
            .get(WWW_AUTHENTICATE)
            .ok_or_else(|| TransportError::Auth("401 without WWW-Authenticate".to_string()))?
            .to_str()
            .map_err(|e| TransportError::Auth(e.to_string()))?;

        let uri = Url::parse(url)
            .map_err(|e| TransportError::Connection(format!("invalid url {url}: {e}")))?;

        let mut prompt =
            digest_auth::parse(challenge).map_err(|e| TransportError::Auth(e.to_string()))?;
        let context = digest_auth::AuthContext::new_post(
            credentials.username.as_str(),
            credentials.password.as_str(),
            uri.path(),
            Some(body),
        );
        let answer = prompt
            .respond(&context)
            .map_err(|e| TransportError::Auth(e.to_string()))?;

        HeaderValue::from_str(&answer.to_header_string())
            .map_err(|e| TransportError::Auth(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let mut response = self.post(url, &body, None).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let credentials = self.credentials.as_ref().ok_or_else(|| {
                TransportError::Auth("service requires credentials, none configured".to_string())
            })?;
            debug!(url, "answering digest challenge");
            let authorization = Self::answer_challenge(credentials, url, &body, &response)?;
            response = self.post(url, &body, Some(authorization)).await?;

            if response.status() == StatusCode::UNAUTHORIZED {
                return Err(TransportError::Auth("credentials rejected".to_string()));
            }
        }

        let status = response.status();
        let bytes = response.bytes().await.map_err(TransportError::classify)?;
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_without_credentials() {
        let transport = HttpTransport::new(None, Duration::from_secs(1)).unwrap();
        assert!(!transport.has_credentials());
    }

    #[test]
    fn transport_from_config_picks_up_digest() {
        let config = Config::from_yaml(
            "wallet_rpc_addr: 127.0.0.1:18083\ndigest:\n  username: alice\n  password: pw\n",
        )
        .unwrap();
        let transport = HttpTransport::from_config(&config).unwrap();
        assert!(transport.has_credentials());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TransportError::Timeout.to_string(),
            "timeout waiting for response"
        );
        let status = TransportError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(status.to_string(), "server returned HTTP 500: boom");
    }
}
