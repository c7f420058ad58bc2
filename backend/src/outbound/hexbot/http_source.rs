//! Reqwest-backed hexbot source adapter.
//!
//! This adapter owns transport details only: the GET request, timeout and
//! status mapping, and reading the body as text. The body is returned as-is;
//! bytes that are not UTF-8 are a decode failure, never replaced.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::domain::ports::{ColourSource, ColourSourceError};

/// Public hexbot endpoint used when no override is configured.
pub const DEFAULT_HEXBOT_ENDPOINT: &str = "https://api.noopschallenge.com/hexbot";
const DEFAULT_USER_AGENT: &str = concat!("hexbot/", env!("CARGO_PKG_VERSION"));

/// Colour source that performs one HTTP GET per call against one endpoint.
pub struct HexbotHttpSource {
    client: Client,
    endpoint: Url,
}

impl HexbotHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use hexbot::outbound::hexbot::{DEFAULT_HEXBOT_ENDPOINT, HexbotHttpSource};
    /// use reqwest::Url;
    ///
    /// let endpoint = Url::parse(DEFAULT_HEXBOT_ENDPOINT)?;
    /// let source = HexbotHttpSource::new(endpoint.clone(), Duration::from_secs(10))?;
    /// assert_eq!(source.endpoint(), &endpoint);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Endpoint this adapter queries.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ColourSource for HexbotHttpSource {
    async fn get_colour(&self) -> Result<String, ColourSourceError> {
        debug!(endpoint = %self.endpoint, "GET hexbot");
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(map_status_error(status, &String::from_utf8_lossy(&body)));
        }

        let body = response.bytes().await.map_err(map_body_error)?;
        String::from_utf8(body.to_vec())
            .map_err(|error| ColourSourceError::decode(format!("body is not valid UTF-8: {error}")))
    }
}

fn map_transport_error(error: reqwest::Error) -> ColourSourceError {
    if error.is_timeout() {
        ColourSourceError::timeout(error.to_string())
    } else {
        ColourSourceError::transport(error.to_string())
    }
}

fn map_body_error(error: reqwest::Error) -> ColourSourceError {
    if error.is_timeout() {
        ColourSourceError::timeout(error.to_string())
    } else {
        ColourSourceError::decode(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &str) -> ColourSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no reason phrase")
            .to_owned()
    } else {
        preview
    };
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ColourSourceError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => ColourSourceError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &str) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = body.split_whitespace().collect::<Vec<_>>().join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
