use crate::error::{ClassifierError, RemoteError, Result};
use async_trait::async_trait;
use cefr_lexicon::Level;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Upper bound on a single remote lookup, including reading the body
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;

/// External level source consulted before the local chain.
///
/// A lookup either yields a level or explains why it could not; callers treat
/// every error as "unavailable" and classify locally instead.
#[async_trait]
pub trait RemoteLookup: Send + Sync {
    async fn lookup(&self, text: &str) -> std::result::Result<Level, RemoteError>;

    /// `false` lets callers skip the call (and its logging) entirely
    fn is_enabled(&self) -> bool {
        true
    }

    fn name(&self) -> &str;
}

/// Remote source that is always unavailable. Never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRemoteLookup;

#[async_trait]
impl RemoteLookup for DisabledRemoteLookup {
    async fn lookup(&self, _text: &str) -> std::result::Result<Level, RemoteError> {
        Err(RemoteError::Disabled)
    }

    fn is_enabled(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

/// Settings for [`HttpRemoteLookup`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Endpoint receiving `POST {"text": ...}`
    pub url: String,

    /// Bounded wait per lookup, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_REMOTE_TIMEOUT_MS
}

impl RemoteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
        }
    }

    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err("remote url is empty".to_string());
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(format!("remote url must be http(s): '{url}'"));
        }
        if self.timeout_ms == 0 {
            return Err("remote timeout must be > 0".to_string());
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct LookupRequest<'a> {
    text: &'a str,
}

/// Live HTTPS client for an external level service
pub struct HttpRemoteLookup {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpRemoteLookup {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        config.validate().map_err(ClassifierError::invalid_config)?;
        if config.url.starts_with("http://") {
            log::warn!("Remote lookup {} is not encrypted", config.url);
        }

        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.trim().to_string(),
            timeout,
        })
    }

    async fn request(&self, text: &str) -> std::result::Result<Level, RemoteError> {
        let response = self
            .client
            .post(&self.url)
            .json(&LookupRequest { text })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| RemoteError::Malformed(e.to_string()))?;
        extract_level(&value).ok_or(RemoteError::MissingLevel)
    }

    fn transport_error(&self, err: reqwest::Error) -> RemoteError {
        if err.is_timeout() {
            RemoteError::Timeout(self.timeout)
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl RemoteLookup for HttpRemoteLookup {
    async fn lookup(&self, text: &str) -> std::result::Result<Level, RemoteError> {
        let text = text.trim().to_lowercase();
        match tokio::time::timeout(self.timeout, self.request(&text)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::Timeout(self.timeout)),
        }
    }

    fn name(&self) -> &str {
        &self.url
    }
}

/// Find a level in a lookup response.
///
/// Accepts `{"level": "b2"}` or the same field one object deeper, e.g.
/// `{"result": {"level": "B2"}}`. Labels are case-insensitive; numeric ranks
/// 1..6 (possibly fractional, rounded) are accepted too.
pub fn extract_level(value: &Value) -> Option<Level> {
    if let Some(level) = value.get("level").and_then(level_from_value) {
        return Some(level);
    }
    value
        .as_object()?
        .values()
        .find_map(|nested| nested.get("level").and_then(level_from_value))
}

fn level_from_value(value: &Value) -> Option<Level> {
    match value {
        Value::String(label) => label.trim().to_uppercase().parse().ok(),
        Value::Number(num) => {
            let rank = num.as_f64()?.round();
            if (1.0..=6.0).contains(&rank) {
                Level::from_rank(rank as u8)
            } else {
                None
            }
        }
        _ => None,
    }
}
