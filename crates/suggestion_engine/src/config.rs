use std::fmt;
use std::time::Duration;

/// Endpoint used when `SUGGEST_API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com/v1";
/// Model used when `SUGGEST_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "qwen-plus";

const ENV_API_KEY: &str = "SUGGEST_API_KEY";
const ENV_BASE_URL: &str = "SUGGEST_API_BASE_URL";
const ENV_MODEL: &str = "SUGGEST_MODEL";
const ENV_CONNECT_TIMEOUT: &str = "SUGGEST_CONNECT_TIMEOUT_SECS";
const ENV_REQUEST_TIMEOUT: &str = "SUGGEST_REQUEST_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base url `{value}`: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base url `{0}` must use http or https")]
    UnsupportedScheme(String),
    #[error("{key} must be a whole number of seconds, got `{value}`")]
    InvalidTimeout { key: &'static str, value: String },
}

/// Connection settings for the completion service.
///
/// The credential is optional here on purpose: its absence is reported by the
/// first fetch, not at startup.
#[derive(Clone)]
pub struct ClientSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ClientSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let base_url = match read(ENV_BASE_URL) {
            Some(raw) => validate_base_url(raw)?,
            None => defaults.base_url,
        };
        let connect_timeout = match read(ENV_CONNECT_TIMEOUT) {
            Some(raw) => parse_seconds(ENV_CONNECT_TIMEOUT, raw)?,
            None => defaults.connect_timeout,
        };
        let request_timeout = match read(ENV_REQUEST_TIMEOUT) {
            Some(raw) => parse_seconds(ENV_REQUEST_TIMEOUT, raw)?,
            None => defaults.request_timeout,
        };

        Ok(Self {
            api_key: read(ENV_API_KEY),
            base_url,
            model: read(ENV_MODEL).unwrap_or(defaults.model),
            connect_timeout,
            request_timeout,
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn validate_base_url(raw: String) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(&raw).map_err(|source| ConfigError::InvalidBaseUrl {
        value: raw.clone(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw),
        _ => Err(ConfigError::UnsupportedScheme(raw)),
    }
}

fn parse_seconds(key: &'static str, raw: String) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { key, value: raw }),
    }
}
