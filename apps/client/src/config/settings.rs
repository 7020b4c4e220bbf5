use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::ClientError;
use crate::server::endpoints::EndpointContract;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const ENV_BASE_URL: &str = "HAND_CRICKET_BASE_URL";
pub const ENV_CONTRACT: &str = "HAND_CRICKET_CONTRACT";
pub const ENV_SCORE_SYNC: &str = "HAND_CRICKET_SCORE_SYNC";
pub const ENV_TIMEOUT_MS: &str = "HAND_CRICKET_TIMEOUT_MS";

/// Where the game server lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    contract: EndpointContract,
    /// Pull `/score` on load and after every mutating action.
    score_sync: bool,
    /// Per-request timeout; `None` leaves the transport default.
    timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            contract: EndpointContract::default(),
            score_sync: false,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with any `HAND_CRICKET_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        let mut config = Self::default();

        if let Some(url) = optional_var(ENV_BASE_URL) {
            config = config.with_base_url(&url)?;
        }
        if let Some(contract) = optional_var(ENV_CONTRACT) {
            config.contract = contract.parse()?;
        }
        if let Some(raw) = optional_var(ENV_SCORE_SYNC) {
            config.score_sync = parse_flag(ENV_SCORE_SYNC, &raw)?;
        }
        if let Some(raw) = optional_var(ENV_TIMEOUT_MS) {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                ClientError::config(format!(
                    "'{ENV_TIMEOUT_MS}' must be a whole number of milliseconds, got '{raw}'"
                ))
            })?;
            config.timeout = timeout_from_millis(ms);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ClientError> {
        self.base_url = normalize_base_url(raw)?;
        Ok(self)
    }

    pub fn with_contract(mut self, contract: EndpointContract) -> Self {
        self.contract = contract;
        self
    }

    pub fn with_score_sync(mut self, enabled: bool) -> Self {
        self.score_sync = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn contract(&self) -> EndpointContract {
        self.contract
    }

    pub fn score_sync(&self) -> bool {
        self.score_sync
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// A zero timeout means "no timeout".
pub fn timeout_from_millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

/// Validate an absolute http(s) URL and drop any trailing slash.
fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| ClientError::config(format!("invalid base URL '{trimmed}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::config(format!(
            "base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(ClientError::config(format!(
            "base URL '{trimmed}' has no host"
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, ClientError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ClientError::config(format!(
            "'{name}' must be a boolean flag, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::time::Duration;

    use serial_test::serial;

    use super::*;
    use crate::errors::ErrorCode;

    fn clear_test_env() {
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_CONTRACT);
        env::remove_var(ENV_SCORE_SYNC);
        env::remove_var(ENV_TIMEOUT_MS);
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_test_env();
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.contract(), EndpointContract::Underscore);
        assert!(!config.score_sync());
        assert_eq!(config.timeout(), None);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_test_env();
        env::set_var(ENV_BASE_URL, "https://cricket.example.test/api/");
        env::set_var(ENV_CONTRACT, "slash");
        env::set_var(ENV_SCORE_SYNC, "true");
        env::set_var(ENV_TIMEOUT_MS, "2500");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url(), "https://cricket.example.test/api");
        assert_eq!(config.contract(), EndpointContract::Slash);
        assert!(config.score_sync());
        assert_eq!(config.timeout(), Some(Duration::from_millis(2500)));
        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_values() {
        clear_test_env();
        env::set_var(ENV_SCORE_SYNC, "maybe");
        let err = ClientConfig::from_env().unwrap_err();
        assert_eq!(err.code(), ErrorCode::ConfigError);
        clear_test_env();

        env::set_var(ENV_TIMEOUT_MS, "soon");
        assert!(ClientConfig::from_env().is_err());
        clear_test_env();

        env::set_var(ENV_BASE_URL, "localhost:8000");
        assert!(ClientConfig::from_env().is_err());
        clear_test_env();
    }

    #[test]
    fn test_base_url_validation() {
        let config = ClientConfig::default()
            .with_base_url(" http://127.0.0.1:9000/ ")
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");

        assert!(ClientConfig::default().with_base_url("ftp://host").is_err());
        assert!(ClientConfig::default().with_base_url("not a url").is_err());
    }

    #[test]
    fn test_zero_timeout_disables() {
        assert_eq!(timeout_from_millis(0), None);
        assert_eq!(timeout_from_millis(10), Some(Duration::from_millis(10)));
    }
}
