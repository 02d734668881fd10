use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ping::{PingError, PingResult};

/// Fixed period between liveness pings.
pub const PING_INTERVAL_MS: u64 = 15_000;

/// Ping endpoint settings.
///
/// The polling period is not configurable; see [`PING_INTERVAL_MS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingConfig {
    pub endpoint: String,
    pub request_timeout_ms: u64,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/ping".to_owned(),
            request_timeout_ms: 10_000,
        }
    }
}

impl PingConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> PingResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| PingError::InvalidConfig(format!("failed to parse config: {err}")))?;
        config.validate()
    }

    pub fn validate(self) -> PingResult<Self> {
        if self.endpoint.trim().is_empty() {
            return Err(PingError::InvalidConfig(
                "ping endpoint must not be empty".to_owned(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(PingError::InvalidConfig(
                "request timeout must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
