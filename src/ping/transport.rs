use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ping::{PingConfig, PingError, PingResult};

/// Body of a successful ping.
///
/// Only `timestamp` is required; other fields the backend adds are ignored.
/// Any JSON number is accepted, fractional timestamps are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    #[serde(deserialize_with = "timestamp_from_number")]
    pub timestamp: i64,
}

fn timestamp_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value.abs() < i64::MAX as f64 => {
            Ok(value.trunc() as i64)
        }
        _ => Err(D::Error::custom(format!(
            "timestamp `{number}` is out of range"
        ))),
    }
}

impl PingResponse {
    pub fn from_json_slice(body: &[u8]) -> PingResult<Self> {
        serde_json::from_slice(body).map_err(|err| PingError::MalformedBody(err.to_string()))
    }
}

/// Issues one liveness request.
#[async_trait]
pub trait PingTransport: Send + Sync {
    async fn ping(&self) -> PingResult<PingResponse>;
}

/// `GET <endpoint>` over reqwest.
#[derive(Debug, Clone)]
pub struct HttpPingTransport {
    client: Client,
    endpoint: Url,
}

impl HttpPingTransport {
    pub fn new(config: &PingConfig) -> PingResult<Self> {
        let config = config.clone().validate()?;
        let endpoint = Url::parse(&config.endpoint).map_err(|err| {
            PingError::InvalidConfig(format!("invalid endpoint `{}`: {err}", config.endpoint))
        })?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PingTransport for HttpPingTransport {
    async fn ping(&self) -> PingResult<PingResponse> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PingError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        PingResponse::from_json_slice(&body)
    }
}
