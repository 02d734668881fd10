use thiserror::Error;

pub type PingResult<T> = Result<T, PingError>;

/// Failure of one liveness ping. None of these count towards `call_count`.
#[derive(Debug, Error)]
pub enum PingError {
    /// Network failure, timeout or TLS error before a status was received.
    #[error("ping request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with anything but HTTP 200.
    #[error("ping endpoint returned status {0}")]
    Status(u16),

    /// HTTP 200 whose body is not a JSON object with a `timestamp`.
    #[error("malformed ping response: {0}")]
    MalformedBody(String),

    #[error("invalid ping config: {0}")]
    InvalidConfig(String),
}
