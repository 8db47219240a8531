//! Error types for the Nettu client
//!
//! Only transport-level failures are errors. Any HTTP status the scheduler
//! answers with, 4xx and 5xx included, is delivered as an `ApiResponse`.

/// Errors raised while issuing a request to the scheduler
#[derive(Debug, thiserror::Error)]
pub enum NettuError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("invalid header `{0}`")]
    InvalidHeader(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, NettuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NettuError::InvalidHeader("x-api-key".to_string());
        assert_eq!(err.to_string(), "invalid header `x-api-key`");

        let err: NettuError = anyhow::anyhow!("connection reset").into();
        assert!(matches!(err, NettuError::Other(_)));
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: NettuError = serde_err.into();
        assert!(matches!(err, NettuError::Serialization(_)));
        assert!(err.to_string().starts_with("serialization error:"));
    }
}
