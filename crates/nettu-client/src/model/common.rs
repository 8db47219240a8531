// Common model types

use serde::{Deserialize, Serialize};

/// Plain status message, e.g. from the health check
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub message: String,
}

/// Time window in unix milliseconds, sent as `startTs`/`endTs` query parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimespanQuery {
    pub start_ts: i64,
    pub end_ts: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timespan_query_encoding() {
        let query = TimespanQuery {
            start_ts: 1000,
            end_ts: 2000,
        };
        assert_eq!(
            serde_urlencoded::to_string(query).unwrap(),
            "startTs=1000&endTs=2000"
        );
    }
}
