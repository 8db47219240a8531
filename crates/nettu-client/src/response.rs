// Uniform envelope around one scheduler response

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::RawResponse;

/// Status, decoded body and raw response of one request.
///
/// The envelope does not judge the status code. `data` is `None` when the
/// body is empty or does not decode as `T`, which is the usual outcome for
/// failed requests. Check `status` before trusting `data`: the scheduler may
/// send a decodable body along with a 4xx or 5xx status.
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    data: Option<T>,
    status: u16,
    raw: RawResponse,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    pub fn from_raw(raw: RawResponse) -> Self {
        let data = if raw.body.is_empty() {
            None
        } else {
            match serde_json::from_slice(&raw.body) {
                Ok(data) => Some(data),
                Err(e) => {
                    debug!("Response body not decoded (status {}): {}", raw.status, e);
                    None
                }
            }
        };

        Self {
            data,
            status: raw.status,
            raw,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        self.raw.text()
    }

    pub fn into_parts(self) -> (Option<T>, u16, RawResponse) {
        (self.data, self.status, self.raw)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Bytes::from(body.to_string()),
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Error {
        error: String,
    }

    #[test]
    fn test_error_status_with_body() {
        let res: ApiResponse<Error> = ApiResponse::from_raw(raw(404, r#"{"error":"not found"}"#));
        assert_eq!(res.status(), 404);
        assert!(!res.is_success());
        assert_eq!(
            res.data(),
            Some(&Error {
                error: "not found".to_string()
            })
        );
        assert_eq!(res.raw().header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_empty_body_has_no_data() {
        let res: ApiResponse<serde_json::Value> = ApiResponse::from_raw(raw(204, ""));
        assert_eq!(res.status(), 204);
        assert!(res.is_success());
        assert!(res.data().is_none());
    }

    #[test]
    fn test_undecodable_body_has_no_data() {
        let res: ApiResponse<Error> = ApiResponse::from_raw(raw(502, "<html>Bad Gateway</html>"));
        assert!(res.data().is_none());
        assert_eq!(res.text(), "<html>Bad Gateway</html>");

        let res: ApiResponse<Error> = ApiResponse::from_raw(raw(200, r#"{"other":1}"#));
        assert!(res.into_data().is_none());
    }

    #[test]
    fn test_falsy_body_is_data() {
        let res: ApiResponse<bool> = ApiResponse::from_raw(raw(200, "false"));
        assert_eq!(res.data(), Some(&false));

        let res: ApiResponse<i64> = ApiResponse::from_raw(raw(200, "0"));
        assert_eq!(res.data(), Some(&0));

        let res: ApiResponse<serde_json::Value> = ApiResponse::from_raw(raw(200, "null"));
        assert_eq!(res.data(), Some(&json!(null)));
    }

    #[test]
    fn test_into_parts() {
        let res: ApiResponse<serde_json::Value> = ApiResponse::from_raw(raw(201, r#"{"id":"1"}"#));
        let (data, status, raw) = res.into_parts();
        assert_eq!(data, Some(json!({"id": "1"})));
        assert_eq!(status, 201);
        assert_eq!(raw.status, 201);
    }
}
