//! HTTP transport and base request dispatcher
//!
//! [`BaseClient`] is the only place that talks to a [`Transport`]. It joins the
//! configured base URL with the request path, attaches the shared credentials'
//! auth headers and wraps whatever the scheduler answers into an
//! [`ApiResponse`]. Any HTTP status is a normal result; only transport
//! failures are returned as errors.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    Client, Method,
    header::{HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    config::{ClientConfig, TransportConfig},
    constants::header,
    credentials::Credentials,
    error::{NettuError, Result},
    response::ApiResponse,
};

/// HTTP method for a request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// An outbound request described as plain data
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON payload, sent with `content-type: application/json`
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The response exactly as the transport received it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Header values are decoded as UTF-8; non-UTF-8 bytes are replaced, so
    /// only the body is byte-exact
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Capability to execute one HTTP round-trip.
///
/// Implementations must return every HTTP status as `Ok(RawResponse)` and
/// reserve `Err` for failures where no response was received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse>;
}

/// Default transport backed by reqwest
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.read_timeout())
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse> {
        let mut builder = self.client.request(request.method.into(), &request.url);

        for (name, value) in &request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| NettuError::InvalidHeader(name.clone()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| NettuError::InvalidHeader(name.clone()))?;
            builder = builder.header(header_name, header_value);
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Request dispatcher shared by all resource sub-clients
#[derive(Clone)]
pub struct BaseClient {
    credentials: Arc<Credentials>,
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for BaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credential values stay out of debug output.
        let kind = match self.credentials.as_ref() {
            Credentials::Account { .. } => "account",
            Credentials::User { .. } => "user",
            Credentials::Empty => "empty",
        };
        f.debug_struct("BaseClient")
            .field("credentials", &kind)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BaseClient {
    pub fn new(
        credentials: Arc<Credentials>,
        config: Arc<ClientConfig>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            credentials,
            config,
            transport,
        }
    }

    pub fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    pub fn config(&self) -> &Arc<ClientConfig> {
        &self.config
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.dispatch(HttpMethod::Get, self.config.url(path), None)
            .await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse<T>> {
        let query = serde_urlencoded::to_string(query)?;
        let mut url = self.config.url(path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        self.dispatch(HttpMethod::Get, url, None).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        self.dispatch(HttpMethod::Delete, self.config.url(path), None)
            .await
    }

    /// Make a DELETE request with JSON body
    pub async fn delete_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let body = serde_json::to_value(body)?;
        self.dispatch(HttpMethod::Delete, self.config.url(path), Some(body))
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let body = serde_json::to_value(body)?;
        self.dispatch(HttpMethod::Post, self.config.url(path), Some(body))
            .await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let body = serde_json::to_value(body)?;
        self.dispatch(HttpMethod::Put, self.config.url(path), Some(body))
            .await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse<T>> {
        let request = HttpRequest {
            method,
            url,
            headers: self.credentials.create_auth_headers().to_pairs(),
            body,
        };

        debug!("{} {}", request.method, request.url);
        let raw = self.transport.execute(request).await?;
        debug!("Response status: {}", raw.status);

        Ok(ApiResponse::from_raw(raw))
    }
}
