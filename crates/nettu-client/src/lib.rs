//! Nettu Client - Rust SDK for the Nettu scheduler HTTP API
//!
//! This crate provides:
//! - Credential resolution into account (api key), user (account + token) or empty auth
//! - A base request dispatcher that treats every HTTP status as data
//! - A uniform `ApiResponse` envelope with status, decoded body and raw response
//! - Admin (`NettuClient`) and end-user (`NettuUserClient`) bundles of resource clients
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use nettu_client::{ClientConfig, NettuClient, PartialCredentials};
//!
//! # async fn run() -> nettu_client::Result<()> {
//! let config = Arc::new(ClientConfig::new("http://localhost:5000/api/v1"));
//! let client = NettuClient::new(config, Some(PartialCredentials::default().with_api_key("secret")))?;
//!
//! let res = client.user().find("user-id").await?;
//! if res.status() == 404 {
//!     println!("no such user");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod http;
pub mod model;
pub mod response;

pub use client::{ClientFactory, NettuClient, NettuUserClient};
pub use config::{ClientConfig, TransportConfig};
pub use credentials::{AuthHeaders, Credentials, PartialCredentials};
pub use error::{NettuError, Result};
pub use http::{BaseClient, HttpMethod, HttpRequest, RawResponse, ReqwestTransport, Transport};
pub use response::ApiResponse;
