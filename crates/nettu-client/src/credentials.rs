//! Credential resolution and auth header derivation
//!
//! A [`PartialCredentials`] value is resolved once into a [`Credentials`]
//! strategy. The strategy is shared by every sub-client of a bundle and turns
//! into the same [`AuthHeaders`] on every request.

use std::{collections::BTreeMap, fmt};

use serde::Deserialize;

use crate::constants::header;

/// Credential input as supplied by the caller. Every field is optional.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCredentials {
    pub api_key: Option<String>,
    pub nettu_account: Option<String>,
    pub token: Option<String>,
}

impl PartialCredentials {
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_nettu_account(mut self, nettu_account: &str) -> Self {
        self.nettu_account = Some(nettu_account.to_string());
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Resolve into exactly one strategy. First match wins:
    /// api key, then nettu account, then empty.
    pub fn resolve(&self) -> Credentials {
        if let Some(api_key) = present(&self.api_key) {
            Credentials::Account {
                api_key: api_key.to_string(),
            }
        } else if let Some(nettu_account) = present(&self.nettu_account) {
            Credentials::User {
                nettu_account: nettu_account.to_string(),
                token: present(&self.token).map(str::to_string),
            }
        } else {
            Credentials::Empty
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

const REDACTED: &str = "***";

fn redact(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| REDACTED)
}

impl fmt::Debug for PartialCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialCredentials")
            .field("api_key", &redact(&self.api_key))
            .field("nettu_account", &self.nettu_account)
            .field("token", &redact(&self.token))
            .finish()
    }
}

/// Resolved authentication mode
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Account admin access through the secret api key
    Account { api_key: String },
    /// End-user access on behalf of an account, optionally with a signed token
    User {
        nettu_account: String,
        token: Option<String>,
    },
    /// No credentials; only public endpoints will accept the requests
    Empty,
}

impl Credentials {
    /// Resolve optional caller input. `None` is treated like empty input.
    pub fn from_partial(creds: Option<&PartialCredentials>) -> Self {
        creds.map(PartialCredentials::resolve).unwrap_or(Credentials::Empty)
    }

    /// Headers attached to every request made with these credentials
    pub fn create_auth_headers(&self) -> AuthHeaders {
        let mut headers = BTreeMap::new();
        match self {
            Credentials::Account { api_key } => {
                headers.insert(header::API_KEY.to_string(), api_key.clone());
            }
            Credentials::User {
                nettu_account,
                token,
            } => {
                headers.insert(header::NETTU_ACCOUNT.to_string(), nettu_account.clone());
                if let Some(token) = token.as_deref().filter(|t| !t.is_empty()) {
                    headers.insert(header::AUTHORIZATION.to_string(), format!("Bearer {token}"));
                }
            }
            Credentials::Empty => {}
        }
        AuthHeaders(headers)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Credentials::Empty)
    }
}

// Secrets never show up in debug output, only whether they are set.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Account { .. } => f
                .debug_struct("Account")
                .field("api_key", &REDACTED)
                .finish(),
            Credentials::User {
                nettu_account,
                token,
            } => f
                .debug_struct("User")
                .field("nettu_account", nettu_account)
                .field("token", &redact(token))
                .finish(),
            Credentials::Empty => f.write_str("Empty"),
        }
    }
}

/// Read-only header mapping produced by [`Credentials::create_auth_headers`]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthHeaders(BTreeMap<String, String>);

impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|k| (k, REDACTED)))
            .finish()
    }
}

impl AuthHeaders {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Owned `(name, value)` pairs, ready to be put on an `HttpRequest`
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
