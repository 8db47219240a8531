// Account administration client

use crate::{
    constants::api_path,
    error::Result,
    http::BaseClient,
    model::{
        AccountResponse, CreateAccountRequest, CreateAccountResponse, SetAccountPubKeyRequest,
        SetAccountWebhookRequest,
    },
    response::ApiResponse,
};

/// Operations on the account owning the api key
#[derive(Clone, Debug)]
pub struct AccountClient {
    base: BaseClient,
}

impl AccountClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    /// Open a new account. `code` is the scheduler's account creation secret.
    pub async fn create(&self, code: &str) -> Result<ApiResponse<CreateAccountResponse>> {
        let body = CreateAccountRequest {
            code: code.to_string(),
        };
        self.base.post(api_path::ACCOUNT, &body).await
    }

    pub async fn get(&self) -> Result<ApiResponse<AccountResponse>> {
        self.base.get(api_path::ACCOUNT).await
    }

    /// Set, or remove with `None`, the public key used to verify end-user tokens
    pub async fn set_public_signing_key(
        &self,
        public_jwt_key: Option<&str>,
    ) -> Result<ApiResponse<AccountResponse>> {
        let body = SetAccountPubKeyRequest {
            public_jwt_key: public_jwt_key.map(str::to_string),
        };
        self.base.put(api_path::ACCOUNT_PUBKEY, &body).await
    }

    pub async fn set_webhook(&self, url: &str) -> Result<ApiResponse<AccountResponse>> {
        let body = SetAccountWebhookRequest {
            webhook_url: url.to_string(),
        };
        self.base.put(api_path::ACCOUNT_WEBHOOK, &body).await
    }

    pub async fn delete_webhook(&self) -> Result<ApiResponse<AccountResponse>> {
        self.base.delete(api_path::ACCOUNT_WEBHOOK).await
    }
}
