// Health check client

use crate::{
    constants::api_path, error::Result, http::BaseClient, model::StatusResponse,
    response::ApiResponse,
};

#[derive(Clone, Debug)]
pub struct HealthClient {
    base: BaseClient,
}

impl HealthClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    pub async fn check_status(&self) -> Result<ApiResponse<StatusResponse>> {
        self.base.get(api_path::HEALTHCHECK).await
    }
}
