// Service clients

use crate::{
    constants::api_path,
    error::Result,
    http::BaseClient,
    model::{
        AddServiceUserRequest, BookingSlotsQuery, BookingSlotsResponse,
        RemoveServiceUsersRequest, ServiceResponse,
    },
    response::ApiResponse,
};

fn service_path(service_id: &str) -> String {
    format!("{}/{}", api_path::SERVICE, service_id)
}

fn booking_path(service_id: &str) -> String {
    format!("{}/booking", service_path(service_id))
}

/// Admin access to bookable services
#[derive(Clone, Debug)]
pub struct ServiceClient {
    base: BaseClient,
}

impl ServiceClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    pub async fn create(&self) -> Result<ApiResponse<ServiceResponse>> {
        self.base
            .post(api_path::SERVICE, &serde_json::json!({}))
            .await
    }

    pub async fn find(&self, service_id: &str) -> Result<ApiResponse<ServiceResponse>> {
        self.base.get(&service_path(service_id)).await
    }

    pub async fn remove(&self, service_id: &str) -> Result<ApiResponse<ServiceResponse>> {
        self.base.delete(&service_path(service_id)).await
    }

    pub async fn add_user(
        &self,
        service_id: &str,
        req: &AddServiceUserRequest,
    ) -> Result<ApiResponse<ServiceResponse>> {
        let path = format!("{}/users", service_path(service_id));
        self.base.post(&path, req).await
    }

    /// Detach several users at once. The ids travel in the DELETE body.
    pub async fn remove_users(
        &self,
        service_id: &str,
        user_ids: &[&str],
    ) -> Result<ApiResponse<ServiceResponse>> {
        let path = format!("{}/users", service_path(service_id));
        let body = RemoveServiceUsersRequest {
            user_ids: user_ids.iter().map(|id| id.to_string()).collect(),
        };
        self.base.delete_with_body(&path, &body).await
    }

    pub async fn get_bookingslots(
        &self,
        service_id: &str,
        query: &BookingSlotsQuery,
    ) -> Result<ApiResponse<BookingSlotsResponse>> {
        self.base
            .get_with_query(&booking_path(service_id), query)
            .await
    }
}

/// Public booking view of a service
#[derive(Clone, Debug)]
pub struct ServiceUserClient {
    base: BaseClient,
}

impl ServiceUserClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    pub async fn get_bookingslots(
        &self,
        service_id: &str,
        query: &BookingSlotsQuery,
    ) -> Result<ApiResponse<BookingSlotsResponse>> {
        self.base
            .get_with_query(&booking_path(service_id), query)
            .await
    }
}
