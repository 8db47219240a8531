// Calendar event clients

use crate::{
    constants::api_path,
    error::Result,
    http::BaseClient,
    model::{
        CreateEventRequest, EventInstancesResponse, EventResponse, TimespanQuery,
        UpdateEventRequest,
    },
    response::ApiResponse,
};

#[derive(Clone, Debug)]
pub struct EventClient {
    base: BaseClient,
}

impl EventClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    fn event_path(event_id: &str) -> String {
        format!("{}{}/{}", api_path::ADMIN_SCOPE, api_path::EVENTS, event_id)
    }

    pub async fn create(
        &self,
        user_id: &str,
        req: &CreateEventRequest,
    ) -> Result<ApiResponse<EventResponse>> {
        let path = format!("{}/{}{}", api_path::ADMIN_SCOPE, user_id, api_path::EVENTS);
        self.base.post(&path, req).await
    }

    pub async fn find(&self, event_id: &str) -> Result<ApiResponse<EventResponse>> {
        self.base.get(&Self::event_path(event_id)).await
    }

    pub async fn update(
        &self,
        event_id: &str,
        req: &UpdateEventRequest,
    ) -> Result<ApiResponse<EventResponse>> {
        self.base.put(&Self::event_path(event_id), req).await
    }

    pub async fn remove(&self, event_id: &str) -> Result<ApiResponse<EventResponse>> {
        self.base.delete(&Self::event_path(event_id)).await
    }

    pub async fn get_instances(
        &self,
        event_id: &str,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<ApiResponse<EventInstancesResponse>> {
        let path = format!("{}/instances", Self::event_path(event_id));
        self.base
            .get_with_query(&path, &TimespanQuery { start_ts, end_ts })
            .await
    }
}

/// Events owned by the signed-in end user
#[derive(Clone, Debug)]
pub struct EventUserClient {
    base: BaseClient,
}

impl EventUserClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    fn event_path(event_id: &str) -> String {
        format!("{}/{}", api_path::EVENTS, event_id)
    }

    pub async fn create(&self, req: &CreateEventRequest) -> Result<ApiResponse<EventResponse>> {
        self.base.post(api_path::EVENTS, req).await
    }

    pub async fn find(&self, event_id: &str) -> Result<ApiResponse<EventResponse>> {
        self.base.get(&Self::event_path(event_id)).await
    }

    pub async fn update(
        &self,
        event_id: &str,
        req: &UpdateEventRequest,
    ) -> Result<ApiResponse<EventResponse>> {
        self.base.put(&Self::event_path(event_id), req).await
    }

    pub async fn remove(&self, event_id: &str) -> Result<ApiResponse<EventResponse>> {
        self.base.delete(&Self::event_path(event_id)).await
    }

    pub async fn get_instances(
        &self,
        event_id: &str,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<ApiResponse<EventInstancesResponse>> {
        let path = format!("{}/instances", Self::event_path(event_id));
        self.base
            .get_with_query(&path, &TimespanQuery { start_ts, end_ts })
            .await
    }
}
