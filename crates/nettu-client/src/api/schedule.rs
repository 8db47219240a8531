// Schedule clients

use crate::{
    constants::api_path,
    error::Result,
    http::BaseClient,
    model::{CreateScheduleRequest, ScheduleResponse, UpdateScheduleRequest},
    response::ApiResponse,
};

#[derive(Clone, Debug)]
pub struct ScheduleClient {
    base: BaseClient,
}

impl ScheduleClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    fn schedule_path(schedule_id: &str) -> String {
        format!(
            "{}{}/{}",
            api_path::ADMIN_SCOPE,
            api_path::SCHEDULE,
            schedule_id
        )
    }

    pub async fn create(
        &self,
        user_id: &str,
        req: &CreateScheduleRequest,
    ) -> Result<ApiResponse<ScheduleResponse>> {
        let path = format!("{}/{}{}", api_path::ADMIN_SCOPE, user_id, api_path::SCHEDULE);
        self.base.post(&path, req).await
    }

    pub async fn find(&self, schedule_id: &str) -> Result<ApiResponse<ScheduleResponse>> {
        self.base.get(&Self::schedule_path(schedule_id)).await
    }

    pub async fn update(
        &self,
        schedule_id: &str,
        req: &UpdateScheduleRequest,
    ) -> Result<ApiResponse<ScheduleResponse>> {
        self.base.put(&Self::schedule_path(schedule_id), req).await
    }

    pub async fn remove(&self, schedule_id: &str) -> Result<ApiResponse<ScheduleResponse>> {
        self.base.delete(&Self::schedule_path(schedule_id)).await
    }
}

#[derive(Clone, Debug)]
pub struct ScheduleUserClient {
    base: BaseClient,
}

impl ScheduleUserClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    fn schedule_path(schedule_id: &str) -> String {
        format!("{}/{}", api_path::SCHEDULE, schedule_id)
    }

    pub async fn create(
        &self,
        req: &CreateScheduleRequest,
    ) -> Result<ApiResponse<ScheduleResponse>> {
        self.base.post(api_path::SCHEDULE, req).await
    }

    pub async fn find(&self, schedule_id: &str) -> Result<ApiResponse<ScheduleResponse>> {
        self.base.get(&Self::schedule_path(schedule_id)).await
    }

    pub async fn update(
        &self,
        schedule_id: &str,
        req: &UpdateScheduleRequest,
    ) -> Result<ApiResponse<ScheduleResponse>> {
        self.base.put(&Self::schedule_path(schedule_id), req).await
    }

    pub async fn remove(&self, schedule_id: &str) -> Result<ApiResponse<ScheduleResponse>> {
        self.base.delete(&Self::schedule_path(schedule_id)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::{
        credentials::Credentials,
        http::tests::{RecordingTransport, base_client},
    };

    #[tokio::test]
    async fn test_schedule_round_trip() {
        let body = r#"{"schedule":{"id":"s1","userId":"u1","timezone":"UTC","rules":[]}}"#;
        let transport = Arc::new(RecordingTransport::new(201, body));
        let client = ScheduleClient::new(base_client(Credentials::Empty, transport.clone()));

        let req = CreateScheduleRequest {
            timezone: "UTC".to_string(),
            rules: None,
        };
        let res = client.create("u1", &req).await.unwrap();
        assert_eq!(res.status(), 201);
        assert_eq!(res.data().unwrap().schedule.id, "s1");

        let sent = transport.last_request();
        assert_eq!(sent.url, "http://localhost:5000/api/v1/user/u1/schedule");
        assert_eq!(sent.body, Some(json!({"timezone": "UTC"})));

        let user = ScheduleUserClient::new(base_client(Credentials::Empty, transport.clone()));
        user.remove("s1").await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "http://localhost:5000/api/v1/schedule/s1"
        );
    }
}
