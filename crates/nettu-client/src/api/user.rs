// User clients

use crate::{
    constants::api_path,
    error::Result,
    http::BaseClient,
    model::{FreeBusyQuery, FreeBusyResponse, UserResponse},
    response::ApiResponse,
};

/// Admin access to the users of the account
#[derive(Clone, Debug)]
pub struct UserClient {
    base: BaseClient,
}

impl UserClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    pub async fn create(&self) -> Result<ApiResponse<UserResponse>> {
        self.base
            .post(api_path::USER, &serde_json::json!({}))
            .await
    }

    pub async fn find(&self, user_id: &str) -> Result<ApiResponse<UserResponse>> {
        self.base
            .get(&format!("{}/{}", api_path::USER, user_id))
            .await
    }

    pub async fn remove(&self, user_id: &str) -> Result<ApiResponse<UserResponse>> {
        self.base
            .delete(&format!("{}/{}", api_path::USER, user_id))
            .await
    }

    pub async fn free_busy(
        &self,
        user_id: &str,
        query: &FreeBusyQuery,
    ) -> Result<ApiResponse<FreeBusyResponse>> {
        self.base
            .get_with_query(&format!("{}/{}/freebusy", api_path::USER, user_id), query)
            .await
    }
}

/// The signed-in end user
#[derive(Clone, Debug)]
pub struct UserUserClient {
    base: BaseClient,
}

impl UserUserClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    pub async fn me(&self) -> Result<ApiResponse<UserResponse>> {
        self.base.get(api_path::ME).await
    }

    pub async fn free_busy(
        &self,
        user_id: &str,
        query: &FreeBusyQuery,
    ) -> Result<ApiResponse<FreeBusyResponse>> {
        self.base
            .get_with_query(&format!("{}/{}/freebusy", api_path::USER, user_id), query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        credentials::Credentials,
        http::{
            HttpMethod,
            tests::{RecordingTransport, base_client},
        },
    };

    #[tokio::test]
    async fn test_user_paths() {
        let transport = Arc::new(RecordingTransport::new(200, r#"{"user":{"id":"u1"}}"#));
        let admin = UserClient::new(base_client(Credentials::Empty, transport.clone()));

        let res = admin.find("u1").await.unwrap();
        assert_eq!(res.data().unwrap().user.id, "u1");
        assert_eq!(
            transport.last_request().url,
            "http://localhost:5000/api/v1/user/u1"
        );

        admin.remove("u1").await.unwrap();
        assert_eq!(transport.last_request().method, HttpMethod::Delete);

        admin.create().await.unwrap();
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body, Some(serde_json::json!({})));

        let query = FreeBusyQuery {
            start_ts: 0,
            end_ts: 100,
            calendar_ids: None,
        };
        let end_user = UserUserClient::new(base_client(Credentials::Empty, transport.clone()));
        end_user.free_busy("u1", &query).await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "http://localhost:5000/api/v1/user/u1/freebusy?startTs=0&endTs=100"
        );

        end_user.me().await.unwrap();
        assert_eq!(transport.last_request().url, "http://localhost:5000/api/v1/me");
    }
}
