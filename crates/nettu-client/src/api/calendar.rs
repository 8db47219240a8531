// Calendar clients

use crate::{
    constants::api_path,
    error::Result,
    http::BaseClient,
    model::{
        CalendarEventsResponse, CalendarResponse, CreateCalendarRequest, TimespanQuery,
        UpdateCalendarSettingsRequest,
    },
    response::ApiResponse,
};

/// Admin access to the calendars of any user in the account
#[derive(Clone, Debug)]
pub struct CalendarClient {
    base: BaseClient,
}

impl CalendarClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    fn calendar_path(calendar_id: &str) -> String {
        format!(
            "{}{}/{}",
            api_path::ADMIN_SCOPE,
            api_path::CALENDAR,
            calendar_id
        )
    }

    pub async fn create(
        &self,
        user_id: &str,
        req: &CreateCalendarRequest,
    ) -> Result<ApiResponse<CalendarResponse>> {
        let path = format!("{}/{}{}", api_path::ADMIN_SCOPE, user_id, api_path::CALENDAR);
        self.base.post(&path, req).await
    }

    pub async fn find(&self, calendar_id: &str) -> Result<ApiResponse<CalendarResponse>> {
        self.base.get(&Self::calendar_path(calendar_id)).await
    }

    pub async fn remove(&self, calendar_id: &str) -> Result<ApiResponse<CalendarResponse>> {
        self.base.delete(&Self::calendar_path(calendar_id)).await
    }

    pub async fn update_settings(
        &self,
        calendar_id: &str,
        req: &UpdateCalendarSettingsRequest,
    ) -> Result<ApiResponse<CalendarResponse>> {
        let path = format!("{}/settings", Self::calendar_path(calendar_id));
        self.base.put(&path, req).await
    }

    /// Events of the calendar expanded into instances within `[start_ts, end_ts)`
    pub async fn get_events(
        &self,
        calendar_id: &str,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<ApiResponse<CalendarEventsResponse>> {
        let path = format!("{}/events", Self::calendar_path(calendar_id));
        self.base
            .get_with_query(&path, &TimespanQuery { start_ts, end_ts })
            .await
    }
}

/// Calendars of the signed-in end user
#[derive(Clone, Debug)]
pub struct CalendarUserClient {
    base: BaseClient,
}

impl CalendarUserClient {
    pub fn new(base: BaseClient) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    fn calendar_path(calendar_id: &str) -> String {
        format!("{}/{}", api_path::CALENDAR, calendar_id)
    }

    pub async fn create(
        &self,
        req: &CreateCalendarRequest,
    ) -> Result<ApiResponse<CalendarResponse>> {
        self.base.post(api_path::CALENDAR, req).await
    }

    pub async fn find(&self, calendar_id: &str) -> Result<ApiResponse<CalendarResponse>> {
        self.base.get(&Self::calendar_path(calendar_id)).await
    }

    pub async fn remove(&self, calendar_id: &str) -> Result<ApiResponse<CalendarResponse>> {
        self.base.delete(&Self::calendar_path(calendar_id)).await
    }

    pub async fn update_settings(
        &self,
        calendar_id: &str,
        req: &UpdateCalendarSettingsRequest,
    ) -> Result<ApiResponse<CalendarResponse>> {
        let path = format!("{}/settings", Self::calendar_path(calendar_id));
        self.base.put(&path, req).await
    }

    pub async fn get_events(
        &self,
        calendar_id: &str,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<ApiResponse<CalendarEventsResponse>> {
        let path = format!("{}/events", Self::calendar_path(calendar_id));
        self.base
            .get_with_query(&path, &TimespanQuery { start_ts, end_ts })
            .await
    }
}
