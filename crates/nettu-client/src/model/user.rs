// User model types

use serde::{Deserialize, Serialize};

use super::event::EventInstance;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user: UserDto,
}

/// Query for a user's busy periods
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeBusyQuery {
    pub start_ts: i64,
    pub end_ts: i64,
    /// Comma separated calendar ids; all calendars when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_ids: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeBusyResponse {
    pub busy: Vec<EventInstance>,
    pub user_id: String,
}
