// Calendar model types

use serde::{Deserialize, Serialize};

use super::event::{CalendarEventDto, EventInstance};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSettings {
    /// First day of the week, 0 (Monday) to 6 (Sunday)
    pub wkst: isize,
    /// IANA timezone name
    pub timezone: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            wkst: 0,
            timezone: "UTC".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDto {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub settings: CalendarSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub calendar: CalendarDto,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkst: Option<isize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Partial settings update; omitted fields keep their current value
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCalendarSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkst: Option<isize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithInstances {
    pub event: CalendarEventDto,
    pub instances: Vec<EventInstance>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventsResponse {
    pub calendar: CalendarDto,
    pub events: Vec<EventWithInstances>,
}
