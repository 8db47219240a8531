// Schedule model types

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Time {
    pub hours: i64,
    pub minutes: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRuleInterval {
    pub start: Time,
    pub end: Time,
}

/// Which days a rule applies to: a weekday (`"wday"`, e.g. `"Mon"`) or a
/// specific date (`"date"`, e.g. `"2021-1-20"`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRuleVariant {
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRule {
    pub variant: ScheduleRuleVariant,
    pub intervals: Vec<ScheduleRuleInterval>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: String,
    pub user_id: String,
    pub timezone: String,
    #[serde(default)]
    pub rules: Vec<ScheduleRule>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub schedule: ScheduleDto,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ScheduleRule>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ScheduleRule>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_rule_serialization() {
        let rule = ScheduleRule {
            variant: ScheduleRuleVariant {
                type_: "wday".to_string(),
                value: "Mon".to_string(),
            },
            intervals: vec![ScheduleRuleInterval {
                start: Time { hours: 9, minutes: 0 },
                end: Time {
                    hours: 17,
                    minutes: 30,
                },
            }],
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains(r#""variant":{"type":"wday","value":"Mon"}"#));
        assert!(json.contains(r#""end":{"hours":17,"minutes":30}"#));

        let deserialized: ScheduleRule = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, rule);
    }
}
