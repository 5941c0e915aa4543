use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::weekday::Weekday;

/// How a yearly event picks its day.
///
/// Records carry these as JSON objects tagged by `dateKind`:
///
/// ```json
/// {"dateKind": "absolute", "monthDay": "03-21"}
/// {"dateKind": "relative", "month": 5, "weekOfMonth": 2, "weekday": "日"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dateKind", rename_all = "lowercase")]
pub enum EventDateRule {
    #[serde(alias = "Absolute")]
    Absolute(AbsoluteRule),
    #[serde(alias = "Relative")]
    Relative(RelativeRule),
}

/// Same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsoluteRule {
    /// `MM-DD`, no year.
    pub month_day: String,
}

/// The Nth given weekday of a month, widened by a day range around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeRule {
    /// 1-based calendar month.
    pub month: u32,
    /// 1-based ordinal of the weekday inside the month.
    #[serde(default = "first_week")]
    pub week_of_month: i64,
    #[serde(default)]
    pub weekday: Weekday,
    #[serde(default)]
    pub start_offset_days: i64,
    /// Not required to be >= `start_offset_days`; a reversed range is empty.
    #[serde(default)]
    pub end_offset_days: i64,
}

fn first_week() -> i64 {
    1
}

impl RelativeRule {
    /// A single-day rule: the `week_of_month`-th `weekday` of `month`.
    pub fn new(month: u32, week_of_month: i64, weekday: Weekday) -> Self {
        Self {
            month,
            week_of_month,
            weekday,
            start_offset_days: 0,
            end_offset_days: 0,
        }
    }

    pub fn with_offsets(mut self, start: i64, end: i64) -> Self {
        self.start_offset_days = start;
        self.end_offset_days = end;
        self
    }
}

impl EventDateRule {
    pub fn absolute(month_day: impl Into<String>) -> Self {
        EventDateRule::Absolute(AbsoluteRule {
            month_day: month_day.into(),
        })
    }

    pub fn relative(rule: RelativeRule) -> Self {
        EventDateRule::Relative(rule)
    }

    /// Decode the rules stored under a record field.
    ///
    /// Elements that do not decode are skipped so one bad entry does not
    /// drop the others. A missing or non-array value has no rules.
    pub fn parse_list(value: Option<&Value>) -> Vec<EventDateRule> {
        let Some(Value::Array(items)) = value else {
            if let Some(other) = value {
                tracing::debug!(value = %other, "Event dates field is not a list");
            }
            return Vec::new();
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(position, item)| {
                match EventDateRule::deserialize(item) {
                    Ok(rule) => Some(rule),
                    Err(e) => {
                        tracing::debug!(position, error = %e, "Skipping undecodable event date rule");
                        None
                    }
                }
            })
            .collect()
    }
}
