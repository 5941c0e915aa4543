use serde::{Deserialize, Serialize};

/// Day of the week as written in source records.
///
/// Weeks start on Sunday (`日`), which is also the default when a rule
/// omits its weekday. English names are accepted as aliases on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Weekday {
    #[default]
    #[serde(rename = "日", alias = "sun", alias = "sunday", alias = "Sunday")]
    Sunday,
    #[serde(rename = "月", alias = "mon", alias = "monday", alias = "Monday")]
    Monday,
    #[serde(rename = "火", alias = "tue", alias = "tuesday", alias = "Tuesday")]
    Tuesday,
    #[serde(rename = "水", alias = "wed", alias = "wednesday", alias = "Wednesday")]
    Wednesday,
    #[serde(rename = "木", alias = "thu", alias = "thursday", alias = "Thursday")]
    Thursday,
    #[serde(rename = "金", alias = "fri", alias = "friday", alias = "Friday")]
    Friday,
    #[serde(rename = "土", alias = "sat", alias = "saturday", alias = "Saturday")]
    Saturday,
}

impl Weekday {
    /// All days in week order; position equals [`Weekday::index`].
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// 0 for Sunday through 6 for Saturday.
    pub fn index(self) -> u32 {
        self as u32
    }
}
