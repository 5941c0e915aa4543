use chrono::{Datelike, NaiveDate, TimeDelta};

use super::rule::{AbsoluteRule, EventDateRule, RelativeRule};

/// Expand `rule` into the dates it names around `reference_date`.
///
/// - Absolute rules yield their month-day in the reference year, or nothing
///   when that date does not exist.
/// - Relative rules only fire while the reference date is in the rule's
///   month. They yield `anchor + i` for each `i` in
///   `start_offset_days..=end_offset_days`.
///
/// Never fails; unusable rules produce an empty list.
pub fn resolve_dates(rule: &EventDateRule, reference_date: NaiveDate) -> Vec<NaiveDate> {
    match rule {
        EventDateRule::Absolute(rule) => resolve_absolute(rule, reference_date)
            .into_iter()
            .collect(),
        EventDateRule::Relative(rule) => resolve_relative(rule, reference_date),
    }
}

/// Resolve every rule in order and render the dates as `MMDD` codes.
pub fn resolve_codes(rules: &[EventDateRule], reference_date: NaiveDate) -> Vec<String> {
    rules
        .iter()
        .flat_map(|rule| resolve_dates(rule, reference_date))
        .map(format_date)
        .collect()
}

/// `MMDD`, zero padded. The year is dropped: index entries mean
/// "recurs on this day".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m%d").to_string()
}

/// The `week_of_month`-th `weekday` of `(year, rule.month)`.
///
/// Not clamped to the month: a fifth weekday that does not exist rolls into
/// the following month.
pub fn anchor_date(rule: &RelativeRule, year: i32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, rule.month, 1)?;
    let first_index = i64::from(first.weekday().num_days_from_sunday());
    let to_weekday = (i64::from(rule.weekday.index()) - first_index + 7) % 7;
    let whole_weeks = rule.week_of_month.checked_sub(1)?.checked_mul(7)?;

    shift(first, to_weekday.checked_add(whole_weeks)?)
}

fn resolve_absolute(rule: &AbsoluteRule, reference_date: NaiveDate) -> Option<NaiveDate> {
    let candidate = format!("{}-{}", reference_date.year(), rule.month_day);
    match NaiveDate::parse_from_str(&candidate, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(month_day = %rule.month_day, error = %e, "Skipping malformed month-day");
            None
        }
    }
}

fn resolve_relative(rule: &RelativeRule, reference_date: NaiveDate) -> Vec<NaiveDate> {
    if rule.month != reference_date.month() {
        return Vec::new();
    }

    let Some(anchor) = anchor_date(rule, reference_date.year()) else {
        tracing::debug!(
            month = rule.month,
            week_of_month = rule.week_of_month,
            "Relative rule has no anchor date"
        );
        return Vec::new();
    };

    // Only offsets that land on a representable date are visited.
    let earliest = NaiveDate::MIN.signed_duration_since(anchor).num_days();
    let latest = NaiveDate::MAX.signed_duration_since(anchor).num_days();
    let start = rule.start_offset_days.max(earliest);
    let end = rule.end_offset_days.min(latest);

    (start..=end)
        .filter_map(|days| shift(anchor, days))
        .collect()
}

fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}
