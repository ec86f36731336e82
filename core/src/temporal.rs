//! Relative date and time phrase resolution.
//!
//! Dates resolve against an injected reference day so results are
//! reproducible; the caller decides whether that reference is "today".

use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;

use crate::text::contains_word;

/// Weekday table, Monday-first. Full names before 3-letter abbreviations so a
/// full-name hit always wins.
pub(crate) const WEEKDAYS: [(&str, u32); 14] = [
    ("monday", 0),
    ("tuesday", 1),
    ("wednesday", 2),
    ("thursday", 3),
    ("friday", 4),
    ("saturday", 5),
    ("sunday", 6),
    ("mon", 0),
    ("tue", 1),
    ("wed", 2),
    ("thu", 3),
    ("fri", 4),
    ("sat", 5),
    ("sun", 6),
];

static IN_N_DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"in\s+(\d+)\s+days?").expect("valid in-n-days regex"));
static CLOCK_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})(:\d{2})?\s*(am|pm)").expect("valid clock time regex"));

fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}

pub(crate) fn weekday_index(date: NaiveDate) -> u32 {
    chrono::Datelike::weekday(&date).num_days_from_monday()
}

/// Next occurrence of the weekday with Monday-first index `target`, never the
/// reference day itself: a bare "monday" spoken on a Monday means next week.
/// `None` only when the step past the reference would overflow the calendar.
pub(crate) fn next_weekday(reference: NaiveDate, target: u32) -> Option<NaiveDate> {
    let mut ahead = (7 + target - weekday_index(reference)) % 7;
    if ahead == 0 {
        ahead = 7;
    }
    reference.checked_add_days(Days::new(u64::from(ahead)))
}

/// Resolve at most one date phrase. First match wins; the chain order is part
/// of the contract ("today" beats a bare weekday name, etc.).
pub fn resolve_date(text: &str, reference: NaiveDate) -> Option<String> {
    let lower = text.to_lowercase();

    if lower.contains("tomorrow") && !lower.contains("day after tomorrow") {
        return reference.checked_add_days(Days::new(1)).map(long_date);
    }
    if lower.contains("today") {
        return Some(long_date(reference));
    }
    if lower.contains("day after tomorrow") {
        return reference.checked_add_days(Days::new(2)).map(long_date);
    }
    if let Some(caps) = IN_N_DAYS_RE.captures(&lower) {
        // An absurd day count overflows the calendar; treat it as no date.
        let n: u64 = caps[1].parse().ok()?;
        return reference.checked_add_days(Days::new(n)).map(long_date);
    }
    if lower.contains("this weekend") {
        // If the reference day is already Saturday the weekend starts today.
        let until_sat = (7 + 5 - weekday_index(reference)) % 7;
        let sat = reference.checked_add_days(Days::new(u64::from(until_sat)))?;
        let sun = sat.checked_add_days(Days::new(1))?;
        return Some(format!(
            "Weekend ({} - {})",
            sat.format("%B %d"),
            sun.format("%B %d, %Y")
        ));
    }
    if lower.contains("next week") {
        let mut until_mon = (7 - weekday_index(reference)) % 7;
        if until_mon == 0 {
            until_mon = 7;
        }
        let mon = reference.checked_add_days(Days::new(u64::from(until_mon)))?;
        return Some(format!("Week of {}", mon.format("%B %d, %Y")));
    }
    for (name, index) in WEEKDAYS {
        if contains_word(&lower, name) {
            return next_weekday(reference, index).map(long_date);
        }
    }

    None
}

/// Resolve at most one time phrase: an explicit clock time wins outright,
/// otherwise the coarse buckets are tried in fixed order.
pub fn resolve_time(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    if let Some(caps) = CLOCK_TIME_RE.captures(&lower) {
        let hour: u8 = caps[1].parse().ok()?;
        let minutes = caps.get(2).map_or(":00", |m| m.as_str());
        let period = caps[3].to_uppercase();
        return Some(format!("{hour}{minutes} {period}"));
    }

    if lower.contains("early morning") || lower.contains("early") {
        return Some("Early Morning".to_string());
    }
    if lower.contains("morning") {
        return Some("Morning".to_string());
    }
    if lower.contains("afternoon") {
        return Some("Afternoon".to_string());
    }
    if lower.contains("after work") || lower.contains("evening") {
        return Some("Evening".to_string());
    }
    if lower.contains("night") {
        return Some("Night".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wed() -> NaiveDate {
        // Wednesday
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    #[test]
    fn tomorrow_and_today() {
        assert_eq!(
            resolve_date("do it tomorrow", wed()).as_deref(),
            Some("Thursday, January 04, 2024")
        );
        assert_eq!(
            resolve_date("run today", wed()).as_deref(),
            Some("Wednesday, January 03, 2024")
        );
    }

    #[test]
    fn in_n_days() {
        assert_eq!(
            resolve_date("race in 10 days", wed()).as_deref(),
            Some("Saturday, January 13, 2024")
        );
    }

    #[test]
    fn in_n_days_past_calendar_end_is_no_date() {
        assert_eq!(resolve_date("do it in 999999999999 days", wed()), None);
    }

    #[test]
    fn day_after_tomorrow_is_plus_two() {
        assert_eq!(
            resolve_date("day after tomorrow", wed()).as_deref(),
            Some("Friday, January 05, 2024")
        );
        // "the day after tomorrow" must not get shadowed by the tomorrow branch.
        assert_eq!(
            resolve_date("ride the day after tomorrow", wed()).as_deref(),
            Some("Friday, January 05, 2024")
        );
    }

    #[test]
    fn bare_weekday_is_next_occurrence() {
        assert_eq!(
            resolve_date("do it monday", wed()).as_deref(),
            Some("Monday, January 08, 2024")
        );
        // Same weekday as the reference: a week out, never today.
        assert_eq!(
            resolve_date("wednesday session", wed()).as_deref(),
            Some("Wednesday, January 10, 2024")
        );
    }

    #[test]
    fn weekday_abbreviations() {
        assert_eq!(
            resolve_date("see you fri", wed()).as_deref(),
            Some("Friday, January 05, 2024")
        );
        assert_eq!(resolve_date("money talks", wed()), None);
    }

    #[test]
    fn weekend_and_next_week() {
        assert_eq!(
            resolve_date("long ride this weekend", wed()).as_deref(),
            Some("Weekend (January 06 - January 07, 2024)")
        );
        // Saturday reference: the weekend starts that day.
        let sat = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        assert_eq!(
            resolve_date("this weekend", sat).as_deref(),
            Some("Weekend (January 06 - January 07, 2024)")
        );
        assert_eq!(
            resolve_date("plan for next week", wed()).as_deref(),
            Some("Week of January 08, 2024")
        );
    }

    #[test]
    fn explicit_clock_time_wins() {
        assert_eq!(
            resolve_time("swim at 6am in the morning").as_deref(),
            Some("6:00 AM")
        );
        assert_eq!(resolve_time("meet at 7:30pm").as_deref(), Some("7:30 PM"));
    }

    #[test]
    fn coarse_buckets_in_order() {
        assert_eq!(resolve_time("early morning run").as_deref(), Some("Early Morning"));
        assert_eq!(resolve_time("run in the morning").as_deref(), Some("Morning"));
        assert_eq!(resolve_time("gym after work").as_deref(), Some("Evening"));
        assert_eq!(resolve_time("no time here"), None);
    }
}
