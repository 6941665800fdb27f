//! Display formatting for the booking summary (fixed `en-US` style).
use crate::constants::{NO_SEATS_LABEL, ROUTE_SEPARATOR, UNKNOWN_PLACEHOLDER};
use crate::seat::SeatId;
use chrono::{NaiveDate, NaiveTime};

/// `origin → destination`.
#[must_use]
pub fn format_route(origin: &str, destination: &str) -> String {
    format!("{origin}{ROUTE_SEPARATOR}{destination}")
}

/// Parse a form date value (`YYYY-MM-DD`).
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parse a form time value (`HH:MM`, tolerating a trailing `:SS`).
#[must_use]
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// `2025-01-05` -> `Jan 5, 2025`; anything unparseable renders as `--`.
#[must_use]
pub fn format_date(value: &str) -> String {
    parse_date(value).map_or_else(
        || UNKNOWN_PLACEHOLDER.to_string(),
        |date| date.format("%b %-d, %Y").to_string(),
    )
}

/// `14:05` -> `2:05 PM`, `00:30` -> `12:30 AM`. Seconds are dropped.
#[must_use]
pub fn format_time(value: &str) -> String {
    parse_time(value).map_or_else(
        || UNKNOWN_PLACEHOLDER.to_string(),
        |time| time.format("%-I:%M %p").to_string(),
    )
}

#[must_use]
pub fn format_seat_list(seats: &[SeatId]) -> String {
    if seats.is_empty() {
        return NO_SEATS_LABEL.to_string();
    }
    seats
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `1 seat selected` / `N seats selected`; hidden for an empty selection.
#[must_use]
pub fn seat_count_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 seat selected".to_string()),
        n => Some(format!("{n} seats selected")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_route_with_arrow() {
        assert_eq!(format_route("Dhaka", "Sylhet"), "Dhaka → Sylhet");
    }

    #[test]
    fn formats_dates_in_short_month_form() {
        assert_eq!(format_date("2025-01-05"), "Jan 5, 2025");
        assert_eq!(format_date("2025-12-31"), "Dec 31, 2025");
        assert_eq!(format_date(""), "--");
        assert_eq!(format_date("2025-02-30"), "--");
    }

    #[test]
    fn formats_times_in_twelve_hour_clock() {
        assert_eq!(format_time("14:05"), "2:05 PM");
        assert_eq!(format_time("00:30"), "12:30 AM");
        assert_eq!(format_time("12:00"), "12:00 PM");
        assert_eq!(format_time("08:00"), "8:00 AM");
        assert_eq!(format_time("23:59:41"), "11:59 PM");
        assert_eq!(format_time("25:00"), "--");
        assert_eq!(format_time("noon"), "--");
    }

    #[test]
    fn seat_list_and_count_labels() {
        let seats: Vec<SeatId> = ["A2", "B1", "C3"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(format_seat_list(&seats), "A2, B1, C3");
        assert_eq!(format_seat_list(&[]), "None");
        assert_eq!(seat_count_label(0), None);
        assert_eq!(seat_count_label(1).as_deref(), Some("1 seat selected"));
        assert_eq!(seat_count_label(3).as_deref(), Some("3 seats selected"));
    }
}
