//! Centralized layout, pricing and copy constants for the seat selector.
//!
//! `BookingConfig::default()` is built from these values, so the embedded
//! JSON config and the headless defaults can never drift apart silently.

// Layout -------------------------------------------------------------------
pub const ROW_COUNT: u8 = 10;
pub const COLUMN_COUNT: u8 = 4;
/// Seats with a column number at or below this sit left of the aisle.
pub const AISLE_AFTER_COLUMN: u8 = 2;
pub const DEFAULT_BOOKED_SEATS: &[&str] = &["A1", "A3", "B2", "C4", "D1", "E3", "F2"];

// Selection and pricing ----------------------------------------------------
pub const MAX_SELECTED_SEATS: usize = 4;
pub const PRICE_PER_SEAT: u64 = 560;
pub const CURRENCY_GLYPH: &str = "৳";

// Trip defaults ------------------------------------------------------------
pub const DEFAULT_ORIGIN: &str = "Dhaka";
pub const DEFAULT_DESTINATION: &str = "Chittagong";
pub const DEFAULT_TRAVEL_DATE: &str = "2025-01-15";
pub const DEFAULT_TRAVEL_TIME: &str = "08:00";

// Display copy -------------------------------------------------------------
pub const ROUTE_SEPARATOR: &str = " → ";
pub const NO_SEATS_LABEL: &str = "None";
pub const UNKNOWN_PLACEHOLDER: &str = "--";
pub const CONFIRM_LABEL: &str = "Confirm Booking";
pub const SELECT_FIRST_LABEL: &str = "Select Seats First";
pub const LOADING_LABEL: &str = "Loading...";
pub const ACTIVE_ACTION_COLOR: &str = "#22c55e";
pub const NEUTRAL_ACTION_COLOR: &str = "#d1d5db";

// Timers -------------------------------------------------------------------
pub const LOADING_RESET_MS: u32 = 1_000;
pub const STAT_ANIMATION_MS: u32 = 2_000;
pub const STAT_TICK_MS: u32 = 16;

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_TARGET: &str = "seatline";

/// User-facing notice emitted when a selection would exceed `max_seats`.
#[must_use]
pub fn seat_limit_message(max_seats: usize) -> String {
    format!("Maximum {max_seats} seats can be selected")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_limit_message_matches_default_copy() {
        assert_eq!(
            seat_limit_message(MAX_SELECTED_SEATS),
            "Maximum 4 seats can be selected"
        );
    }

    #[test]
    fn aisle_splits_default_row_evenly() {
        assert_eq!(COLUMN_COUNT - AISLE_AFTER_COLUMN, AISLE_AFTER_COLUMN);
    }
}
