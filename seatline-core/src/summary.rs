//! Derived booking summary, recomputed in full on every change.
use crate::config::Pricing;
use crate::constants::{
    ACTIVE_ACTION_COLOR, CONFIRM_LABEL, NEUTRAL_ACTION_COLOR, SELECT_FIRST_LABEL,
};
use crate::format::{format_date, format_route, format_seat_list, format_time, seat_count_label};
use crate::selection::SelectionState;
use crate::trip::TripDetails;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStyle {
    Neutral,
    Active,
}

impl ActionStyle {
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Neutral => NEUTRAL_ACTION_COLOR,
            Self::Active => ACTIVE_ACTION_COLOR,
        }
    }
}

/// State of the booking button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub enabled: bool,
    pub label: &'static str,
    pub style: ActionStyle,
}

impl ActionButton {
    #[must_use]
    pub const fn for_count(count: usize) -> Self {
        if count == 0 {
            Self {
                enabled: false,
                label: SELECT_FIRST_LABEL,
                style: ActionStyle::Neutral,
            }
        } else {
            Self {
                enabled: true,
                label: CONFIRM_LABEL,
                style: ActionStyle::Active,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub route: String,
    pub date: String,
    pub time: String,
    pub seat_list: String,
    pub seat_count: usize,
    pub seat_count_label: Option<String>,
    pub total_price: u64,
    pub total_text: String,
    pub action: ActionButton,
}

impl Summary {
    /// Pure function of the selection and trip inputs.
    #[must_use]
    pub fn compute(selection: &SelectionState, trip: &TripDetails, pricing: &Pricing) -> Self {
        let seat_count = selection.len();
        let total_price = pricing.total(seat_count);
        Self {
            route: format_route(&trip.origin, &trip.destination),
            date: format_date(&trip.date),
            time: format_time(&trip.time),
            seat_list: format_seat_list(selection.as_slice()),
            seat_count,
            seat_count_label: seat_count_label(seat_count),
            total_price,
            total_text: pricing.render(total_price),
            action: ActionButton::for_count(seat_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_of(ids: &[&str]) -> SelectionState {
        let mut selection = SelectionState::new(4);
        for raw in ids {
            selection.push(raw.parse().unwrap());
        }
        selection
    }

    #[test]
    fn three_seats_summary() {
        let summary = Summary::compute(
            &selection_of(&["A2", "B1", "C3"]),
            &TripDetails::default(),
            &Pricing::default(),
        );
        assert_eq!(summary.route, "Dhaka → Chittagong");
        assert_eq!(summary.date, "Jan 15, 2025");
        assert_eq!(summary.time, "8:00 AM");
        assert_eq!(summary.seat_list, "A2, B1, C3");
        assert_eq!(summary.seat_count_label.as_deref(), Some("3 seats selected"));
        assert_eq!(summary.total_text, "৳1680");
        assert!(summary.action.enabled);
        assert_eq!(summary.action.label, "Confirm Booking");
        assert_eq!(summary.action.style.background(), "#22c55e");
    }

    #[test]
    fn empty_summary_disables_action() {
        let summary = Summary::compute(
            &selection_of(&[]),
            &TripDetails::default(),
            &Pricing::default(),
        );
        assert_eq!(summary.seat_list, "None");
        assert_eq!(summary.seat_count_label, None);
        assert_eq!(summary.total_price, 0);
        assert_eq!(summary.total_text, "৳0");
        assert_eq!(summary.action, ActionButton::for_count(0));
        assert!(!summary.action.enabled);
        assert_eq!(summary.action.label, "Select Seats First");
        assert_eq!(summary.action.style, ActionStyle::Neutral);
    }

    #[test]
    fn recompute_is_idempotent() {
        let selection = selection_of(&["J4"]);
        let trip = TripDetails::default();
        let pricing = Pricing::default();
        assert_eq!(
            Summary::compute(&selection, &trip, &pricing),
            Summary::compute(&selection, &trip, &pricing)
        );
    }
}
