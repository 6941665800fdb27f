//! Seat selection controller and the booking confirmation flow.
//!
//! `BookingController` is the only owner of the selection and trip inputs.
//! Every mutator ends by recomputing the summary, so `summary()` always
//! reflects the current state.
use crate::config::{BookingConfig, ConfigError, GridLayout, Pricing};
use crate::constants::{LOG_TARGET, seat_limit_message};
use crate::grid::{BookedSeatSource, FixedBookedSeats, SeatGrid};
use crate::seat::SeatId;
use crate::selection::SelectionState;
use crate::summary::Summary;
use crate::trip::{TripDetails, TripField, TripValidationError, validate_trip};
use crate::{NotificationSink, ScrollLock};
use chrono::NaiveDate;
use serde::Serialize;

/// Which branch a `toggle_seat` call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Soft rejection: the selection was already full.
    LimitReached,
    /// Booked or unknown seat; nothing changed and nothing was reported.
    Unavailable,
}

/// What dismissed the confirmation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    CloseButton,
    Continue,
    Overlay,
    Escape,
}

/// Seat list and total frozen at the moment the booking was confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationSnapshot {
    pub seats: Vec<SeatId>,
    pub total_price: u64,
    /// `Seats: A2, B1`
    pub seats_text: String,
    /// `Total: ৳1120`
    pub total_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "snapshot", rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Idle,
    Open(ConfirmationSnapshot),
}

impl ModalState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&ConfirmationSnapshot> {
        match self {
            Self::Idle => None,
            Self::Open(snapshot) => Some(snapshot),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingController<N, L>
where
    N: NotificationSink,
    L: ScrollLock,
{
    pricing: Pricing,
    grid: SeatGrid,
    selection: SelectionState,
    trip: TripDetails,
    summary: Summary,
    modal: ModalState,
    notifier: N,
    scroll_lock: L,
}

impl<N, L> BookingController<N, L>
where
    N: NotificationSink,
    L: ScrollLock,
{
    /// Build the grid from `source` and start with an empty selection.
    pub fn new(
        layout: GridLayout,
        pricing: Pricing,
        max_seats: usize,
        source: &impl BookedSeatSource,
        notifier: N,
        scroll_lock: L,
    ) -> Self {
        let grid = SeatGrid::from_source(layout, source);
        let selection = SelectionState::new(max_seats);
        let trip = TripDetails::default();
        let summary = Summary::compute(&selection, &trip, &pricing);
        Self {
            pricing,
            grid,
            selection,
            trip,
            summary,
            modal: ModalState::Idle,
            notifier,
            scroll_lock,
        }
    }

    /// Build a controller from a validated config and its fixed booked list.
    ///
    /// # Errors
    ///
    /// Returns an error if the config does not validate.
    pub fn from_config(
        config: &BookingConfig,
        notifier: N,
        scroll_lock: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = FixedBookedSeats::from_config(config)?;
        Ok(Self::new(
            config.layout,
            config.pricing.clone(),
            config.max_seats,
            &source,
            notifier,
            scroll_lock,
        ))
    }

    /// Select or deselect a seat.
    ///
    /// Deselection is always allowed. Selecting past the cap leaves the state
    /// untouched and sends one notice to the sink.
    pub fn toggle_seat(&mut self, id: &SeatId) -> ToggleOutcome {
        let outcome = if !self.grid.is_interactive(id) {
            log::debug!(target: LOG_TARGET, "ignoring toggle on unavailable seat {id}");
            ToggleOutcome::Unavailable
        } else if self.selection.remove(id) {
            ToggleOutcome::Deselected
        } else if self.selection.push(*id) {
            ToggleOutcome::Selected
        } else {
            let message = seat_limit_message(self.selection.capacity());
            log::debug!(target: LOG_TARGET, "seat {id} rejected: {message}");
            self.notifier.notify(&message);
            ToggleOutcome::LimitReached
        };
        self.update_summary();
        outcome
    }

    /// Recompute the summary from scratch and sync the grid flags.
    pub fn update_summary(&mut self) -> &Summary {
        self.grid.sync_selection(&self.selection);
        self.summary = Summary::compute(&self.selection, &self.trip, &self.pricing);
        &self.summary
    }

    pub fn set_trip(&mut self, trip: TripDetails) {
        self.trip = trip;
        self.update_summary();
    }

    /// Form change notification for a single field.
    pub fn update_trip_field(&mut self, field: TripField, value: impl Into<String>) {
        self.trip.set_field(field, value);
        self.update_summary();
    }

    /// Open the confirmation modal with a frozen snapshot.
    ///
    /// Returns `false` and changes nothing when the selection is empty or the
    /// modal is already open.
    pub fn confirm(&mut self) -> bool {
        if self.selection.is_empty() || self.modal.is_open() {
            return false;
        }
        let seats = self.selection.as_slice().to_vec();
        let total_price = self.pricing.total(seats.len());
        let snapshot = ConfirmationSnapshot {
            seats_text: format!("Seats: {}", self.summary.seat_list),
            total_text: format!("Total: {}", self.pricing.render(total_price)),
            seats,
            total_price,
        };
        log::debug!(target: LOG_TARGET, "booking confirmed: {}", snapshot.seats_text);
        self.modal = ModalState::Open(snapshot);
        self.scroll_lock.set_locked(true);
        true
    }

    /// Dismiss the modal, clear the selection and restore scrolling.
    ///
    /// Returns `false` when the modal was not open.
    pub fn close_modal(&mut self, reason: CloseReason) -> bool {
        if !self.modal.is_open() {
            return false;
        }
        log::debug!(target: LOG_TARGET, "confirmation closed via {reason:?}");
        self.modal = ModalState::Idle;
        self.scroll_lock.set_locked(false);
        self.selection.clear();
        self.update_summary();
        true
    }

    /// Form validation for the current trip. Not consulted by `confirm`.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate_trip(&self, today: NaiveDate) -> Result<(), TripValidationError> {
        validate_trip(&self.trip, today)
    }

    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub const fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    #[must_use]
    pub const fn trip(&self) -> &TripDetails {
        &self.trip
    }

    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    #[must_use]
    pub const fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub const fn scroll_lock(&self) -> &L {
        &self.scroll_lock
    }
}
