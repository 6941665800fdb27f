//! Seatline Core
//!
//! Platform-agnostic seat selection logic for the Seatline booking page.
//! This crate owns the selection state machine, the derived summary and the
//! confirmation flow without any UI or browser dependencies.

pub mod booking;
pub mod config;
pub mod constants;
pub mod format;
pub mod grid;
pub mod loading;
pub mod seat;
pub mod selection;
pub mod stats;
pub mod summary;
pub mod trip;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// Re-export commonly used types
pub use booking::{BookingController, CloseReason, ConfirmationSnapshot, ModalState, ToggleOutcome};
pub use config::{BookingConfig, ConfigError, GridLayout, Pricing};
pub use format::{format_date, format_route, format_time};
pub use grid::{BookedSeatSource, FixedBookedSeats, SeatGrid, SeatRow};
pub use loading::LoadingButton;
pub use seat::{Seat, SeatId, SeatIdError, SeatStatus};
pub use selection::SelectionState;
pub use stats::{StatCounter, StatSuffix};
pub use summary::{ActionButton, ActionStyle, Summary};
pub use trip::{TripDetails, TripField, TripValidationError, validate_trip};

/// Receiver for user-facing soft warnings such as the seat limit notice.
///
/// Implementations may block (an alert) or not (a toast); the controller
/// never waits on the outcome.
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

/// Background scroll suspension while the confirmation modal is open.
pub trait ScrollLock {
    fn set_locked(&self, locked: bool);
}

/// Trait for abstracting configuration loading.
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the booking configuration from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_booking_config(&self) -> Result<BookingConfig, Self::Error>;
}

/// Headless sink that keeps every message; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CollectingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl CollectingNotifier {
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl NotificationSink for CollectingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Headless scroll lock that only records the current flag.
#[derive(Debug, Clone, Default)]
pub struct ScrollFlag {
    locked: Rc<Cell<bool>>,
}

impl ScrollFlag {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }
}

impl ScrollLock for ScrollFlag {
    fn set_locked(&self, locked: bool) {
        self.locked.set(locked);
    }
}

/// Main entry point tying a config source to controller construction
pub struct BookingEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> BookingEngine<L>
where
    L: DataLoader,
{
    /// Create a new engine with the provided data loader
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Load the config and build a controller around the given collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or does not validate.
    pub fn create_controller<N, S>(
        &self,
        notifier: N,
        scroll_lock: S,
    ) -> Result<BookingController<N, S>, EngineError<L::Error>>
    where
        N: NotificationSink,
        S: ScrollLock,
    {
        let config = self
            .data_loader
            .load_booking_config()
            .map_err(EngineError::Load)?;
        BookingController::from_config(&config, notifier, scroll_lock).map_err(EngineError::Config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError<E>
where
    E: std::error::Error + 'static,
{
    #[error("failed to load booking config: {0}")]
    Load(#[source] E),
    #[error("invalid booking config: {0}")]
    Config(#[source] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Clone, Copy, Default)]
    struct FixtureLoader;

    impl DataLoader for FixtureLoader {
        type Error = Infallible;

        fn load_booking_config(&self) -> Result<BookingConfig, Self::Error> {
            Ok(BookingConfig {
                max_seats: 2,
                ..BookingConfig::default()
            })
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("offline")]
    struct Offline;

    struct BrokenLoader;

    impl DataLoader for BrokenLoader {
        type Error = Offline;

        fn load_booking_config(&self) -> Result<BookingConfig, Self::Error> {
            Err(Offline)
        }
    }

    #[test]
    fn engine_builds_controller_from_loaded_config() {
        let engine = BookingEngine::new(FixtureLoader);
        let notifier = CollectingNotifier::default();
        let mut controller = engine
            .create_controller(notifier.clone(), ScrollFlag::default())
            .unwrap();
        for raw in ["A2", "A4", "B1"] {
            controller.toggle_seat(&raw.parse().unwrap());
        }
        assert_eq!(controller.selection().len(), 2);
        assert_eq!(notifier.messages(), ["Maximum 2 seats can be selected"]);
    }

    #[test]
    fn engine_reports_loader_failures() {
        let engine = BookingEngine::new(BrokenLoader);
        let err = engine
            .create_controller(CollectingNotifier::default(), ScrollFlag::default())
            .err()
            .expect("loader failure surfaces");
        assert!(matches!(err, EngineError::Load(Offline)));
        assert!(err.to_string().contains("offline"));
    }

    #[test]
    fn collaborators_share_state_across_clones() {
        let flag = ScrollFlag::default();
        flag.clone().set_locked(true);
        assert!(flag.is_locked());

        let notifier = CollectingNotifier::default();
        notifier.clone().notify("hello");
        assert_eq!(notifier.len(), 1);
        assert!(!notifier.is_empty());
    }
}
