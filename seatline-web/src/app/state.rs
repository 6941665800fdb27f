use crate::data::WebDataLoader;
use crate::notify::{AlertNotifier, BodyScrollLock};
use seatline_core::{
    BookingConfig, BookingController, BookingEngine, CloseReason, FixedBookedSeats, SeatId,
    ToggleOutcome, TripField,
};
use std::rc::Rc;
use yew::prelude::*;

pub type WebController = BookingController<AlertNotifier, BodyScrollLock>;

/// Events the page feeds into the controller, one per DOM interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingMsg {
    ToggleSeat(SeatId),
    UpdateTrip(TripField, String),
    Confirm,
    Close(CloseReason),
}

/// Reducer wrapper so each event is applied to the controller in one step.
#[derive(Debug, Clone)]
pub struct BookingStore {
    controller: WebController,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::load()
    }
}

impl PartialEq for BookingStore {
    fn eq(&self, other: &Self) -> bool {
        self.controller.summary() == other.controller.summary()
            && self.controller.trip() == other.controller.trip()
            && self.controller.modal() == other.controller.modal()
            && self.controller.grid() == other.controller.grid()
    }
}

impl BookingStore {
    /// Build from the embedded config, falling back to the built-in defaults.
    #[must_use]
    pub fn load() -> Self {
        let engine = BookingEngine::new(WebDataLoader);
        let controller = engine
            .create_controller(AlertNotifier, BodyScrollLock)
            .unwrap_or_else(|err| {
                log::error!("{err}; using default booking config");
                #[cfg(target_arch = "wasm32")]
                crate::dom::console_error(&format!("Failed to load booking config: {err}"));
                Self::default_controller()
            });
        Self { controller }
    }

    fn default_controller() -> WebController {
        let config = BookingConfig::default();
        let booked = FixedBookedSeats::from_config(&config).unwrap_or_default();
        BookingController::new(
            config.layout,
            config.pricing,
            config.max_seats,
            &booked,
            AlertNotifier,
            BodyScrollLock,
        )
    }

    #[must_use]
    pub const fn controller(&self) -> &WebController {
        &self.controller
    }

    /// Apply one event. Returns the toggle outcome for seat clicks.
    pub fn apply(&mut self, msg: BookingMsg) -> Option<ToggleOutcome> {
        match msg {
            BookingMsg::ToggleSeat(id) => Some(self.controller.toggle_seat(&id)),
            BookingMsg::UpdateTrip(field, value) => {
                self.controller.update_trip_field(field, value);
                None
            }
            BookingMsg::Confirm => {
                self.controller.confirm();
                None
            }
            BookingMsg::Close(reason) => {
                self.controller.close_modal(reason);
                None
            }
        }
    }
}

impl Reducible for BookingStore {
    type Action = BookingMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[hook]
pub fn use_booking_store() -> UseReducerHandle<BookingStore> {
    use_reducer(BookingStore::load)
}
