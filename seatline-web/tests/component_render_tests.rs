use futures::executor::block_on;
use seatline_core::{CloseReason, TripField};
use seatline_web::app::{App, BookingMsg, BookingStore};
use seatline_web::components::footer::Footer;
use seatline_web::components::ui::confirmation_modal::{self, ConfirmationModal};
use seatline_web::components::ui::summary_panel::{self, SummaryPanel};
use yew::{Callback, LocalServerRenderer};

#[test]
fn app_renders_initial_booking_page() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("seatsContainer"));
    assert_eq!(html.matches("data-seat=").count(), 40);
    assert!(html.contains("Select Seats First"));
    assert!(html.contains("Dhaka → Chittagong"));
    assert!(html.contains("Jan 15, 2025"), "formatted default date: {html}");
    assert!(html.contains("8:00 AM"));
    assert!(html.contains("booking-status"));
    assert!(html.contains("aria-live=\"polite\""));
    assert!(!html.contains("role=\"dialog\""));
}

#[test]
fn footer_renders_copy() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains("Seatline"));
}

#[test]
fn store_driven_views_follow_the_flow() {
    let mut store = BookingStore::load();
    store.apply(BookingMsg::UpdateTrip(TripField::Date, "2025-01-05".into()));
    store.apply(BookingMsg::UpdateTrip(TripField::Time, "00:30".into()));
    for raw in ["A2", "B1", "C3"] {
        store.apply(BookingMsg::ToggleSeat(raw.parse().unwrap()));
    }

    let summary_html = block_on(
        LocalServerRenderer::<SummaryPanel>::with_props(summary_panel::Props {
            summary: store.controller().summary().clone(),
            on_confirm: Callback::noop(),
        })
        .render(),
    );
    assert!(summary_html.contains("Jan 5, 2025"));
    assert!(summary_html.contains("12:30 AM"));
    assert!(summary_html.contains("A2, B1, C3"));
    assert!(summary_html.contains("৳1680"));

    store.apply(BookingMsg::Confirm);
    let modal_html = block_on(
        LocalServerRenderer::<ConfirmationModal>::with_props(confirmation_modal::Props {
            snapshot: store.controller().modal().snapshot().cloned(),
            on_close: Callback::noop(),
        })
        .render(),
    );
    assert!(modal_html.contains("Seats: A2, B1, C3"));
    assert!(modal_html.contains("Total: ৳1680"));

    store.apply(BookingMsg::Close(CloseReason::Escape));
    assert!(store.controller().modal().snapshot().is_none());
    assert_eq!(store.controller().summary().seat_list, "None");
}
