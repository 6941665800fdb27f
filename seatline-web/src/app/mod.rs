use crate::a11y::{STATUS_REGION_ID, visible_focus_css};
use crate::components::button::Button;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::confirmation_modal::ConfirmationModal;
use crate::components::ui::seat_grid::SeatGridView;
use crate::components::ui::stats_strip::StatsStrip;
use crate::components::ui::summary_panel::SummaryPanel;
use crate::components::ui::trip_form::TripForm;
use crate::i18n::t;
use seatline_core::{CloseReason, SeatId, TripField};
use yew::prelude::*;

pub mod state;

pub use state::{BookingMsg, BookingStore, WebController, use_booking_store};

fn scroll_to_booking() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().get_element_by_id("book") {
            el.scroll_into_view();
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_booking_store();
    let controller = store.controller();

    let on_toggle = {
        let store = store.clone();
        Callback::from(move |id: SeatId| store.dispatch(BookingMsg::ToggleSeat(id)))
    };
    let on_trip_change = {
        let store = store.clone();
        Callback::from(move |(field, value): (TripField, String)| {
            store.dispatch(BookingMsg::UpdateTrip(field, value));
        })
    };
    let on_confirm = {
        let store = store.clone();
        Callback::from(move |()| store.dispatch(BookingMsg::Confirm))
    };
    let on_close = {
        let store = store.clone();
        Callback::from(move |reason: CloseReason| store.dispatch(BookingMsg::Close(reason)))
    };
    let on_search = Callback::from(|()| scroll_to_booking());
    let trip_warning = controller
        .validate_trip(chrono::Local::now().date_naive())
        .err()
        .map(|err| AttrValue::from(err.to_string()));

    html! {
        <>
            <style>{ visible_focus_css() }</style>
            <Header />
            <main id="main">
                <section id="home" class="hero">
                    <h1>{ t("hero.title") }</h1>
                    <p>{ t("hero.subtitle") }</p>
                    <Button label={t("hero.search")} class={classes!("search-btn")} onclick={on_search} />
                </section>
                <StatsStrip />
                <section id="book" class="booking">
                    <TripForm
                        trip={controller.trip().clone()}
                        on_change={on_trip_change}
                        warning={trip_warning}
                    />
                    <div class="booking-layout">
                        <SeatGridView
                            grid={controller.grid().clone()}
                            max_seats={controller.selection().capacity()}
                            {on_toggle}
                        />
                        <SummaryPanel summary={controller.summary().clone()} {on_confirm} />
                    </div>
                </section>
                <section id="offers" class="offers" aria-labelledby="offers-title">
                    <h2 id="offers-title">{ t("offers.title") }</h2>
                    <div class="offers-grid">
                        { for ["offers.weekend", "offers.student", "offers.family"].iter().map(|key| html! {
                            <article class="offer-card"><p>{ t(key) }</p></article>
                        }) }
                    </div>
                </section>
            </main>
            <Footer />
            <ConfirmationModal snapshot={controller.modal().snapshot().cloned()} {on_close} />
            <div id={STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
        </>
    }
}
