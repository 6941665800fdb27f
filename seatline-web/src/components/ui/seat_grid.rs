use crate::i18n::{t, tr};
use seatline_core::{Seat, SeatGrid, SeatId, SeatStatus};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub grid: SeatGrid,
    pub max_seats: usize,
    pub on_toggle: Callback<SeatId>,
}

fn status_key(status: SeatStatus) -> &'static str {
    match status {
        SeatStatus::Available => "seats.status.available",
        SeatStatus::Selected => "seats.status.selected",
        SeatStatus::Booked => "seats.status.booked",
    }
}

fn seat_button(seat: &Seat, on_toggle: &Callback<SeatId>) -> Html {
    let id = seat.id;
    let label = id.to_string();
    let status = seat.status();
    let status_text = t(status_key(status));
    let mut vars = BTreeMap::new();
    vars.insert("seat", label.as_str());
    vars.insert("status", status_text.as_str());
    let aria_label = tr("seats.seat_label", Some(&vars));

    // Booked seats get no handler at all.
    let onclick = seat.is_interactive().then(|| {
        let cb = on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id))
    });

    html! {
        <button
            type="button"
            class={classes!("seat", status.class_name())}
            data-seat={label.clone()}
            disabled={seat.booked}
            aria-pressed={seat.selected.to_string()}
            aria-label={aria_label}
            {onclick}
        >
            { label }
        </button>
    }
}

#[function_component(SeatGridView)]
pub fn seat_grid_view(p: &Props) -> Html {
    let max = p.max_seats.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("max", max.as_str());
    let hint = tr("seats.hint", Some(&vars));

    let rows = p.grid.rows().iter().map(|row| {
        html! {
            <div class="seat-row" data-row={row.letter.to_string()}>
                <span class="row-label" aria-hidden="true">{ row.letter.to_string() }</span>
                <div class="seat-group">
                    { for row.left.iter().map(|seat| seat_button(seat, &p.on_toggle)) }
                </div>
                <div class="aisle" aria-hidden="true"></div>
                <div class="seat-group">
                    { for row.right.iter().map(|seat| seat_button(seat, &p.on_toggle)) }
                </div>
            </div>
        }
    });

    html! {
        <section class="seat-selection" aria-labelledby="seat-title">
            <h2 id="seat-title">{ t("seats.title") }</h2>
            <p class="seat-hint">{ hint }</p>
            <div class="bus-layout">
                <div class="driver-row" aria-hidden="true">{ t("seats.driver") }</div>
                <div id="seatsContainer" class="seats" role="group" aria-label={t("seats.title")}>
                    { for rows }
                </div>
            </div>
            <ul class="seat-legend">
                <li><span class="seat legend-swatch"></span>{ t("seats.legend.available") }</li>
                <li><span class="seat selected legend-swatch"></span>{ t("seats.legend.selected") }</li>
                <li><span class="seat booked legend-swatch"></span>{ t("seats.legend.booked") }</li>
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use seatline_core::{BookingConfig, FixedBookedSeats, SelectionState};
    use yew::LocalServerRenderer;

    fn grid_with(selected: &[&str]) -> SeatGrid {
        let config = BookingConfig::default();
        let booked = FixedBookedSeats::from_config(&config).unwrap();
        let mut grid = SeatGrid::from_source(config.layout, &booked);
        let mut selection = SelectionState::new(config.max_seats);
        for raw in selected {
            selection.push(raw.parse().unwrap());
        }
        grid.sync_selection(&selection);
        grid
    }

    fn render(grid: SeatGrid) -> String {
        let props = Props {
            grid,
            max_seats: 4,
            on_toggle: Callback::noop(),
        };
        block_on(LocalServerRenderer::<SeatGridView>::with_props(props).render())
    }

    #[test]
    fn renders_every_seat_with_status_classes() {
        let html = render(grid_with(&["A2"]));
        assert_eq!(html.matches("data-seat=").count(), 40);
        assert!(html.contains("Seat A1, booked"), "{html}");
        assert!(html.contains("Seat A2, selected"));
        assert!(html.contains("Seat J4, available"));
        assert!(html.contains("class=\"seat selected\""));
        assert!(html.contains("up to 4 seats"));
    }

    #[test]
    fn booked_seats_are_disabled() {
        let html = render(grid_with(&[]));
        assert_eq!(html.matches("class=\"seat booked\"").count(), 7);
        assert_eq!(html.matches("disabled").count(), 7);
    }
}
