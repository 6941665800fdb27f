use crate::i18n::t;
use seatline_core::Summary;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub summary: Summary,
    pub on_confirm: Callback<()>,
}

#[function_component(SummaryPanel)]
pub fn summary_panel(p: &Props) -> Html {
    let s = &p.summary;
    let on_confirm = {
        let cb = p.on_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let action_style = format!("background: {}", s.action.style.background());

    html! {
        <aside class="booking-summary" aria-labelledby="summary-title">
            <h2 id="summary-title">{ t("summary.title") }</h2>
            <dl>
                <div class="summary-item">
                    <dt>{ t("summary.route") }</dt>
                    <dd id="routeInfo">{ s.route.clone() }</dd>
                </div>
                <div class="summary-item">
                    <dt>{ t("summary.date") }</dt>
                    <dd id="dateInfo">{ s.date.clone() }</dd>
                </div>
                <div class="summary-item">
                    <dt>{ t("summary.time") }</dt>
                    <dd id="timeInfo">{ s.time.clone() }</dd>
                </div>
                <div class="summary-item">
                    <dt>{ t("summary.seats") }</dt>
                    <dd id="selectedSeats">{ s.seat_list.clone() }</dd>
                </div>
            </dl>
            if let Some(label) = s.seat_count_label.clone() {
                <p id="seatCount" class="seat-count">{ label }</p>
            }
            <div class="summary-total">
                <span>{ t("summary.total") }</span>
                <strong id="totalPrice">{ s.total_text.clone() }</strong>
            </div>
            <button
                id="confirmBtn"
                type="button"
                class="btn confirm-btn"
                disabled={!s.action.enabled}
                style={action_style}
                onclick={on_confirm}
            >
                { s.action.label }
            </button>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use seatline_core::{Pricing, SelectionState, TripDetails};
    use yew::LocalServerRenderer;

    fn render(seats: &[&str]) -> String {
        let mut selection = SelectionState::new(4);
        for raw in seats {
            selection.push(raw.parse().unwrap());
        }
        let summary = Summary::compute(&selection, &TripDetails::default(), &Pricing::default());
        let props = Props {
            summary,
            on_confirm: Callback::noop(),
        };
        block_on(LocalServerRenderer::<SummaryPanel>::with_props(props).render())
    }

    #[test]
    fn empty_summary_shows_placeholder_action() {
        let html = render(&[]);
        assert!(html.contains("Select Seats First"));
        assert!(html.contains("disabled"));
        assert!(html.contains("#d1d5db"));
        assert!(html.contains("৳0"));
        assert!(!html.contains("seatCount"));
    }

    #[test]
    fn selected_seats_enable_confirmation() {
        let html = render(&["C3", "A2"]);
        assert!(html.contains("C3, A2"));
        assert!(html.contains("2 seats selected"));
        assert!(html.contains("৳1120"));
        assert!(html.contains("Confirm Booking"));
        assert!(html.contains("#22c55e"));
        assert!(!html.contains("disabled"));
        assert!(html.contains("Dhaka → Chittagong"));
    }
}
