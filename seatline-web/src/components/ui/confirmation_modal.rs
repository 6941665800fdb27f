use crate::components::modal::Modal;
use crate::i18n::t;
use seatline_core::{CloseReason, ConfirmationSnapshot};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    /// Present while the modal is open.
    pub snapshot: Option<ConfirmationSnapshot>,
    pub on_close: Callback<CloseReason>,
}

#[function_component(ConfirmationModal)]
pub fn confirmation_modal(p: &Props) -> Html {
    let on_continue = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(CloseReason::Continue))
    };
    let (seats, total) = p
        .snapshot
        .as_ref()
        .map(|snap| (snap.seats_text.clone(), snap.total_text.clone()))
        .unwrap_or_default();

    html! {
        <Modal
            open={p.snapshot.is_some()}
            title={t("modal.title")}
            description={Some(AttrValue::from(t("modal.description")))}
            return_focus_id={Some(AttrValue::from("confirmBtn"))}
            backdrop_id={Some(AttrValue::from("successModal"))}
            on_close={p.on_close.clone()}
        >
            <div class="modal-details">
                <p id="modalSeats">{ seats }</p>
                <p id="modalTotal">{ total }</p>
            </div>
            <button id="continueBtn" type="button" class="btn" onclick={on_continue}>
                { t("modal.continue") }
            </button>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_frozen_snapshot_text() {
        let props = Props {
            snapshot: Some(ConfirmationSnapshot {
                seats: vec!["A2".parse().unwrap(), "B1".parse().unwrap()],
                total_price: 1_120,
                seats_text: "Seats: A2, B1".into(),
                total_text: "Total: ৳1120".into(),
            }),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ConfirmationModal>::with_props(props).render());
        assert!(html.contains("Booking Confirmed!"));
        assert!(html.contains("Seats: A2, B1"));
        assert!(html.contains("Total: ৳1120"));
        assert!(html.contains("continueBtn"));
        let backdrop = html.find("successModal").expect("backdrop id");
        assert!(backdrop < html.find("modal-details").expect("details"));
    }

    #[test]
    fn hidden_without_snapshot() {
        let props = Props {
            snapshot: None,
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ConfirmationModal>::with_props(props).render());
        assert!(!html.contains("modalSeats"));
    }
}
