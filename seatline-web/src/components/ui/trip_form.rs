use crate::data::LOCATIONS;
use crate::i18n::t;
use seatline_core::{TripDetails, TripField};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub trip: TripDetails,
    pub on_change: Callback<(TripField, String)>,
    /// Validation message shown under the form; booking is not blocked by it.
    #[prop_or_default]
    pub warning: Option<AttrValue>,
}

fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(select.value());
    }
    target
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(web_sys::HtmlInputElement::value)
}

fn change_handler(field: TripField, cb: &Callback<(TripField, String)>) -> Callback<Event> {
    let cb = cb.clone();
    Callback::from(move |e: Event| {
        if let Some(value) = event_value(&e) {
            cb.emit((field, value));
        }
    })
}

fn location_select(
    field: TripField,
    label_key: &str,
    current: &str,
    cb: &Callback<(TripField, String)>,
) -> Html {
    let id = field.input_id();
    html! {
        <div class="form-group">
            <label for={id}>{ t(label_key) }</label>
            <select {id} onchange={change_handler(field, cb)}>
                { for LOCATIONS.iter().map(|loc| html! {
                    <option value={*loc} selected={*loc == current}>{ *loc }</option>
                }) }
            </select>
        </div>
    }
}

#[function_component(TripForm)]
pub fn trip_form(p: &Props) -> Html {
    let date_id = TripField::Date.input_id();
    let time_id = TripField::Time.input_id();
    html! {
        <form
            class="trip-form"
            aria-labelledby="trip-title"
            onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}
        >
            <h2 id="trip-title">{ t("form.title") }</h2>
            { location_select(TripField::Origin, "form.from", &p.trip.origin, &p.on_change) }
            { location_select(TripField::Destination, "form.to", &p.trip.destination, &p.on_change) }
            <div class="form-group">
                <label for={date_id}>{ t("form.date") }</label>
                <input id={date_id} type="date" value={p.trip.date.clone()}
                    onchange={change_handler(TripField::Date, &p.on_change)} />
            </div>
            <div class="form-group">
                <label for={time_id}>{ t("form.time") }</label>
                <input id={time_id} type="time" value={p.trip.time.clone()}
                    onchange={change_handler(TripField::Time, &p.on_change)} />
            </div>
            if let Some(warning) = p.warning.clone() {
                <p class="form-warning" role="alert">{ warning }</p>
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn form_reflects_trip_values() {
        let props = Props {
            trip: TripDetails {
                origin: "Sylhet".into(),
                destination: "Khulna".into(),
                date: "2025-01-05".into(),
                time: "14:05".into(),
            },
            on_change: Callback::noop(),
            warning: None,
        };
        let html = block_on(LocalServerRenderer::<TripForm>::with_props(props).render());
        assert!(!html.contains("form-warning"));
        for id in ["fromLocation", "toLocation", "travelDate", "travelTime"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "{id} missing: {html}");
        }
        assert!(html.contains("2025-01-05"));
        assert!(html.contains("14:05"));
        let cox = html.matches("Cox&#x27;s Bazar").count() + html.matches("Cox's Bazar").count();
        assert_eq!(cox, 4);
    }

    #[test]
    fn form_shows_validation_warning() {
        let props = Props {
            trip: TripDetails::default(),
            on_change: Callback::noop(),
            warning: Some(AttrValue::from("Origin and destination cannot be the same")),
        };
        let html = block_on(LocalServerRenderer::<TripForm>::with_props(props).render());
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("cannot be the same"));
    }
}
