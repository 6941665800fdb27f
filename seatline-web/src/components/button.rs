use seatline_core::LoadingButton;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<()>,
}

/// Button that shows "Loading..." and stays disabled for a fixed second after each click.
#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let state = {
        let label = p.label.to_string();
        use_state(move || LoadingButton::new(label))
    };

    let onclick = {
        let state = state.clone();
        let cb = p.onclick.clone();
        Callback::from(move |_: MouseEvent| {
            if state.is_disabled() {
                return;
            }
            let mut loading = (*state).clone();
            loading.begin();
            state.set(loading.clone());
            cb.emit(());

            #[cfg(target_arch = "wasm32")]
            {
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let delay = i32::try_from(seatline_core::constants::LOADING_RESET_MS)
                        .unwrap_or(i32::MAX);
                    if let Err(err) = crate::dom::sleep_ms(delay).await {
                        crate::dom::console_error(&crate::dom::js_error_message(&err));
                    }
                    loading.finish();
                    state.set(loading);
                });
            }
        })
    };

    html! {
        <button
            type="button"
            class={classes!("btn", p.class.clone())}
            disabled={state.is_disabled()}
            aria-busy={state.is_loading().to_string()}
            {onclick}
        >
            { state.label().to_string() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn button_renders_label() {
        let props = Props {
            label: AttrValue::from("Search Buses"),
            class: Classes::new(),
            onclick: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("Search Buses"));
        assert!(html.contains("aria-busy=\"false\""));
        assert!(!html.contains("disabled"));
    }
}
