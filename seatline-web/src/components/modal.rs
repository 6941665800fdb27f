use crate::a11y::focus_element;
#[cfg(target_arch = "wasm32")]
use crate::a11y::trap_focus_in;
use crate::dom::DocumentListener;
#[cfg(target_arch = "wasm32")]
use crate::dom::{console_error, js_error_message};
use seatline_core::CloseReason;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    /// Fired with the control that dismissed the dialog.
    pub on_close: Callback<CloseReason>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    /// Id placed on the backdrop element.
    #[prop_or_default]
    pub backdrop_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Escape closes the dialog and Tab stays inside it, wherever focus is on the page.
#[cfg(target_arch = "wasm32")]
fn listen_for_keys(
    container: NodeRef,
    on_close: Rc<RefCell<Callback<CloseReason>>>,
) -> Option<DocumentListener> {
    use wasm_bindgen::JsCast;

    DocumentListener::new("keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match key.key().as_str() {
            "Escape" => {
                key.prevent_default();
                let cb = on_close.borrow().clone();
                cb.emit(CloseReason::Escape);
            }
            "Tab" => {
                if let Some(el) = container.cast::<web_sys::HtmlElement>() {
                    trap_focus_in(&el, key);
                }
            }
            _ => {}
        }
    })
    .map_err(|err| console_error(&js_error_message(&err)))
    .ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn listen_for_keys(
    _: NodeRef,
    _: Rc<RefCell<Callback<CloseReason>>>,
) -> Option<DocumentListener> {
    None
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();
    let prev_open = use_mut_ref(|| props.open);
    let latest_on_close = use_mut_ref(|| props.on_close.clone());
    *latest_on_close.borrow_mut() = props.on_close.clone();

    {
        let container_ref = container_ref.clone();
        use_effect_with(
            (props.open, props.return_focus_id.clone()),
            move |(is_open, return_focus_id)| {
                let was_open = *prev_open.borrow();
                *prev_open.borrow_mut() = *is_open;
                let mut keyboard = None;
                if *is_open {
                    if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                        let _ = el.focus();
                    }
                    keyboard = listen_for_keys(container_ref, latest_on_close);
                } else if was_open && let Some(id) = return_focus_id.as_ref() {
                    focus_element(id);
                }
                move || drop(keyboard)
            },
        );
    }

    if !props.open {
        return Html::default();
    }

    let container_id = format!("modal-{}", *modal_id);
    let title_id = format!("modal-title-{}", *modal_id);
    let desc_id = props
        .description
        .as_ref()
        .map(|_| format!("modal-desc-{}", *modal_id));

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(CloseReason::Overlay))
    };
    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_button = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(CloseReason::CloseButton);
        })
    };

    html! {
        <div id={props.backdrop_id.clone()} class="modal-backdrop show" role="presentation" onclick={on_backdrop}>
            <div
                id={container_id}
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone().unwrap_or_default()}
                tabindex="-1"
                onclick={on_dialog_click}
                ref={container_ref}
            >
                <div class="modal__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label="Close dialog" onclick={on_close_button}>
                        {"×"}
                    </button>
                </div>
                { props.description.as_ref().map(|desc| {
                    let id = desc_id.clone().unwrap_or_default();
                    html! {
                        <p id={id} class="modal__description">{ desc.clone() }</p>
                    }
                }).unwrap_or_default() }
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(open: bool) -> Props {
        Props {
            open,
            title: AttrValue::from("Booking Confirmed!"),
            on_close: Callback::noop(),
            description: Some(AttrValue::from("Reserved")),
            return_focus_id: None,
            backdrop_id: Some(AttrValue::from("successModal")),
            children: Children::default(),
        }
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = block_on(LocalServerRenderer::<Modal>::with_props(props(false)).render());
        assert!(!html.contains("role=\"dialog\""), "{html}");
    }

    #[test]
    fn open_modal_wires_aria_attributes() {
        let html = block_on(LocalServerRenderer::<Modal>::with_props(props(true)).render());
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Booking Confirmed!"));
        assert!(html.contains("modal__description"));
        assert!(html.contains("Close dialog"));
        let backdrop = html.find("successModal").expect("backdrop id");
        assert!(backdrop < html.find("role=\"dialog\"").expect("dialog"));
    }
}
