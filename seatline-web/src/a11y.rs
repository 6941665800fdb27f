// Accessibility helpers
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "booking-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #22c55e;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Move keyboard focus to the element with `id`, if it exists and is focusable.
pub fn focus_element(id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

const FOCUSABLE: &str = "button:not([disabled]), [href], input:not([disabled]), \
select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

fn is_same(active: Option<&Element>, target: &Node) -> bool {
    active.is_some_and(|el| el.is_same_node(Some(target)))
}

/// Keep Tab and Shift+Tab cycling through the focusable children of
/// `container`. Focus that has already escaped is pulled back in.
pub fn trap_focus_in(container: &HtmlElement, event: &KeyboardEvent) {
    let focusable: Vec<HtmlElement> = container
        .query_selector_all(FOCUSABLE)
        .map(|nodes| {
            (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                .collect()
        })
        .unwrap_or_default();
    let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
        event.prevent_default();
        let _ = container.focus();
        return;
    };

    let active = container.owner_document().and_then(|doc| doc.active_element());
    let inside = active
        .as_ref()
        .is_some_and(|el| container.contains(Some(el.unchecked_ref::<Node>())));
    let backwards = event.shift_key();

    let target = if !inside {
        Some(if backwards { last } else { first })
    } else if backwards && (is_same(active.as_ref(), first) || is_same(active.as_ref(), container)) {
        Some(last)
    } else if !backwards && is_same(active.as_ref(), last) {
        Some(first)
    } else {
        None
    };

    if let Some(target) = target {
        event.prevent_default();
        let _ = target.focus();
    }
}
