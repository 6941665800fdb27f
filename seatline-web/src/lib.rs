#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod data;
pub mod dom;
pub mod i18n;
pub mod notify;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let lang = crate::i18n::current_lang();
    if let Some(meta) = crate::i18n::locales().iter().find(|meta| meta.code == lang)
        && let Some(root) = crate::dom::document().document_element()
    {
        let _ = root.set_attribute("lang", meta.tag);
    }
    yew::Renderer::<app::App>::new().render();
}
