mod bundle;
mod locales;
mod render;

pub use bundle::current_lang;
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
