use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    /// BCP 47 tag used for `<html lang>` and date formatting.
    pub tag: &'static str,
}

/// The page ships a single fixed locale.
pub const LOCALE_META: &[LocaleMeta] = &[LocaleMeta {
    code: "en",
    tag: "en-US",
}];

const LOCALE_TABLE: &[(&str, &str)] = &[("en", include_str!("../../i18n/en.json"))];

/// Supported locales.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}
