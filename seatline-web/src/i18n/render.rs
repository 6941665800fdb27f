use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (name, replacement) in args_map {
            text = text.replace(&format!("{{{name}}}"), replacement);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key).and_then(|v| render_value(v, args))
    })
}

/// Translate a key without variable substitution.
/// Unknown keys render as the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution.
///
/// Variables in the translated string use the `{name}` form.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_replaces_every_placeholder() {
        let value = Value::String("Seat {seat}, {status}; again {seat}".into());
        let mut args = BTreeMap::new();
        args.insert("seat", "C3");
        args.insert("status", "booked");
        assert_eq!(
            render_value(&value, Some(&args)).unwrap(),
            "Seat C3, booked; again C3"
        );
        assert_eq!(render_value(&Value::Null, None), None);
    }

    #[test]
    fn resolves_nested_keys_from_bundle() {
        assert_eq!(t("summary.title"), "Booking Summary");
        assert_eq!(t("missing.key"), "missing.key");
        let mut args = BTreeMap::new();
        args.insert("max", "4");
        assert_eq!(tr("seats.hint", Some(&args)), "You can select up to 4 seats.");
    }
}
