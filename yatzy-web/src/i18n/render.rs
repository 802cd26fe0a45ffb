use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}");
            let ph2 = format!("{{{k}}}");
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::set_lang;
    use yatzy_game::{Category, Language};

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let mut args = BTreeMap::new();
        args.insert("name", "Tester");
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(resolved, "Hello, Tester! Tester!");
    }

    #[test]
    fn category_labels_follow_language() {
        set_lang(Language::De);
        assert_eq!(t(&Category::Sixes.i18n_key()), "Sechsen");
        set_lang(Language::Fr);
        assert_eq!(t(&Category::FourOfAKind.i18n_key()), "Carré");
        set_lang(Language::En);
        assert_eq!(t(&Category::OnePair.i18n_key()), "One Pair");
    }

    #[test]
    fn unknown_keys_echo_back() {
        set_lang(Language::En);
        assert_eq!(t("nope.missing"), "nope.missing");
    }

    #[test]
    fn multiplier_help_substitutes_face() {
        set_lang(Language::En);
        let mut args = BTreeMap::new();
        args.insert("face", "4");
        assert_eq!(
            tr("help.multiplier", Some(&args)),
            "Select a multiplier (value = 4 × multiplier)"
        );
    }
}
