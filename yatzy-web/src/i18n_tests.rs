//! i18n coverage tests to ensure all required keys are present

use serde_json::Value;
use std::collections::BTreeSet;
use yatzy_game::{Category, Language};

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

fn find_nested_string(json: &Value, key: &str) -> bool {
    key.split('.')
        .try_fold(json, |current, part| current.get(part))
        .is_some_and(Value::is_string)
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn every_language_ships_a_bundle() {
    let locales = locale_codes();
    for lang in Language::ALL {
        assert!(
            locales.iter().any(|code| code == lang.code()),
            "no bundle for {}",
            lang.code()
        );
    }
}

#[test]
fn locales_have_matching_keys() {
    let base_json = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let json = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in &base_keys {
            assert!(keys.contains(key), "Missing key '{key}' in locale '{locale}'");
        }
        for key in &keys {
            assert!(base_keys.contains(key), "Stray key '{key}' in locale '{locale}'");
        }
    }
}

#[test]
fn every_category_has_a_label() {
    for locale in locale_codes() {
        let json = load_locale(&locale);
        for category in Category::ALL {
            let key = category.i18n_key();
            assert!(
                find_nested_string(&json, &key),
                "Missing '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn placeholders_survive_translation() {
    let expectations = [
        ("help.multiplier", &["{face}"][..]),
        ("help.fixed", &["{value}"][..]),
        ("help.illegal_value", &["{value}", "{category}"][..]),
    ];
    for locale in locale_codes() {
        let json = load_locale(&locale);
        for (key, placeholders) in expectations {
            let text = key
                .split('.')
                .try_fold(&json, |current, part| current.get(part))
                .and_then(Value::as_str)
                .unwrap_or_else(|| panic!("Missing '{key}' in locale '{locale}'"));
            for placeholder in placeholders {
                assert!(
                    text.contains(placeholder),
                    "'{key}' in locale '{locale}' lost {placeholder}"
                );
            }
        }
    }
}
