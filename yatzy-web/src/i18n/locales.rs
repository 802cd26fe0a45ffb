use serde_json::Value;
use yatzy_game::Language;

const LOCALE_TABLE: &[(Language, &str)] = &[
    (Language::En, include_str!("../../i18n/en.json")),
    (Language::De, include_str!("../../i18n/de.json")),
    (Language::Es, include_str!("../../i18n/es.json")),
    (Language::Fr, include_str!("../../i18n/fr.json")),
    (Language::It, include_str!("../../i18n/it.json")),
];

/// Languages offered in the language picker, in menu order.
#[must_use]
pub const fn languages() -> &'static [Language] {
    &Language::ALL
}

pub fn load_translations(lang: Language) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_bundle() {
        for lang in languages() {
            let value = load_translations(*lang).expect("bundle parses");
            assert!(value.get("category").is_some(), "{lang} lacks categories");
        }
    }
}
