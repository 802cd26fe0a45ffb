use crate::i18n::locales::load_translations;
use serde_json::Value;
use std::cell::RefCell;
use yatzy_game::Language;

pub struct I18nBundle {
    pub lang: Language,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: Language) -> Option<I18nBundle> {
    let fallback = load_translations(Language::En)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang,
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback =
        load_translations(Language::En).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: Language::En,
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> Language {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        yatzy_game::Persistence::new(crate::storage::BrowserStorage).load_language()
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        Language::default()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(saved_lang()).unwrap_or_else(fallback_bundle)
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Switch the active language
///
/// Updates the `<html lang>` attribute and persists the choice under the
/// language preference key.
pub fn set_lang(lang: Language) {
    if let Some(bundle) = build_bundle(lang) {
        replace_bundle(bundle);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
                let _ = el.set_attribute("lang", lang.code());
            }
            let persistence = yatzy_game::Persistence::new(crate::storage::BrowserStorage);
            if let Err(err) = persistence.save_language(lang) {
                log::warn!("Failed to save language preference: {err}");
            }
        }
    }
}

/// Currently active language.
#[must_use]
pub fn current_lang() -> Language {
    with_bundle(|bundle| bundle.lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle(Language::It).expect("bundle should load");
        assert_eq!(bundle.lang, Language::It);
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
    }

    #[test]
    fn fallback_bundle_defaults_to_en() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, Language::En);
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn set_lang_switches_current() {
        set_lang(Language::Fr);
        assert_eq!(current_lang(), Language::Fr);
        set_lang(Language::De);
        assert_eq!(current_lang(), Language::De);
    }
}
