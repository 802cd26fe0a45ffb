#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
use chrono::{DateTime, NaiveDate, Utc};
#[cfg(target_arch = "wasm32")]
use js_sys::{Date, Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a number using the current locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = {
                let arr = js_sys::Array::new();
                arr.push(&JsValue::from_str(bundle.lang.code()));
                arr
            };
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| format!("{num:.1}"))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("{num:.1}")
    }
}

/// Calendar date of an archived game in the current locale.
#[must_use]
pub fn fmt_date(date: NaiveDate) -> String {
    let iso = date.format("%Y-%m-%d").to_string();
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let js = Date::new(&JsValue::from_str(&iso));
            js.to_locale_date_string(bundle.lang.code(), &JsValue::UNDEFINED)
                .as_string()
                .unwrap_or(iso)
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        iso
    }
}

/// Local wall-clock time of an archived game.
#[must_use]
pub fn fmt_time(timestamp: DateTime<Utc>) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let iso = timestamp.to_rfc3339();
        with_bundle(|bundle| {
            let js = Date::new(&JsValue::from_str(&iso));
            js.to_locale_time_string(bundle.lang.code())
                .as_string()
                .unwrap_or_else(|| timestamp.format("%H:%M").to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        timestamp.format("%H:%M").to_string()
    }
}
