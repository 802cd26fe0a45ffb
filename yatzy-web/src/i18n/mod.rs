mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_date, fmt_number, fmt_time};
pub use locales::languages;
pub use render::{t, tr};
