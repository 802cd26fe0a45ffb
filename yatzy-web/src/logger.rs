//! `log` backend that writes to the browser console.
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger {
    level: Level,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        #[cfg(target_arch = "wasm32")]
        {
            let value = wasm_bindgen::JsValue::from(line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                Level::Info => web_sys::console::info_1(&value),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record<'_>) -> String {
    format!(
        "[{} {}] {}",
        record.level(),
        record.target(),
        record.args()
    )
}

static LOGGER: ConsoleLogger = ConsoleLogger { level: Level::Info };

/// Install the console logger. Only the first call in a process takes effect.
///
/// # Errors
/// Returns an error if another logger was installed first.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_carry_level_and_target() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("yatzy_web::audio")
                .args(format_args!("playback blocked"))
                .build(),
        );
        assert_eq!(line, "[WARN yatzy_web::audio] playback blocked");
    }

    #[test]
    fn debug_is_filtered() {
        let meta = Metadata::builder().level(Level::Debug).build();
        assert!(!LOGGER.enabled(&meta));
        let meta = Metadata::builder().level(Level::Error).build();
        assert!(LOGGER.enabled(&meta));
    }
}
