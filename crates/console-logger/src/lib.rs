//! Console Logger
//!
//! `log` backend for the browser. Every record becomes one timestamped line
//! on `console.error`, `console.warn` or `console.log` depending on level.

use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger routing records to the browser console
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(Utc::now(), record.level(), record.target(), &record.args().to_string());
        let value = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger.
///
/// Calling this again only changes the max level.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    if LOGGER.get().is_none() {
        log::set_logger(LOGGER.get_or_init(|| ConsoleLogger))?;
    }
    log::set_max_level(level);
    Ok(())
}

/// Render one console line: `2025-08-20T10:00:00.000Z INFO  target: message`
pub fn format_line(now: DateTime<Utc>, level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {:<5} {}: {}",
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        target,
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(iso: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(iso).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_line() {
        let line = format_line(at("2025-08-20T10:00:00Z"), Level::Info, "inventory_ui", "[APP] started");
        assert_eq!(line, "2025-08-20T10:00:00.000Z INFO  inventory_ui: [APP] started");
    }

    #[test]
    fn test_format_line_pads_level() {
        let line = format_line(at("2025-01-02T03:04:05Z"), Level::Error, "api", "boom");
        assert!(line.contains(" ERROR api: boom"));
        let line = format_line(at("2025-01-02T03:04:05Z"), Level::Warn, "api", "slow");
        assert!(line.contains(" WARN  api: slow"));
    }
}
