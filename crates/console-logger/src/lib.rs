//! Console Logger
//!
//! `log` backend for the browser. Records are formatted as
//! `HH:MM:SS.mmm LEVEL target: message` and routed by level to the
//! matching `console.*` function. Off wasm32 the lines go to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger state (only the max level for now)
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            now_millis_of_day(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Calling it twice returns the `SetLoggerError` from the second attempt.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Format one log line. `millis_of_day` is wall-clock time since midnight.
pub fn format_line(millis_of_day: u64, level: Level, target: &str, message: &str) -> String {
    let millis = millis_of_day % 1000;
    let secs = millis_of_day / 1000;
    format!(
        "{:02}:{:02}:{:02}.{:03} {:<5} {}: {}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60,
        millis,
        level,
        target,
        message
    )
}

#[cfg(target_arch = "wasm32")]
fn now_millis_of_day() -> u64 {
    let date = js_sys::Date::new_0();
    date.get_hours() as u64 * 3_600_000
        + date.get_minutes() as u64 * 60_000
        + date.get_seconds() as u64 * 1000
        + date.get_milliseconds() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis_of_day() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_millis() % 86_400_000) as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        // 13:05:09.042
        let ms = 13 * 3_600_000 + 5 * 60_000 + 9 * 1000 + 42;
        let line = format_line(ms, Level::Warn, "brand_catalog_ui::api", "slow response");
        assert_eq!(line, "13:05:09.042 WARN  brand_catalog_ui::api: slow response");
    }

    #[test]
    fn test_format_line_wraps_past_midnight() {
        let line = format_line(86_400_000 + 1, Level::Info, "t", "m");
        assert!(line.starts_with("00:00:00.001 INFO "));
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).target("x").build();
        let error = Metadata::builder().level(Level::Error).target("x").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
