//! Custom logging module.
//!
//! This module provides a `log` implementation that formats records and hands
//! them to a callback. The application points the callback at a shared buffer
//! that the render loop drains into the log pane.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

const CRATE_TARGET: &str = "restaurant_intake";

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that forwards formatted records to a callback
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    // Dependencies only get through at warn level and above.
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        metadata.target().starts_with(CRATE_TARGET) || metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Formatted log lines waiting to be moved into the log pane.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    /// Take every pending entry, oldest first.
    ///
    pub fn drain(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(_) => vec![],
        }
    }
}

/// Install the custom logger as the global logger and return the buffer it
/// writes to.
///
pub fn init(level: LevelFilter) -> AppResult<LogBuffer> {
    let buffer = LogBuffer::default();
    let logger = CustomLogger::new(level);
    let sink = buffer.clone();
    logger.set_log_callback(Box::new(move |entry| sink.push(entry)));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(level: Level, target: &'a str, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target(target).args(args).build()
    }

    #[test]
    fn format_log_includes_level_and_message() {
        let line = format_log(&record(
            Level::Warn,
            "restaurant_intake::api",
            format_args!("slow response"),
        ));
        assert!(line.contains(" WARN slow response"));
    }

    #[test]
    fn logger_forwards_to_callback() {
        let buffer = LogBuffer::default();
        let sink = buffer.clone();
        let logger = CustomLogger::new(LevelFilter::Debug);
        logger.set_log_callback(Box::new(move |entry| sink.push(entry)));

        logger.log(&record(
            Level::Info,
            "restaurant_intake::state",
            format_args!("draft reset"),
        ));
        logger.log(&record(
            Level::Trace,
            "restaurant_intake::state",
            format_args!("too verbose"),
        ));
        logger.log(&record(Level::Debug, "hyper::proto", format_args!("noise")));
        logger.log(&record(Level::Error, "hyper::proto", format_args!("broken pipe")));

        let entries = buffer.drain();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].ends_with("INFO draft reset"));
        assert!(entries[1].ends_with("ERROR broken pipe"));
        assert!(buffer.drain().is_empty());
    }
}
