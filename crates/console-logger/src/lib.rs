//! Console Logger
//!
//! `log` backend that writes to the browser console and keeps the most recent
//! formatted lines in a circular buffer, so they can be dumped after the fact.
//! Off wasm32 only the buffer is filled.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("console logger already initialized")]
    AlreadyInitialized,
    #[error("failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Fixed-capacity buffer that drops the oldest line when full
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { lines: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    recent: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self { level, recent: Mutex::new(RingBuffer::new(capacity)) }
    }

    pub fn recent(&self) -> Vec<String> {
        self.recent.lock().map(|buf| buf.snapshot()).unwrap_or_default()
    }
}

pub fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("{:<5} [{}] {}", level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
        if let Ok(mut buf) = self.recent.lock() {
            buf.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the logger as the global `log` backend. Only the first call wins.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), InitError> {
    if LOGGER.get().is_some() {
        return Err(InitError::AlreadyInitialized);
    }
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recently logged lines, oldest first. Empty before `init`.
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buf = RingBuffer::new(3);
        for i in 0..5 {
            buf.push(format!("line {}", i));
        }
        assert_eq!(buf.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buf = RingBuffer::new(0);
        buf.push("a".into());
        buf.push("b".into());
        assert_eq!(buf.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        logger.log(&Record::builder().level(Level::Info).target("tracker").args(format_args!("tick")).build());
        logger.log(&Record::builder().level(Level::Error).target("weather").args(format_args!("down")).build());
        assert_eq!(logger.recent(), vec![format_record(Level::Error, "weather", "down")]);
    }

    #[test]
    fn test_init_twice_fails() {
        assert!(init(LevelFilter::Debug, 8).is_ok());
        log::info!(target: "test", "hello");
        assert!(matches!(init(LevelFilter::Debug, 8), Err(InitError::AlreadyInitialized)));
        assert!(recent().iter().any(|l| l.ends_with("[test] hello")));
    }
}
