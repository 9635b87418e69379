//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger, and the global dispatch.
//! Tests touching the global logger are `#[serial]`.

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

// ============================================================================
// TEST HELPERS
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Other tests may log concurrently, keep only our source.
fn captured_from(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "parallax::TrackingFeed".to_string(),
        message: "tracker started".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_format_plain_without_location() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Info, None, None));
    assert!(line.contains("[INFO ]"));
    assert!(line.contains("[parallax::TrackingFeed]"));
    assert!(line.ends_with("tracker started"));
}

#[test]
fn test_format_plain_with_location() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Error, Some("feed.rs"), Some(42)));
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(feed.rs:42)"));
}

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Just verify it doesn't panic, with and without location
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}

// ============================================================================
// GLOBAL DISPATCH TESTS
// ============================================================================

#[test]
#[serial]
fn test_macros_reach_custom_logger() {
    let (logger, entries) = CaptureLogger::new();
    log::set_logger(logger);
    log::set_min_severity(LogSeverity::Trace);

    crate::pw_info!("parallax::Test", "value {}", 3);
    crate::pw_warn!("parallax::Test", "careful");
    crate::pw_error!("parallax::Test", "broken: {}", "yes");

    let captured = captured_from(&entries, "parallax::Test");
    log::reset_logger();
    log::set_min_severity(LogSeverity::Debug);

    assert_eq!(captured.len(), 3);
    assert_eq!(captured[0].message, "value 3");
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert!(captured[0].file.is_none());
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert_eq!(captured[2].message, "broken: yes");
    assert!(captured[2].file.is_some());
    assert!(captured[2].line.is_some());
}

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let (logger, entries) = CaptureLogger::new();
    log::set_logger(logger);
    log::set_min_severity(LogSeverity::Warn);

    crate::pw_trace!("parallax::Test", "dropped");
    crate::pw_debug!("parallax::Test", "dropped");
    crate::pw_info!("parallax::Test", "dropped");
    crate::pw_warn!("parallax::Test", "kept");

    let captured = captured_from(&entries, "parallax::Test");
    assert_eq!(log::min_severity(), LogSeverity::Warn);
    log::reset_logger();
    log::set_min_severity(LogSeverity::Debug);

    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "kept");
}
