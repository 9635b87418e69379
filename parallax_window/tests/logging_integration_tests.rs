//! Integration tests for session logging
//!
//! A capture logger replaces the default one; tests are `#[serial]` since
//! the logger is process-wide.
//!
//! Run with: cargo test --test logging_integration_tests

mod test_utils;

use std::sync::{Arc, Mutex};
use parallax_window::camera::FirstPersonNavigator;
use parallax_window::log::{self, LogEntry, LogSeverity, Logger};
use parallax_window::{run, AppConfig};
use serial_test::serial;
use test_utils::{HeadlessSubstrate, RecordingTracker};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn has(entries: &[LogEntry], severity: LogSeverity, source: &str, needle: &str) -> bool {
    entries
        .iter()
        .any(|e| e.severity == severity && e.source == source && e.message.contains(needle))
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_missing_device_is_logged_as_warning() {
    let (logger, entries) = TestLogger::new();
    log::set_logger(logger);

    let (tracker, _) = RecordingTracker::without_device();
    let mut substrate = HeadlessSubstrate::new(2);
    run(&AppConfig::default(), &mut substrate, tracker, &mut FirstPersonNavigator::default()).unwrap();

    let entries = entries.lock().unwrap().clone();
    log::reset_logger();

    assert!(has(&entries, LogSeverity::Warn, "parallax::TrackingFeed", "continuing without parallax"));
    assert!(has(&entries, LogSeverity::Info, "parallax::TrackingFeed", "Tracking stopped"));
}

#[test]
#[serial]
fn test_integration_calibration_is_logged() {
    let (logger, entries) = TestLogger::new();
    log::set_logger(logger);

    let (tracker, _) = RecordingTracker::new(Vec::new());
    let mut substrate = HeadlessSubstrate::new(3).calibrating_on(vec![1]);
    run(&AppConfig::default(), &mut substrate, tracker, &mut FirstPersonNavigator::default()).unwrap();

    let entries = entries.lock().unwrap().clone();
    log::reset_logger();

    assert!(has(&entries, LogSeverity::Info, "parallax::TrackingFeed", "Tracking started on device 0"));
    assert!(has(&entries, LogSeverity::Info, "parallax::TrackingFeed", "Calibration requested"));
    assert!(has(&entries, LogSeverity::Info, "parallax::App", "Closed after 3 frames"));
}

#[test]
#[serial]
fn test_integration_min_severity_filters_debug() {
    let (logger, entries) = TestLogger::new();
    log::set_logger(logger);
    log::set_min_severity(LogSeverity::Info);

    let (tracker, _) = RecordingTracker::new(Vec::new());
    run(&AppConfig::default(), &mut HeadlessSubstrate::new(1), tracker, &mut FirstPersonNavigator::default())
        .unwrap();

    let entries = entries.lock().unwrap().clone();
    log::set_min_severity(LogSeverity::Debug);
    log::reset_logger();

    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e.severity >= LogSeverity::Info));
}
