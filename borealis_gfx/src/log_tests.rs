//! Unit tests for log.rs
//!
//! Tests severity ordering, entry construction, and logger dispatch with a
//! capturing logger. Global-logger mutation happens in a single test to keep
//! the parallel test runner away from races on the shared logger slot.

use crate::log::{dispatch, DefaultLogger, LogEntry, LogSeverity, Logger};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// Test logger that records every entry it receives
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// SEVERITY TESTS
// ============================================================================

#[test]
fn test_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_severity_copy_and_eq() {
    let a = LogSeverity::Info;
    let b = a;
    assert_eq!(a, b);
}

// ============================================================================
// ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_clone_preserves_fields() {
    let entry = LogEntry {
        severity: LogSeverity::Warn,
        timestamp: SystemTime::now(),
        source: "borealis::test".to_string(),
        message: "something looks off".to_string(),
        file: Some("src/log.rs"),
        line: Some(42),
    };
    let cloned = entry.clone();
    assert_eq!(cloned.severity, LogSeverity::Warn);
    assert_eq!(cloned.source, "borealis::test");
    assert_eq!(cloned.message, "something looks off");
    assert_eq!(cloned.file, Some("src/log.rs"));
    assert_eq!(cloned.line, Some(42));
}

#[test]
fn test_default_logger_does_not_panic() {
    // DefaultLogger writes to stdout; both shapes (with and without
    // file:line) must format cleanly.
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "borealis::test".to_string(),
        message: "plain entry".to_string(),
        file: None,
        line: None,
    });
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "borealis::test".to_string(),
        message: "detailed entry".to_string(),
        file: Some("src/log_tests.rs"),
        line: Some(1),
    });
}

// ============================================================================
// GLOBAL DISPATCH TESTS
// ============================================================================

#[test]
fn test_capture_logger_receives_dispatched_entries() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    crate::log::set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });

    dispatch(
        LogSeverity::Info,
        "borealis::test",
        "direct dispatch".to_string(),
    );
    crate::gfx_warn!("borealis::test", "macro dispatch {}", 7);
    crate::gfx_error!("borealis::test", "error dispatch");

    // Restore the default logger before asserting so a failed assertion
    // does not leave the capture logger installed for other tests.
    crate::log::reset_logger();

    let captured = entries.lock().unwrap();
    assert!(captured
        .iter()
        .any(|e| e.severity == LogSeverity::Info && e.message == "direct dispatch"));
    assert!(captured
        .iter()
        .any(|e| e.severity == LogSeverity::Warn && e.message == "macro dispatch 7"));

    // gfx_error! carries source-location details
    let error_entry = captured
        .iter()
        .find(|e| e.severity == LogSeverity::Error)
        .expect("error entry captured");
    assert!(error_entry.file.is_some());
    assert!(error_entry.line.is_some());
}
