//! Mock implementations for test fixtures.

use std::sync::{Arc, Mutex};

use credkeep::traits::Reporter;

/// Severity of a recorded status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Failure,
}

/// Reporter that keeps every line it receives.
///
/// Clones share the same buffer, so a test can hand one clone to the store
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in order.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    /// Check if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }

    fn push(&self, level: Level, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn success(&self, message: &str) {
        self.push(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn failure(&self, message: &str) {
        self.push(Level::Failure, message);
    }
}
