//! Status reporting trait abstraction.
//!
//! The store reports human-readable status lines ("Authenticated !",
//! "No stored credentials found") through a [`Reporter`] so library users can
//! swap the terminal output for a no-op or a recorder in tests.

use crate::cli_output::{icons, print_status_line};

/// Sink for human-readable status lines.
pub trait Reporter: Send + Sync {
    /// A positive outcome.
    fn success(&self, message: &str);

    /// A recoverable problem the user should know about.
    fn warning(&self, message: &str);

    /// A failure that was handled leniently.
    fn failure(&self, message: &str);
}

/// Prints status lines to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn success(&self, message: &str) {
        print_status_line(icons::SUCCESS, message);
    }

    fn warning(&self, message: &str) {
        print_status_line(icons::WARNING, message);
    }

    fn failure(&self, message: &str) {
        print_status_line(icons::FAILURE, message);
    }
}

/// Discards every status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn success(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}

    fn failure(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_reporter<R: Reporter>(_reporter: &R) {}

    #[test]
    fn test_reporters_are_object_safe() {
        let reporters: Vec<Box<dyn Reporter>> =
            vec![Box::new(ConsoleReporter), Box::new(NullReporter)];
        assert_eq!(reporters.len(), 2);
    }

    #[test]
    fn test_null_reporter_accepts_everything() {
        let reporter = NullReporter;
        assert_reporter(&reporter);
        reporter.success("ok");
        reporter.warning("careful");
        reporter.failure("broken");
    }
}
