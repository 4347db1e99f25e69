//! Trait abstractions at the seams of the store.
//!
//! - [`Reporter`]: where human-readable status lines go

pub mod reporter;

pub use reporter::{ConsoleReporter, NullReporter, Reporter};
