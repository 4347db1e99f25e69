//! CLI output utilities for status lines and credential summaries.

mod boxes;

pub use boxes::*;
