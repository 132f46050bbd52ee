// src/progress.rs
use crate::specs::summary::ParseError;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of targets.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One target fetched and parsed; `rows` usable rows kept.
    fn item_done(&mut self, _target: &str, _rows: usize) {}

    /// One target fetched but its summary could not be parsed.
    fn item_skipped(&mut self, _target: &str, _reason: &ParseError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
