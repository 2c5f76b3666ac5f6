// src/progress.rs
use chrono::NaiveDate;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of publication dates.
    fn begin(&mut self, _total_days: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A date's listing came back with `_documents` hits.
    fn day_started(&mut self, _date: NaiveDate, _documents: usize) {}

    /// One document was fetched and extracted.
    fn item_done(&mut self, _url: &str) {}

    /// One document could not be fetched.
    fn item_failed(&mut self, _url: &str, _reason: &str) {}

    /// A date is complete.
    fn day_done(&mut self, _date: NaiveDate, _records: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
