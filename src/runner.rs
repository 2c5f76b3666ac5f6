// src/runner.rs
use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use crate::{
    config::{RunOptions, options::report_timestamp},
    error::Result,
    file::write_report,
    progress::Progress,
    report,
    scrape::{self, DecisionSource, HttpSource},
};

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Absolute path of the written report.
    pub out_path: PathBuf,
    pub days: usize,
    pub records: usize,
    pub failures: usize,
}

/// Top-level runner against the live archive.
pub fn run(options: &RunOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let source = HttpSource::new(options)?;
    run_with_source(&source, options, progress)
}

/// Collect the window from `source`, render, write. Only the write can fail.
pub fn run_with_source(
    source: &dyn DecisionSource,
    options: &RunOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let dates = scrape::publication_dates(options.end_date_or_today(), options.lookback_days);
    let days = scrape::collect_window(source, &dates, progress);

    let generated_at = report_timestamp(Utc::now());
    let html = report::render(&days, &generated_at);
    let out_path = write_report(&options.out_path, &html)?;

    let summary = RunSummary {
        out_path,
        days: days.len(),
        records: days.iter().map(|d| d.records.len()).sum(),
        failures: days.iter().map(|d| d.failures.len()).sum(),
    };
    info!(
        path = %summary.out_path.display(),
        days = summary.days,
        records = summary.records,
        failures = summary.failures,
        "report written"
    );
    Ok(summary)
}
