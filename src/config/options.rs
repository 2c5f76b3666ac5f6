// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};

use super::consts::*;

/// Everything a run needs. `Default` reproduces the stock behaviour:
/// last 7 publication days, 50 hits per day, `index.html` in the working dir.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub base_url: String,
    pub search_path: String,
    pub lookback_days: u32,
    pub page_size: u32,
    pub out_path: PathBuf,
    /// Newest publication date of the window; `None` means today in Zurich.
    pub end_date: Option<NaiveDate>,
    pub listing_timeout: Duration,
    pub document_timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            search_path: SEARCH_PATH.to_string(),
            lookback_days: LOOKBACK_DAYS,
            page_size: PAGE_SIZE,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            end_date: None,
            listing_timeout: Duration::from_secs(LISTING_TIMEOUT_SECS),
            document_timeout: Duration::from_secs(DOCUMENT_TIMEOUT_SECS),
        }
    }
}

impl RunOptions {
    pub fn end_date_or_today(&self) -> NaiveDate {
        self.end_date
            .unwrap_or_else(|| Utc::now().with_timezone(&COURT_TZ).date_naive())
    }
}

/// "Aktualisiert" stamp for the report, in Zurich time.
pub fn report_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&COURT_TZ).format(TIMESTAMP_FORMAT).to_string()
}
