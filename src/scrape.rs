// src/scrape.rs
use chrono::{Days, NaiveDate};
use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::{
    config::RunOptions,
    config::consts::DATE_FORMAT,
    core::net,
    data::{DayReport, DocFailure},
    error::FetchError,
    progress::Progress,
    specs,
};

/// Where listings and documents come from. The live archive in production,
/// canned pages in tests.
pub trait DecisionSource {
    /// Document URLs first published on `date`, in listing order.
    fn listing(&self, date: NaiveDate) -> Result<Vec<String>, FetchError>;

    /// Plain text of one decision.
    fn document(&self, url: &str) -> Result<String, FetchError>;
}

/// The court archive over HTTP.
pub struct HttpSource {
    client: Client,
    options: RunOptions,
}

impl HttpSource {
    pub fn new(options: &RunOptions) -> Result<Self, FetchError> {
        Ok(Self { client: net::client()?, options: options.clone() })
    }
}

impl DecisionSource for HttpSource {
    fn listing(&self, date: NaiveDate) -> Result<Vec<String>, FetchError> {
        specs::listing::fetch(&self.client, &self.options, date)
    }

    fn document(&self, url: &str) -> Result<String, FetchError> {
        specs::decision::fetch(&self.client, url, self.options.document_timeout)
    }
}

/// `days` calendar dates, newest first, starting at `end`.
pub fn publication_dates(end: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days)
        .filter_map(|i| end.checked_sub_days(Days::new(u64::from(i))))
        .collect()
}

/// Listing plus every document of one date. A failed listing leaves the day
/// empty; a failed document is recorded and skipped.
pub fn collect_day(
    source: &dyn DecisionSource,
    date: NaiveDate,
    progress: &mut dyn Progress,
) -> DayReport {
    let mut day = DayReport::new(date);
    let label = day.date_label();

    let urls = match source.listing(date) {
        Ok(urls) => urls,
        Err(e) => {
            warn!(date = %label, error = %e, "listing failed");
            progress.log(&format!("{label}: listing failed: {e}"));
            day.listing_error = Some(e.to_string());
            progress.day_done(date, 0);
            return day;
        }
    };
    progress.day_started(date, urls.len());

    for url in &urls {
        match source.document(url) {
            Ok(text) => {
                day.records.push(specs::decision::extract(&text, url));
                progress.item_done(url);
            }
            Err(e) => {
                warn!(url = %url, error = %e, "document skipped");
                progress.item_failed(url, &e.to_string());
                day.failures.push(DocFailure::new(url, &e));
            }
        }
    }

    info!(date = %label, records = day.records.len(), failed = day.failures.len(), "day collected");
    progress.day_done(date, day.records.len());
    day
}

/// Collect every date, in the order given.
pub fn collect_window(
    source: &dyn DecisionSource,
    dates: &[NaiveDate],
    progress: &mut dyn Progress,
) -> Vec<DayReport> {
    progress.begin(dates.len());
    let days = dates.iter().map(|&d| collect_day(source, d, progress)).collect();
    progress.finish();
    days
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::data::Outcome;
    use crate::progress::NullProgress;

    struct Canned {
        listings: HashMap<NaiveDate, Result<Vec<String>, u16>>,
        docs: HashMap<String, String>,
    }

    impl DecisionSource for Canned {
        fn listing(&self, date: NaiveDate) -> Result<Vec<String>, FetchError> {
            match self.listings.get(&date) {
                Some(Ok(v)) => Ok(v.clone()),
                Some(Err(status)) => Err(FetchError::Status { url: "listing".into(), status: *status }),
                None => Ok(Vec::new()),
            }
        }

        fn document(&self, url: &str) -> Result<String, FetchError> {
            self.docs
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn dates_newest_first() {
        let dates = publication_dates(date(2), 3);
        assert_eq!(
            dates,
            vec![date(2), date(1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()]
        );
        assert!(publication_dates(date(2), 0).is_empty());
    }

    #[test]
    fn failed_document_is_skipped_not_fatal() {
        let src = Canned {
            listings: HashMap::from([(date(5), Ok(vec!["a".to_string(), "b".to_string(), "c".to_string()]))]),
            docs: HashMap::from([
                ("a".to_string(), "Geschäftsnummer: VB.2024.00001 Demgemäss erkennt: abgewiesen. Total der Kosten".to_string()),
                ("c".to_string(), "Geschäftsnummer: VB.2024.00003".to_string()),
            ]),
        };

        let day = collect_day(&src, date(5), &mut NullProgress);
        assert_eq!(day.records.len(), 2);
        assert_eq!(day.records[0].source_url, "a");
        assert_eq!(day.records[0].outcome, Outcome::Dismissed);
        assert_eq!(day.records[1].case_number.as_deref(), Some("VB.2024.00003"));
        assert_eq!(day.failures.len(), 1);
        assert_eq!(day.failures[0].url, "b");
        assert!(day.listing_error.is_none());
    }

    #[test]
    fn failed_listing_means_empty_day() {
        let src = Canned { listings: HashMap::from([(date(5), Err(503))]), docs: HashMap::new() };
        let day = collect_day(&src, date(5), &mut NullProgress);
        assert!(day.is_empty());
        assert!(day.listing_error.as_deref().is_some_and(|e| e.contains("503")));
    }

    #[test]
    fn window_keeps_date_order() {
        let src = Canned { listings: HashMap::new(), docs: HashMap::new() };
        let dates = publication_dates(date(7), 7);
        let days = collect_window(&src, &dates, &mut NullProgress);
        let got: Vec<NaiveDate> = days.iter().map(|d| d.date).collect();
        assert_eq!(got, dates);
    }
}
