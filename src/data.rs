// src/data.rs
//! Records produced by the extractor and the per-day groups handed to the report.

use std::fmt;

use chrono::NaiveDate;

use crate::config::consts::{DATE_FORMAT, FALLBACK_SECTION};

/// How the court disposed of the case, read from the operative clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    PartiallyUpheld,
    Upheld,
    Dismissed,
    DismissedAsMoot,
    NotAdmitted,
    #[default]
    Unknown,
}

impl Outcome {
    pub const ALL: [Outcome; 6] = [
        Outcome::PartiallyUpheld,
        Outcome::Upheld,
        Outcome::Dismissed,
        Outcome::DismissedAsMoot,
        Outcome::NotAdmitted,
        Outcome::Unknown,
    ];

    /// Label shown in the report. `Unknown` renders as an empty cell.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::PartiallyUpheld => "Teilweise Gutheissung",
            Outcome::Upheld => "Gutheissung",
            Outcome::Dismissed => "Abweisung",
            Outcome::DismissedAsMoot => "Abschreibung als gegenstandslos",
            Outcome::NotAdmitted => "Nichteintreten",
            Outcome::Unknown => "",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One decision document, flattened into the report's columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionRecord {
    /// `LL.YYYY.NNNNN`, e.g. `VB.2024.00123`.
    pub case_number: Option<String>,
    /// Verbatim, never parsed into a calendar date.
    pub decision_date: Option<String>,
    pub section: String,
    pub legal_area: Option<String>,
    pub subject: Option<String>,
    pub outcome: Outcome,
    /// 1 (leading case) ..= 5.
    pub weight: Option<u8>,
    pub length_words: Option<usize>,
    /// In order of appearance; never contains blanks.
    pub judges: Vec<String>,
    pub clerk: Option<String>,
    pub has_dissent: bool,
    pub source_url: String,
}

impl DecisionRecord {
    /// A record with every optional field absent. `extract` starts from this.
    pub fn empty(source_url: &str) -> Self {
        Self {
            case_number: None,
            decision_date: None,
            section: FALLBACK_SECTION.to_string(),
            legal_area: None,
            subject: None,
            outcome: Outcome::Unknown,
            weight: None,
            length_words: None,
            judges: Vec::new(),
            clerk: None,
            has_dissent: false,
            source_url: source_url.to_string(),
        }
    }
}

/// A document that could not be fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocFailure {
    pub url: String,
    pub reason: String,
}

impl DocFailure {
    pub fn new(url: &str, reason: impl fmt::Display) -> Self {
        Self { url: url.to_string(), reason: reason.to_string() }
    }
}

/// Everything collected for one publication date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayReport {
    pub date: NaiveDate,
    /// Listing order.
    pub records: Vec<DecisionRecord>,
    pub failures: Vec<DocFailure>,
    /// Set when the listing itself failed; the day then has no records.
    pub listing_error: Option<String>,
}

impl DayReport {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, records: Vec::new(), failures: Vec::new(), listing_error: None }
    }

    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
