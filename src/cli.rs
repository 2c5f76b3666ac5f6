// src/cli.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::RunOptions;
use crate::config::consts::{DATE_FORMAT, DEFAULT_OUT_FILE, LOOKBACK_DAYS, PAGE_SIZE};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Recently published decisions of the Zurich administrative court as one HTML page.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "vgzh_scrape", version, about)]
pub struct Args {
    /// Output file.
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Number of publication days, counting back from the end date.
    #[arg(short, long, default_value_t = LOOKBACK_DAYS, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: u32,

    /// Newest publication date (dd.mm.YYYY). Defaults to today.
    #[arg(short, long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Hits requested per listing page.
    #[arg(long, default_value_t = PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|e| format!("expected dd.mm.YYYY: {e}"))
}

impl Args {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            out_path: self.out,
            lookback_days: self.days,
            end_date: self.end_date,
            page_size: self.page_size,
            ..RunOptions::default()
        }
    }
}

/// Prints one line per finished date.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total_days: usize) {
        self.total = total_days;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_failed(&mut self, url: &str, reason: &str) {
        eprintln!("  Fehler bei {url}: {reason}");
    }

    fn day_done(&mut self, date: NaiveDate, records: usize) {
        self.seen += 1;
        eprintln!(
            "[{}/{}] {}: {records} Entscheid(e)",
            self.seen,
            self.total,
            date.format(DATE_FORMAT)
        );
    }
}

pub fn run(args: Args) -> Result<RunSummary> {
    let options = args.into_options();
    runner::run(&options, &mut ConsoleProgress::default())
}
