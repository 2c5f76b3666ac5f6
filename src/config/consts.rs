// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://vgrzh.djiktzh.ch";
pub const SEARCH_PATH: &str = "/cgi-bin/nph-omniscgi.exe";
pub const USER_AGENT: &str = concat!("vgzh_scrape/", env!("CARGO_PKG_VERSION"));
pub const LISTING_TIMEOUT_SECS: u64 = 15;
pub const DOCUMENT_TIMEOUT_SECS: u64 = 10;

// Result-page anchors that point at a decision document
pub const LOCATOR_MARKER: &str = "F30_KEY";

// Window
pub const LOOKBACK_DAYS: u32 = 7;
pub const PAGE_SIZE: u32 = 50;
pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";
// Dates and the report timestamp are the court's wall clock
pub const COURT_TZ: chrono_tz::Tz = chrono_tz::Europe::Zurich;

// Export
pub const DEFAULT_OUT_FILE: &str = "index.html";

// Extraction
pub const FALLBACK_SECTION: &str = "Verwaltungskommission";
