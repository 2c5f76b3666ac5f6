// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications** for the court
//! archive. Each spec focuses on a single page kind and encodes *where the ground
//! truth lives* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Listing** (`listing`): the search result page for one first-publication
//!   date. Knows the fixed CGI parameter table and which anchors point at decisions.
//! - **Decision** (`decision`): one decision document. Flattens the page to text
//!   and reads each field with its own delimiters.
//! - **Tolerant extraction** using `core::span` (start/end delimiter pairs,
//!   ASCII case folding) and a few precompiled `regex` token shapes.
//!
//! ## What does **not** live here
//! - **Iteration over dates and documents** – `scrape::collect_*` drives that and
//!   decides what a failure costs.
//! - **Rendering and writing** – `report` and `file` consume finished records.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_window → scrape::collect_day
//!                                    ├→ specs::listing::fetch()   (URLs)
//!                                    └→ specs::decision::fetch()  (text)
//!                                         ↘ specs::decision::extract()
//! ```
//!
//! ## Conventions & invariants
//! - Extraction runs on **whitespace-normalized** text; newlines never matter.
//! - A missing field is **absent**, not an error. `extract` never fails.
//! - Fields are independent: each parser has its own start and end marker.
//! - **No logging spam**; one `info!` per listing, `debug!` per document.
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured text and HTML fixtures.
//!
//! In short: **`specs` knows how to read the pages.** Other layers decide when to
//! scrape and how to present the result.
pub mod decision;
pub mod listing;
