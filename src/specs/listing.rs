// src/specs/listing.rs
//! Result page of the archive search, filtered by first-publication date.
//!
//! The search is a CGI form with a long fixed parameter list; only the date
//! and the page size vary. Hits are anchors whose href carries `F30_KEY`.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::RunOptions;
use crate::config::consts::{DATE_FORMAT, LOCATOR_MARKER, SEARCH_PATH};
use crate::core::{html, net};
use crate::error::FetchError;

/// Parameters that never change, in the order the search form sends them.
const FIXED_PARAMS: &[(&str, &str)] = &[
    ("OmnisPlatform", "WINDOWS"),
    ("WebServerUrl", ""),
    ("WebServerScript", SEARCH_PATH),
    ("OmnisLibrary", "JURISWEB"),
    ("OmnisClass", "rtFindinfoWebHtmlService"),
    ("OmnisServer", "JURISWEB,127.0.0.1:7000"),
    ("Schema", "ZH_VG_WEB"),
    ("Parametername", "WWW"),
    ("Aufruf", "search"),
    ("cTemplate", "standard/results/resultpage.fiw"),
    ("cTemplateSuchkriterien", "standard/results/searchcriteriarow.fiw"),
    ("cTemplate_SuchstringValidateError", "standard/search.fiw"),
    ("cSprache", "GER"),
    ("cGeschaeftsart", ""),
    ("cGeschaeftsjahr", ""),
    ("cGeschaeftsnummer", ""),
    ("dEntscheiddatum", ""),
    ("bHasEntscheiddatumBis", "0"),
    ("dEntscheiddatumBis", ""),
    ("dPublikationsdatum", ""),
    ("bHasPublikationsdatumBis", "0"),
    ("dPublikationsdatumBis", ""),
];

/// Query for all decisions first published on `date`.
pub fn search_query(date: NaiveDate, page_size: u32) -> Vec<(&'static str, String)> {
    let mut query: Vec<(&'static str, String)> =
        FIXED_PARAMS.iter().map(|&(k, v)| (k, v.to_string())).collect();

    query.extend([
        ("dErstPublikationsdatum", date.format(DATE_FORMAT).to_string()),
        ("bHasErstPublikationsdatumBis", "0".to_string()),
        ("dErstPublikationsdatumBis", String::new()),
        ("cSuchstringZiel", "F37_HTML".to_string()),
        ("cSuchstring", String::new()),
        ("nAnzahlTrefferProSeite", page_size.to_string()),
        ("nSeite", "1".to_string()),
    ]);
    query
}

/// Fetch the result page for `date` and return absolute document URLs.
pub fn fetch(client: &Client, options: &RunOptions, date: NaiveDate) -> Result<Vec<String>, FetchError> {
    let base = Url::parse(&options.base_url)?;
    let search = base.join(&options.search_path)?;
    let query = search_query(date, options.page_size);

    let page = net::http_get_latin1(client, search.as_str(), &query, options.listing_timeout)?;
    let locators = extract_locators(&page, &base);

    info!(date = %date.format(DATE_FORMAT), count = locators.len(), "listing");
    Ok(locators)
}

/// Document links on a result page, resolved against `base`.
pub fn extract_locators(page: &str, base: &Url) -> Vec<String> {
    let links = html::links_containing(page, base, LOCATOR_MARKER);
    debug!(count = links.len(), "locators");
    links
}
