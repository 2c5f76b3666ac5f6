// src/specs/decision.rs
//! Scraping *spec* for a single decision document.
//!
//! Purpose:
//! - Turn the text of one decision page into a [`DecisionRecord`].
//! - Every field has its own parser with its own delimiters. A field that
//!   cannot be found is absent; it never takes a sibling field down with it.
//!
//! Responsibilities:
//! - Fetch one document and flatten it to text (`fetch`).
//! - Normalize whitespace, then run the field parsers (`extract`).
//!
//! The page layout is irregular: labels and values sit in table cells, the
//! reasoning is free text, and the operative clause opens with one of a few
//! fixed formulas. After whitespace normalization the fields we need are
//! contiguous, which is what the spans below rely on.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::FALLBACK_SECTION;
use crate::core::sanitize::normalize_ws;
use crate::core::{Case, Haystack, Span, fold, html, net};
use crate::data::{DecisionRecord, Outcome};
use crate::error::FetchError;

/* ---------------- vocabulary ---------------- */

/// Judge titles. Feminine forms first so stripping never leaves a stray "in".
const JUDGE_TITLES: &[&str] = &[
    "Verwaltungsrichterin",
    "Verwaltungsrichter",
    "Abteilungspräsidentin",
    "Abteilungspräsident",
    "Gerichtspräsidentin",
    "Gerichtspräsident",
];

const CLERK_TITLE: &str = "Gerichtsschreiber";

/// Formulas that open the operative clause (Dispositiv).
///
/// All nine opener/verb pairs, including the two single-judge "beschliesst"
/// forms that seven-entry tables for this archive leave out.
pub const OPERATIVE_OPENERS: &[&str] = &[
    "Demgemäss erkennt",
    "Demgemäss verfügt",
    "Demgemäss beschliesst",
    "Der Einzelrichter erkennt",
    "Der Einzelrichter verfügt",
    "Der Einzelrichter beschliesst",
    "Die Einzelrichterin erkennt",
    "Die Einzelrichterin verfügt",
    "Die Einzelrichterin beschliesst",
];

/// Checked in order, first hit wins. The partial rule must stay ahead of the
/// plain one: "teilweise gutgeheissen" contains "gutgeheissen".
const OUTCOME_RULES: &[(&[&str], Outcome)] = &[
    (&["teilweise gutgeheissen", "in teilweiser gutheissung"], Outcome::PartiallyUpheld),
    (&["gutgeheissen", "in gutheissung"], Outcome::Upheld),
    (&["abgewiesen"], Outcome::Dismissed),
    (&["gegenstandslos"], Outcome::DismissedAsMoot),
    (&["nicht eingetreten"], Outcome::NotAdmitted),
];

const DISSENT_MARKERS: &[&str] = &[
    "Abweichende Meinung einer Kammerminderheit",
    "Abweichende Meinung des Gerichtsschreibers",
    "Abweichende Meinung der Gerichtsschreiberin",
    "Abweichende Meinung einer Minderheit",
];

/* ---------------- spans ---------------- */

const JUDGES_SPAN: Span = Span::new(
    &["Verwaltungsrichter", "Abteilungspräsident", "Gerichtspräsident"],
    &[CLERK_TITLE],
)
.keep_start();
const DECISION_DATE_SPAN: Span = Span::new(&["vom "], &[" Spruchkörper"]);
const SECTION_SPAN: Span = Span::new(&["Spruchkörper:"], &["/", "Weiterzug:"]).or_eof();
const LEGAL_AREA_SPAN: Span = Span::new(&["Rechtsgebiet:"], &["Betreff"]);
const SUBJECT_SPAN: Span = Span::new(&[", betreffend "], &[", hat sich ergeben"]).ignore_case();
const REASONING_SPAN: Span = Span::new(&["hat sich ergeben:"], OPERATIVE_OPENERS).ignore_case();
const OPERATIVE_SPAN: Span = Span::new(OPERATIVE_OPENERS, &["Total der Kosten"]).ignore_case();

/* ---------------- token shapes ---------------- */

static CASE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Geschäftsnummer:\s*([A-Z]{2}\.[0-9]{4}\.[0-9]{5})\b").expect("valid case number regex")
});
static CLERK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Gerichtsschreiber(?:in)?\s+([A-ZÄÖÜ][^.]+)\.").expect("valid clerk regex")
});
static WEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Gewichtung:\s*([1-5])").expect("valid weighting regex"));

/* ---------------- entry points ---------------- */

/// Fetch one decision page and flatten it to text.
pub fn fetch(client: &Client, url: &str, timeout: Duration) -> Result<String, FetchError> {
    let page = net::http_get_latin1(client, url, &[], timeout)?;
    Ok(html::html_to_text(&page))
}

/// Extract a record from a fetched HTML page.
pub fn parse_document(page: &str, source_url: &str) -> DecisionRecord {
    extract(&html::html_to_text(page), source_url)
}

/// Extract a record from the text of a decision. Never fails; missing fields
/// come back absent.
pub fn extract(raw_text: &str, source_url: &str) -> DecisionRecord {
    let text = normalize_ws(raw_text);
    let hay = Haystack::new(&text);

    let record = DecisionRecord {
        case_number: parse_case_number(&hay),
        decision_date: parse_decision_date(&hay),
        section: parse_section(&hay),
        legal_area: parse_legal_area(&hay),
        subject: parse_subject(&hay),
        outcome: parse_outcome(&hay),
        weight: parse_weight(&hay),
        length_words: parse_length_words(&hay),
        judges: parse_judges(&hay),
        clerk: parse_clerk(&hay),
        has_dissent: parse_dissent(&hay),
        ..DecisionRecord::empty(source_url)
    };
    debug!(
        url = source_url,
        case = record.case_number.as_deref().unwrap_or("-"),
        outcome = ?record.outcome,
        "extracted"
    );
    record
}

/* ---------------- field parsers ---------------- */

/// Names between the first judge title and the clerk.
pub fn parse_judges(hay: &Haystack) -> Vec<String> {
    let Some(block) = JUDGES_SPAN.find(hay) else { return Vec::new() };

    let mut names = block.to_string();
    for title in JUDGE_TITLES {
        names = names.replace(title, "");
    }

    names
        .split(',')
        .flat_map(|part| part.split(" und "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_clerk(hay: &Haystack) -> Option<String> {
    let caps = CLERK.captures(hay.text())?;
    let name = caps.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

pub fn parse_case_number(hay: &Haystack) -> Option<String> {
    let caps = CASE_NUMBER.captures(hay.text())?;
    caps.get(1).map(|m| m.as_str().to_string())
}

pub fn parse_decision_date(hay: &Haystack) -> Option<String> {
    DECISION_DATE_SPAN.find_trimmed(hay).map(str::to_string)
}

/// The deciding panel. Without a usable label the case went to the
/// administrative commission.
pub fn parse_section(hay: &Haystack) -> String {
    SECTION_SPAN
        .find_trimmed(hay)
        .unwrap_or(FALLBACK_SECTION)
        .to_string()
}

pub fn parse_weight(hay: &Haystack) -> Option<u8> {
    let caps = WEIGHT.captures(hay.text())?;
    caps.get(1)?.as_str().parse().ok()
}

pub fn parse_legal_area(hay: &Haystack) -> Option<String> {
    LEGAL_AREA_SPAN.find_trimmed(hay).map(str::to_string)
}

pub fn parse_subject(hay: &Haystack) -> Option<String> {
    SUBJECT_SPAN.find_trimmed(hay).map(str::to_string)
}

/// Word count of the reasoning, from "hat sich ergeben:" to the operative clause.
pub fn parse_length_words(hay: &Haystack) -> Option<usize> {
    REASONING_SPAN.find(hay).map(|s| s.split_whitespace().count())
}

pub fn parse_outcome(hay: &Haystack) -> Outcome {
    OPERATIVE_SPAN.find(hay).map(classify_outcome).unwrap_or_default()
}

/// Classify operative-clause text against [`OUTCOME_RULES`].
pub fn classify_outcome(operative: &str) -> Outcome {
    let text = fold(&normalize_ws(operative));
    OUTCOME_RULES
        .iter()
        .find(|(phrases, _)| phrases.iter().any(|p| text.contains(p)))
        .map(|&(_, outcome)| outcome)
        .unwrap_or_default()
}

pub fn parse_dissent(hay: &Haystack) -> bool {
    hay.contains_any(DISSENT_MARKERS, Case::Insensitive)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hay(s: &str) -> String {
        normalize_ws(s)
    }

    #[test]
    fn judges_and_clerk_from_participants_line() {
        let text = hay(
            "Abteilungspräsident A Meier, Verwaltungsrichterin B Huber und \
             Verwaltungsrichter C Weber Gerichtsschreiber D Frei.",
        );
        let h = Haystack::new(&text);
        assert_eq!(parse_judges(&h), vec!["A Meier", "B Huber", "C Weber"]);
        assert_eq!(parse_clerk(&h).as_deref(), Some("D Frei"));
    }

    #[test]
    fn judges_absent_without_clerk() {
        let text = hay("Verwaltungsrichter C Weber hat entschieden.");
        assert!(parse_judges(&Haystack::new(&text)).is_empty());
    }

    #[test]
    fn judges_never_blank() {
        let text = hay("Gerichtspräsidentin , , X Y und Gerichtsschreiberin Z.");
        let judges = parse_judges(&Haystack::new(&text));
        assert_eq!(judges, vec!["X Y"]);
        assert!(judges.iter().all(|j| !j.trim().is_empty()));
    }

    #[test]
    fn clerk_needs_capitalized_name() {
        let text = hay("der gerichtsschreiber hat. Gerichtsschreiberin Öri Müller.");
        assert_eq!(parse_clerk(&Haystack::new(&text)).as_deref(), Some("Öri Müller"));
        let text = hay("Gerichtsschreiber und sonst nichts");
        assert_eq!(parse_clerk(&Haystack::new(&text)), None);
    }

    #[test]
    fn case_number_exact_shape_only() {
        let ok = hay("Geschäftsnummer: AB.2024.00012 Entscheidart");
        assert_eq!(parse_case_number(&Haystack::new(&ok)).as_deref(), Some("AB.2024.00012"));

        let long = hay("Geschäftsnummer: AB.2024.000123");
        assert_eq!(parse_case_number(&Haystack::new(&long)), None);

        let short = hay("Geschäftsnummer: AB.2024.0012");
        assert_eq!(parse_case_number(&Haystack::new(&short)), None);

        let lower = hay("Geschäftsnummer: ab.2024.00012");
        assert_eq!(parse_case_number(&Haystack::new(&lower)), None);
    }

    #[test]
    fn section_until_slash_or_appeal_label() {
        let t = hay("Spruchkörper: 1. Abteilung/1. Kammer Weiterzug: rechtskräftig");
        assert_eq!(parse_section(&Haystack::new(&t)), "1. Abteilung");

        let t = hay("Spruchkörper: Einzelrichter Weiterzug: rechtskräftig");
        assert_eq!(parse_section(&Haystack::new(&t)), "Einzelrichter");

        let t = hay("Spruchkörper: 2. Abteilung");
        assert_eq!(parse_section(&Haystack::new(&t)), "2. Abteilung");
    }

    #[test]
    fn section_falls_back_on_empty_capture() {
        let t = hay("Spruchkörper: / Weiterzug: x");
        assert_eq!(parse_section(&Haystack::new(&t)), "Verwaltungskommission");
        let t = hay("kein Label hier");
        assert_eq!(parse_section(&Haystack::new(&t)), "Verwaltungskommission");
    }

    #[test]
    fn decision_date_verbatim() {
        let t = hay("Endentscheid vom\n07.12.2023\nSpruchkörper: 1. Abteilung");
        assert_eq!(parse_decision_date(&Haystack::new(&t)).as_deref(), Some("07.12.2023"));
    }

    #[test]
    fn weight_skips_the_legend() {
        let t = hay("Gewichtung: (1 von hoher / 5 von geringer Bedeutung) Gewichtung: 3");
        assert_eq!(parse_weight(&Haystack::new(&t)), Some(3));
        let t = hay("Gewichtung: 7");
        assert_eq!(parse_weight(&Haystack::new(&t)), None);
    }

    #[test]
    fn legal_area_and_subject() {
        let t = hay(
            "Rechtsgebiet: Raumplanungs- und Baurecht Betreff: Baubewilligung \
             In Sachen A gegen B, BETREFFEND Baubewilligung für ein Carport, Hat sich ergeben: I.",
        );
        let h = Haystack::new(&t);
        assert_eq!(parse_legal_area(&h).as_deref(), Some("Raumplanungs- und Baurecht"));
        assert_eq!(parse_subject(&h).as_deref(), Some("Baubewilligung für ein Carport"));
    }

    #[test]
    fn reasoning_word_count() {
        let words: Vec<String> = (1..=37).map(|i| format!("wort{i}")).collect();
        let raw = format!(
            "betreffend X, hat sich ergeben:\n{}\n\nDemgemäss erkennt die Kammer: abgewiesen. Total der Kosten",
            words.join(" \n ")
        );
        let t = hay(&raw);
        assert_eq!(parse_length_words(&Haystack::new(&t)), Some(37));
    }

    #[test]
    fn reasoning_absent_without_operative_clause() {
        let t = hay("hat sich ergeben: viel Text, aber kein Dispositiv");
        assert_eq!(parse_length_words(&Haystack::new(&t)), None);
    }

    #[test]
    fn each_outcome_phrase_classifies() {
        let cases = [
            ("Die Beschwerde wird teilweise gutgeheissen.", Outcome::PartiallyUpheld),
            ("In teilweiser Gutheissung der Beschwerde wird", Outcome::PartiallyUpheld),
            ("Die Beschwerde wird gutgeheissen.", Outcome::Upheld),
            ("In Gutheissung der Beschwerde wird", Outcome::Upheld),
            ("Die Beschwerde wird abgewiesen.", Outcome::Dismissed),
            ("Das Verfahren wird als gegenstandslos abgeschrieben.", Outcome::DismissedAsMoot),
            ("Auf die Beschwerde wird nicht eingetreten.", Outcome::NotAdmitted),
            ("Die Sache wird zurückgewiesen.", Outcome::Unknown),
        ];
        for (operative, expected) in cases {
            let raw = format!("Demgemäss erkennt die Kammer: 1. {operative} 2. Total der Kosten Fr. 500.--");
            let t = hay(&raw);
            assert_eq!(parse_outcome(&Haystack::new(&t)), expected, "{operative}");
        }
    }

    #[test]
    fn partial_beats_plain_upheld() {
        // Both rules match this text; order decides.
        let op = "Die Beschwerde wird teilweise gutgeheissen. Im Übrigen wird sie abgewiesen.";
        assert!(op.contains("gutgeheissen"));
        assert_eq!(classify_outcome(op), Outcome::PartiallyUpheld);
    }

    #[test]
    fn upper_case_umlaut_opener() {
        let t = hay(
            "hat sich ergeben: a b c. DEMGEMÄSS ERKENNT DIE KAMMER: \
             Die Beschwerde wird abgewiesen. Total der Kosten",
        );
        let h = Haystack::new(&t);
        assert_eq!(parse_outcome(&h), Outcome::Dismissed);
        assert_eq!(parse_length_words(&h), Some(3));
    }

    #[test]
    fn every_opener_closes_reasoning_and_opens_operative_clause() {
        for opener in OPERATIVE_OPENERS {
            let raw = format!(
                "hat sich ergeben: x y. {opener}: Die Beschwerde wird abgewiesen. Total der Kosten"
            );
            let t = hay(&raw);
            let h = Haystack::new(&t);
            assert_eq!(parse_length_words(&h), Some(2), "{opener}");
            assert_eq!(parse_outcome(&h), Outcome::Dismissed, "{opener}");
        }
    }

    #[test]
    fn outcome_needs_cost_label() {
        let t = hay("Demgemäss erkennt die Kammer: Die Beschwerde wird abgewiesen.");
        assert_eq!(parse_outcome(&Haystack::new(&t)), Outcome::Unknown);
    }

    #[test]
    fn outcome_ignores_text_before_operative_clause() {
        let t = hay(
            "Die Vorinstanz hat das Gesuch gutgeheissen. Der Einzelrichter verfügt: \
             Die Beschwerde wird abgewiesen. Total der Kosten",
        );
        assert_eq!(parse_outcome(&Haystack::new(&t)), Outcome::Dismissed);
    }

    #[test]
    fn dissent_any_marker_any_case() {
        let none = hay("Keine Minderheit erwähnt.");
        assert!(!parse_dissent(&Haystack::new(&none)));
        for marker in DISSENT_MARKERS {
            let upper = hay(&format!("Text. {} Ende", marker.to_uppercase()));
            assert!(parse_dissent(&Haystack::new(&upper)), "{marker}");
        }
    }

    #[test]
    fn blank_text_gives_the_empty_record() {
        assert_eq!(extract("", "u"), DecisionRecord::empty("u"));
        assert_eq!(extract("  \n ", "u").section, "Verwaltungskommission");
    }

    #[test]
    fn extract_never_panics_on_odd_input() {
        for raw in ["", " ", "vom", "Spruchkörper:", "Gerichtsschreiber", "ä ö ü ß € \u{0}", "Demgemäss erkennt"] {
            let r = extract(raw, "u");
            assert!(Outcome::ALL.contains(&r.outcome));
            assert!(r.judges.iter().all(|j| !j.is_empty()));
        }
    }
}
