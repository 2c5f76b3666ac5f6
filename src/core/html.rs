// src/core/html.rs
//! HTML helpers on top of `scraper`.
//!
//! Decision pages are tables of label/value cells followed by free text.
//! Extraction works on plain text, so pages are flattened first.

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

/// Flatten a page to its visible text: every text node trimmed, empty ones
/// dropped, the rest joined with newlines. `<script>` and `<style>` bodies
/// are not text.
pub fn html_to_text(doc: &str) -> String {
    let html = Html::parse_document(doc);
    let mut parts: Vec<&str> = Vec::new();

    for node in html.root_element().descendants() {
        let Some(text) = node.value().as_text() else { continue };

        let hidden = node
            .parent()
            .and_then(|p| p.value().as_element())
            .is_some_and(|el| matches!(el.name(), "script" | "style" | "noscript"));
        if hidden {
            continue;
        }

        let t = text.trim();
        if !t.is_empty() {
            parts.push(t);
        }
    }
    parts.join("\n")
}

/// Collect `<a href>` targets whose raw href contains `marker`, resolved
/// against `base`. First-seen order, no duplicates.
pub fn links_containing(doc: &str, base: &Url, marker: &str) -> Vec<String> {
    let Ok(anchors) = Selector::parse("a[href]") else { return Vec::new() };
    let html = Html::parse_document(doc);

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for a in html.select(&anchors) {
        let Some(href) = a.value().attr("href") else { continue };
        let href = href.trim();
        if !href.contains(marker) {
            continue;
        }
        let Ok(resolved) = base.join(href) else { continue };
        let resolved = resolved.to_string();
        if seen.insert(resolved.clone()) {
            out.push(resolved);
        }
    }
    out
}
