// src/core/span.rs
//! Bounded-span search over whitespace-normalized text.
//!
//! A [`Span`] is a start/end delimiter pair. Searching picks the earliest
//! occurrence of any start marker, then the earliest occurrence of any end
//! marker after it, and returns the text in between. Every field of a
//! decision is located this way, each with its own pair, so one field never
//! reads past the delimiters of another.
//!
//! Case-insensitive search lowercases every char whose lowercase form has the
//! same UTF-8 length (ASCII, umlauts). Other chars stay as they are, so
//! offsets found in the folded copy index the unfolded text.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    Sensitive,
    Insensitive,
}

/// Lowercase `s` char by char without changing its byte length.
pub fn fold(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
                _ => c,
            }
        })
        .collect()
}

/// The text under search, plus a case-folded copy for case-insensitive lookups.
pub struct Haystack<'a> {
    text: &'a str,
    folded: String,
}

impl<'a> Haystack<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, folded: fold(text) }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Earliest occurrence of any needle at or after `from`, as a byte range.
    /// On a tie the longer needle wins.
    pub fn find_any(&self, needles: &[&str], from: usize, case: Case) -> Option<(usize, usize)> {
        let hay = match case {
            Case::Sensitive => self.text,
            Case::Insensitive => self.folded.as_str(),
        };
        let tail = hay.get(from..)?;

        let mut best: Option<(usize, usize)> = None;
        for needle in needles {
            if needle.is_empty() {
                continue;
            }
            let pos = match case {
                Case::Sensitive => tail.find(needle),
                Case::Insensitive => tail.find(fold(needle).as_str()),
            };
            let Some(pos) = pos else { continue };
            let hit = (from + pos, from + pos + needle.len());
            best = match best {
                Some(b) if b.0 < hit.0 || (b.0 == hit.0 && b.1 >= hit.1) => Some(b),
                _ => Some(hit),
            };
        }
        best
    }

    pub fn contains_any(&self, needles: &[&str], case: Case) -> bool {
        self.find_any(needles, 0, case).is_some()
    }
}

/// A start/end delimiter pair.
///
/// By default the slice excludes both markers and the span is only found
/// when an end marker follows the start marker.
#[derive(Clone, Copy, Debug)]
pub struct Span<'p> {
    start: &'p [&'p str],
    end: &'p [&'p str],
    case: Case,
    keep_start: bool,
    open_end: bool,
}

impl<'p> Span<'p> {
    pub const fn new(start: &'p [&'p str], end: &'p [&'p str]) -> Self {
        Self { start, end, case: Case::Sensitive, keep_start: false, open_end: false }
    }

    pub const fn ignore_case(self) -> Self {
        Self { case: Case::Insensitive, ..self }
    }

    /// Include the matched start marker in the returned slice.
    pub const fn keep_start(self) -> Self {
        Self { keep_start: true, ..self }
    }

    /// Close the span at end-of-text when no end marker follows.
    pub const fn or_eof(self) -> Self {
        Self { open_end: true, ..self }
    }

    pub fn find<'a>(&self, hay: &Haystack<'a>) -> Option<&'a str> {
        let (s0, s1) = hay.find_any(self.start, 0, self.case)?;
        let from = if self.keep_start { s0 } else { s1 };

        let stop = match hay.find_any(self.end, s1, self.case) {
            Some((e0, _)) => e0,
            None if self.open_end => hay.text().len(),
            None => return None,
        };
        hay.text().get(from..stop)
    }

    /// Like [`Span::find`], trimmed, with empty captures treated as absent.
    pub fn find_trimmed<'a>(&self, hay: &Haystack<'a>) -> Option<&'a str> {
        self.find(hay).map(str::trim).filter(|s| !s.is_empty())
    }
}
