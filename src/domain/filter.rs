//! Candidate filtering and match highlighting.
//!
//! Filtering is a pure function of the candidate list, the current selection
//! and the search text. Matching is a case-insensitive substring test; the
//! first occurrence is reported as a byte span into the original label so the
//! presentation layer can emphasize it without re-running the search.

use serde::Serialize;
use std::collections::HashSet;

use super::candidate::CandidateItem;

/// Half-open `[start, end)` byte range of a match inside a label.
///
/// Both ends always fall on char boundaries of the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A candidate that survived filtering, with the span to emphasize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteredCandidate<'a> {
    pub candidate: &'a CandidateItem,
    pub span: MatchSpan,
}

/// Find the first case-insensitive occurrence of `query` in `label`.
///
/// The search runs over `label.to_lowercase()`. A match that covers only part
/// of a char's lowercase form (`İ` lowers to `i̇`) is widened to the whole
/// char, so the span always lies on char boundaries of the original label.
/// An empty query matches at the start of every label.
pub fn find_match(label: &str, query: &str) -> Option<MatchSpan> {
    if query.is_empty() {
        return Some(MatchSpan { start: 0, end: 0 });
    }

    let needle = query.to_lowercase();
    let folded = label.to_lowercase();

    // Original char range behind each byte of the folded label
    let mut origins: Vec<(usize, usize)> = Vec::with_capacity(folded.len());
    for (offset, c) in label.char_indices() {
        let lowered_len: usize = c.to_lowercase().map(char::len_utf8).sum();
        origins.extend(std::iter::repeat((offset, offset + c.len_utf8())).take(lowered_len));
    }

    let at = folded.find(needle.as_str())?;
    let (start, _) = *origins.get(at)?;
    let (_, end) = *origins.get(at + needle.len() - 1)?;
    Some(MatchSpan { start, end })
}

/// Selectable candidates for the current search text, in catalog order.
///
/// Candidates whose id is already selected are excluded, as are candidates
/// whose label does not contain the query.
pub fn filter_candidates<'a>(
    candidates: &'a [CandidateItem],
    selected: &[CandidateItem],
    query: &str,
) -> Vec<FilteredCandidate<'a>> {
    let selected_ids: HashSet<&str> = selected.iter().map(|item| item.id.as_str()).collect();

    candidates
        .iter()
        .filter(|candidate| !selected_ids.contains(candidate.id.as_str()))
        .filter_map(|candidate| {
            find_match(&candidate.label, query).map(|span| FilteredCandidate { candidate, span })
        })
        .collect()
}

/// A label split around its emphasized match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HighlightedLabel {
    /// Nothing to emphasize
    Plain { text: String },
    Emphasized {
        before: String,
        matched: String,
        after: String,
    },
}

impl HighlightedLabel {
    /// Split `label` around `span`.
    ///
    /// A missing, empty or out-of-range span renders the label unemphasized.
    pub fn new(label: &str, span: Option<MatchSpan>) -> Self {
        let plain = || Self::Plain {
            text: label.to_string(),
        };

        let Some(span) = span.filter(|s| !s.is_empty()) else {
            return plain();
        };

        match (
            label.get(..span.start),
            label.get(span.start..span.end),
            label.get(span.end..),
        ) {
            (Some(before), Some(matched), Some(after)) => Self::Emphasized {
                before: before.to_string(),
                matched: matched.to_string(),
                after: after.to_string(),
            },
            _ => plain(),
        }
    }

    /// The full label text
    pub fn text(&self) -> String {
        match self {
            Self::Plain { text } => text.clone(),
            Self::Emphasized {
                before,
                matched,
                after,
            } => format!("{}{}{}", before, matched, after),
        }
    }
}
