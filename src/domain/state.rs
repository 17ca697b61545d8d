//! Selection state machine.
//!
//! A [`Combobox`] owns the selected chips, the dropdown open flag, the search
//! text, and the chip and row that currently carry focus or hover. All
//! mutation goes through the transition methods below; each one runs to
//! completion synchronously and cannot fail. Requests that do not apply
//! (unknown ids, out-of-range chip indices) are ignored and reported through
//! the returned `bool`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::candidate::{CandidateItem, CandidateList};
use super::events::WidgetRoot;
use super::filter::{filter_candidates, FilteredCandidate};

/// Transient interaction state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Whether the dropdown panel is shown
    pub is_open: bool,
    /// Current contents of the text input
    pub search_text: String,
    /// Index into the selected chips of the chip holding keyboard focus
    pub focused_chip: Option<usize>,
    /// Id of the dropdown row under the pointer
    pub hovered_candidate: Option<String>,
}

/// A key delivered by the text input's key-down event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Backspace,
    Other(String),
}

impl From<&str> for Key {
    fn from(code: &str) -> Self {
        match code {
            "Backspace" => Key::Backspace,
            other => Key::Other(other.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(code: String) -> Self {
        Key::from(code.as_str())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        match key {
            Key::Backspace => "Backspace".to_string(),
            Key::Other(code) => code,
        }
    }
}

/// What the host should do with the key event after the transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeyOutcome {
    /// Suppress the input's default editing behavior
    pub prevent_default: bool,
}

/// Searchable multi-select state
#[derive(Debug, Clone)]
pub struct Combobox {
    candidates: CandidateList,
    selected: Vec<CandidateItem>,
    ui: UiState,
}

impl Combobox {
    pub fn new(candidates: CandidateList) -> Self {
        Self {
            candidates,
            selected: Vec::new(),
            ui: UiState::default(),
        }
    }

    /// Selected items in selection order
    pub fn selected(&self) -> &[CandidateItem] {
        &self.selected
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().map(|item| item.id.clone()).collect()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn is_open(&self) -> bool {
        self.ui.is_open
    }

    pub fn search_text(&self) -> &str {
        &self.ui.search_text
    }

    pub fn focused_chip(&self) -> Option<usize> {
        self.ui.focused_chip
    }

    pub fn hovered_candidate(&self) -> Option<&str> {
        self.ui.hovered_candidate.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|item| item.id == id)
    }

    /// Every candidate has been turned into a chip
    pub fn is_exhausted(&self) -> bool {
        self.selected.len() == self.candidates.len()
    }

    /// Unselected candidates matching the search text
    pub fn filtered(&self) -> Vec<FilteredCandidate<'_>> {
        filter_candidates(self.candidates.as_slice(), &self.selected, &self.ui.search_text)
    }

    /// Click inside the widget root
    pub fn toggle_open(&mut self) {
        self.ui.is_open = !self.ui.is_open;
        debug!(is_open = self.ui.is_open, "Toggled dropdown");
        self.enforce_exhaustion();
    }

    /// Pointer event whose target lies outside the widget root
    pub fn close_from_outside(&mut self) {
        self.ui.is_open = false;
        self.ui.focused_chip = None;
        debug!("Closed by outside pointer");
    }

    /// Close the widget if `target` is not inside `root`.
    ///
    /// Returns `true` when the target was outside.
    pub fn handle_pointer_down<R: WidgetRoot + ?Sized>(&mut self, root: &R, target: &R::Target) -> bool {
        if root.contains(target) {
            return false;
        }
        self.close_from_outside();
        true
    }

    /// Replace the search text.
    ///
    /// A change to a non-empty text opens the dropdown, a change to the empty
    /// text closes it. Setting the same text again is not a change.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.ui.search_text {
            return;
        }
        self.ui.is_open = !text.is_empty();
        self.ui.search_text = text;
        debug!(search_text = %self.ui.search_text, is_open = self.ui.is_open, "Search text changed");
        self.enforce_exhaustion();
    }

    /// Append the candidate with `id` to the chips.
    ///
    /// Clears the search text and chip focus. Unknown and already selected
    /// ids are ignored.
    pub fn select_item(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            return false;
        }
        let Some(candidate) = self.candidates.get(id).cloned() else {
            debug!(id, "Ignoring selection of unknown candidate");
            return false;
        };

        self.selected.push(candidate);
        if self.ui.hovered_candidate.as_deref() == Some(id) {
            self.ui.hovered_candidate = None;
        }
        self.set_search_text(String::new());
        self.ui.focused_chip = None;
        debug!(id, selected = self.selected.len(), "Selected candidate");
        self.enforce_exhaustion();
        true
    }

    /// Remove the chip with `id`.
    ///
    /// Chip focus keeps pointing at the same chip: it is cleared when that
    /// chip is the one removed and shifted when the chip moves left.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let Some(position) = self.selected.iter().position(|item| item.id == id) else {
            return false;
        };

        self.selected.remove(position);
        self.ui.focused_chip = match self.ui.focused_chip {
            Some(focused) if focused == position => None,
            Some(focused) if focused > position => Some(focused - 1),
            other => other,
        };
        debug!(id, selected = self.selected.len(), "Deleted chip");
        true
    }

    pub fn focus_chip(&mut self, index: usize) -> bool {
        if index >= self.selected.len() {
            debug!(index, chips = self.selected.len(), "Ignoring focus on missing chip");
            return false;
        }
        self.ui.focused_chip = Some(index);
        true
    }

    pub fn blur_chip(&mut self) {
        self.ui.focused_chip = None;
    }

    /// Pointer entered the dropdown row for `id`
    pub fn hover_candidate(&mut self, id: &str) -> bool {
        if self.candidates.get(id).is_none() || self.is_selected(id) {
            return false;
        }
        self.ui.hovered_candidate = Some(id.to_string());
        true
    }

    pub fn clear_hover(&mut self) {
        self.ui.hovered_candidate = None;
    }

    /// Key-down on the text input.
    ///
    /// With an empty search text and at least one chip, Backspace first
    /// focuses the last chip and then deletes the focused chip.
    pub fn handle_key_down(&mut self, key: &Key) -> KeyOutcome {
        if *key != Key::Backspace || !self.ui.search_text.is_empty() || self.selected.is_empty() {
            return KeyOutcome::default();
        }

        match self.ui.focused_chip {
            None => {
                let last = self.selected.len() - 1;
                self.ui.focused_chip = Some(last);
                debug!(index = last, "Backspace focused last chip");
            }
            Some(index) => {
                if let Some(id) = self.selected.get(index).map(|item| item.id.clone()) {
                    self.delete_item(&id);
                }
                self.ui.focused_chip = None;
            }
        }

        KeyOutcome {
            prevent_default: true,
        }
    }

    fn enforce_exhaustion(&mut self) {
        if self.ui.is_open && self.is_exhausted() {
            self.ui.is_open = false;
            debug!("All candidates selected, closing dropdown");
        }
    }
}
