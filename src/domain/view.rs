//! Render model derived from a [`Combobox`].
//!
//! Presentation layers (the browser component, the text renderer) draw from
//! this snapshot instead of reading the state machine directly.

use serde::Serialize;

use super::candidate::AssetRef;
use super::filter::HighlightedLabel;
use super::state::Combobox;

/// Open/closed glyph next to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Open,
    Closed,
}

impl Indicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Open => "↑",
            Self::Closed => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipView {
    pub index: usize,
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<AssetRef>,
    pub focused: bool,
}

impl ChipView {
    /// Roving tabindex: only the focused chip is in the tab order
    pub fn tab_index(&self) -> i32 {
        if self.focused {
            0
        } else {
            -1
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownRow {
    pub id: String,
    pub label: HighlightedLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<AssetRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<String>,
    pub hovered: bool,
}

/// Dropdown panel; mounted whenever rows exist and shown only while open
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownView {
    pub visible: bool,
    pub rows: Vec<DropdownRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboboxView {
    pub chips: Vec<ChipView>,
    pub search_text: String,
    pub indicator: Indicator,
    /// `None` when no candidate matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<DropdownView>,
}

impl Combobox {
    pub fn view(&self) -> ComboboxView {
        let ui = self.ui();

        let chips = self
            .selected()
            .iter()
            .enumerate()
            .map(|(index, item)| ChipView {
                index,
                id: item.id.clone(),
                label: item.label.clone(),
                image: item.image.clone(),
                focused: ui.focused_chip == Some(index),
            })
            .collect();

        let rows: Vec<DropdownRow> = self
            .filtered()
            .into_iter()
            .map(|filtered| {
                let candidate = filtered.candidate;
                DropdownRow {
                    id: candidate.id.clone(),
                    label: HighlightedLabel::new(&candidate.label, Some(filtered.span)),
                    image: candidate.image.clone(),
                    sub_text: candidate.sub_text.clone(),
                    hovered: ui.hovered_candidate.as_deref() == Some(candidate.id.as_str()),
                }
            })
            .collect();

        ComboboxView {
            chips,
            search_text: ui.search_text.clone(),
            indicator: if ui.is_open { Indicator::Open } else { Indicator::Closed },
            dropdown: (!rows.is_empty()).then(|| DropdownView {
                visible: ui.is_open,
                rows,
            }),
        }
    }
}
