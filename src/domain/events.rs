//! Event bindings between a host UI and the state machine.
//!
//! Hosts translate their native pointer and keyboard events into
//! [`WidgetEvent`]s and feed them to [`dispatch`]. The returned
//! [`EventOutcome`] tells the host whether to suppress the native default
//! action and whether to stop the event from bubbling to the widget root,
//! where it would otherwise toggle the dropdown.

use serde::{Deserialize, Serialize};

use super::state::{Combobox, Key};

/// Containment test supplied by the host's node tree.
///
/// Used to decide whether a document-level pointer event happened inside the
/// widget.
pub trait WidgetRoot {
    type Target: ?Sized;

    fn contains(&self, target: &Self::Target) -> bool;
}

/// Interaction delivered to the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetEvent {
    /// Click that bubbled up to the widget root
    RootClick,
    /// Click on a chip body
    ChipClick { index: usize },
    ChipFocus { index: usize },
    ChipBlur,
    /// Click on a chip's delete glyph
    ChipDeleteClick { id: String },
    /// Click on a dropdown row
    CandidateClick { id: String },
    CandidateHover { id: String },
    CandidateLeave,
    /// New contents of the text input
    Input { text: String },
    KeyDown { key: Key },
    /// Pointer event outside the widget root
    OutsidePointer,
}

/// Instructions for the host after an event was applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventOutcome {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventOutcome {
    fn stop() -> Self {
        Self {
            prevent_default: false,
            stop_propagation: true,
        }
    }
}

/// Apply `event` to `combobox`
pub fn dispatch(combobox: &mut Combobox, event: &WidgetEvent) -> EventOutcome {
    match event {
        WidgetEvent::RootClick => {
            combobox.toggle_open();
            EventOutcome::default()
        }
        WidgetEvent::ChipClick { index } => {
            combobox.focus_chip(*index);
            EventOutcome::stop()
        }
        WidgetEvent::ChipFocus { index } => {
            combobox.focus_chip(*index);
            EventOutcome::default()
        }
        WidgetEvent::ChipBlur => {
            combobox.blur_chip();
            EventOutcome::default()
        }
        WidgetEvent::ChipDeleteClick { id } => {
            combobox.delete_item(id);
            EventOutcome::stop()
        }
        WidgetEvent::CandidateClick { id } => {
            combobox.select_item(id);
            EventOutcome::stop()
        }
        WidgetEvent::CandidateHover { id } => {
            combobox.hover_candidate(id);
            EventOutcome::default()
        }
        WidgetEvent::CandidateLeave => {
            combobox.clear_hover();
            EventOutcome::default()
        }
        WidgetEvent::Input { text } => {
            combobox.set_search_text(text.as_str());
            EventOutcome::default()
        }
        WidgetEvent::KeyDown { key } => {
            let outcome = combobox.handle_key_down(key);
            EventOutcome {
                prevent_default: outcome.prevent_default,
                stop_propagation: false,
            }
        }
        WidgetEvent::OutsidePointer => {
            combobox.close_from_outside();
            EventOutcome::default()
        }
    }
}
