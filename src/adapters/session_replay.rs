//! Scripted interaction sessions.
//!
//! A script lists the node names that belong to the widget and a sequence of
//! steps. Each step is either a [`WidgetEvent`] or a document-level pointer
//! event aimed at a named node, which is resolved against the widget's nodes
//! the same way the browser resolves it against the DOM.
//!
//! ```yaml
//! root: [input, chip, dropdown]
//! events:
//!   - type: input
//!     text: ze
//!   - type: candidate_click
//!     id: "1"
//!   - pointer_down: body
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::domain::{dispatch, CandidateList, Combobox, ComboboxView, EventOutcome, WidgetEvent, WidgetRoot};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script: {0}")]
    Parse(String),

    #[error("Unknown script format: {0} (expected .json, .yaml or .yml)")]
    UnknownFormat(String),
}

/// Nodes inside the widget when a script does not list them
const DEFAULT_ROOT_NODES: [&str; 5] = ["root", "chip", "input", "indicator", "dropdown"];

fn default_root_nodes() -> Vec<String> {
    DEFAULT_ROOT_NODES.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionScript {
    /// Names of the nodes that belong to the widget subtree
    #[serde(default = "default_root_nodes")]
    pub root: Vec<String>,
    #[serde(default)]
    pub events: Vec<ScriptStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ScriptStep {
    /// Document-level pointer-down on the named node
    PointerDown { pointer_down: String },
    Widget(WidgetEvent),
}

/// Widget subtree described by node names
#[derive(Debug, Clone)]
pub struct ScriptedRoot {
    nodes: HashSet<String>,
}

impl ScriptedRoot {
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }
}

impl WidgetRoot for ScriptedRoot {
    type Target = str;

    fn contains(&self, target: &str) -> bool {
        self.nodes.contains(target)
    }
}

/// One applied step and the state it produced
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    pub index: usize,
    pub step: ScriptStep,
    pub outcome: EventOutcome,
    pub view: ComboboxView,
}

pub struct SessionReplay {
    combobox: Combobox,
    root: ScriptedRoot,
}

impl SessionReplay {
    pub fn new(catalog: CandidateList, root: ScriptedRoot) -> Self {
        Self {
            combobox: Combobox::new(catalog),
            root,
        }
    }

    /// Replay every step of `script` against a fresh widget
    pub fn run(catalog: CandidateList, script: &SessionScript) -> Vec<ReplayStep> {
        let mut replay = Self::new(catalog, ScriptedRoot::new(script.root.iter().cloned()));
        script
            .events
            .iter()
            .enumerate()
            .map(|(index, step)| replay.apply(index, step))
            .collect()
    }

    pub fn apply(&mut self, index: usize, step: &ScriptStep) -> ReplayStep {
        debug!(index, ?step, "Replaying step");
        let outcome = match step {
            ScriptStep::PointerDown { pointer_down } => {
                self.combobox.handle_pointer_down(&self.root, pointer_down.as_str());
                EventOutcome::default()
            }
            ScriptStep::Widget(event) => dispatch(&mut self.combobox, event),
        };

        ReplayStep {
            index,
            step: step.clone(),
            outcome,
            view: self.combobox.view(),
        }
    }

    pub fn combobox(&self) -> &Combobox {
        &self.combobox
    }
}

/// Read a script, picking the parser from the file extension
pub fn load_script(path: &Path) -> Result<SessionScript, ReplayError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| ReplayError::Parse(e.to_string())),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| ReplayError::Parse(e.to_string()))
        }
        other => Err(ReplayError::UnknownFormat(other.unwrap_or_default().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CandidateItem, Key};

    fn catalog() -> CandidateList {
        CandidateList::new(vec![
            CandidateItem::new("1", "Zepto"),
            CandidateItem::new("2", "Linear"),
            CandidateItem::new("3", "Elon Musk"),
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_mixed_steps() {
        let script: SessionScript = serde_yaml::from_str(
            r#"
events:
  - type: input
    text: ze
  - pointer_down: body
  - type: key_down
    key: Backspace
"#,
        )
        .unwrap();

        assert_eq!(script.root, default_root_nodes());
        assert_eq!(
            script.events,
            vec![
                ScriptStep::Widget(WidgetEvent::Input { text: "ze".to_string() }),
                ScriptStep::PointerDown {
                    pointer_down: "body".to_string()
                },
                ScriptStep::Widget(WidgetEvent::KeyDown { key: Key::Backspace }),
            ]
        );
    }

    #[test]
    fn test_run_records_each_step() {
        let script = SessionScript {
            root: vec!["input".to_string()],
            events: vec![
                ScriptStep::Widget(WidgetEvent::Input { text: "l".to_string() }),
                ScriptStep::PointerDown {
                    pointer_down: "input".to_string(),
                },
                ScriptStep::Widget(WidgetEvent::CandidateClick { id: "2".to_string() }),
                ScriptStep::PointerDown {
                    pointer_down: "body".to_string(),
                },
            ],
        };

        let steps = SessionReplay::run(catalog(), &script);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].view.search_text, "l");
        assert!(steps[1].view.dropdown.as_ref().unwrap().visible);
        assert!(steps[2].outcome.stop_propagation);
        assert_eq!(steps[2].view.chips.len(), 1);
        assert_eq!(steps[3].index, 3);
    }

    #[test]
    fn test_outside_pointer_closes_manual_open() {
        let mut replay = SessionReplay::new(catalog(), ScriptedRoot::new(["input"]));
        replay.apply(0, &ScriptStep::Widget(WidgetEvent::RootClick));
        assert!(replay.combobox().is_open());

        replay.apply(
            1,
            &ScriptStep::PointerDown {
                pointer_down: "page".to_string(),
            },
        );
        assert!(!replay.combobox().is_open());
    }

    #[test]
    fn test_load_script_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.txt");
        std::fs::write(&path, "events: []").unwrap();

        assert!(matches!(load_script(&path), Err(ReplayError::UnknownFormat(_))));
        assert!(matches!(
            load_script(&dir.path().join("missing.yaml")),
            Err(ReplayError::Io { .. })
        ));
    }
}
