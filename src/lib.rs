//! # Chipbox - searchable multi-select combobox
//!
//! Chipbox is the framework-independent core of a multi-select "combobox"
//! widget: the user types to filter a fixed candidate list, picks candidates
//! into chips, and removes chips by clicking their delete glyph or with
//! Backspace from an empty input.
//!
//! ## Quick Start
//!
//! ```rust
//! use chipbox::domain::{CandidateItem, CandidateList, Combobox, Key};
//!
//! let catalog = CandidateList::new(vec![
//!     CandidateItem::new("1", "Zepto"),
//!     CandidateItem::new("2", "Linear"),
//! ])
//! .unwrap();
//!
//! let mut combo = Combobox::new(catalog);
//! combo.set_search_text("zep");
//! assert!(combo.is_open());
//!
//! combo.select_item("1");
//! assert_eq!(combo.selected_ids(), vec!["1"]);
//!
//! // First Backspace focuses the last chip, the second deletes it
//! combo.handle_key_down(&Key::Backspace);
//! combo.handle_key_down(&Key::Backspace);
//! assert!(combo.selected().is_empty());
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: candidates, filtering, the state machine, event dispatch and
//!   the render model
//! - **Adapters**: text rendering and scripted session replay
//! - **Config**: catalog loading and validation
//!
//! The browser component lives in the `chipbox-ui` crate.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
