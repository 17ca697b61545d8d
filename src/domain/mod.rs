pub mod candidate;
pub mod error;
pub mod events;
pub mod filter;
pub mod state;
pub mod view;

pub use candidate::{AssetRef, CandidateItem, CandidateList};
pub use error::CatalogError;
pub use events::{dispatch, EventOutcome, WidgetEvent, WidgetRoot};
pub use filter::{filter_candidates, find_match, FilteredCandidate, HighlightedLabel, MatchSpan};
pub use state::{Combobox, Key, KeyOutcome, UiState};
pub use view::{ChipView, ComboboxView, DropdownRow, DropdownView, Indicator};
