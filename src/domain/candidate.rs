use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::CatalogError;

/// Opaque reference to an image asset.
///
/// The widget never inspects the referenced bytes; the host resolves the
/// reference (a URL, a bundler path) when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AssetRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An item that can be picked from the dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateItem {
    /// Unique identifier within the catalog
    pub id: String,
    /// Display text, also the text the search matches against
    pub label: String,
    /// Optional avatar shown on the chip and the dropdown row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<AssetRef>,
    /// Secondary text shown next to the label in the dropdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<String>,
}

impl CandidateItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            image: None,
            sub_text: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<AssetRef>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_sub_text(mut self, sub_text: impl Into<String>) -> Self {
        self.sub_text = Some(sub_text.into());
        self
    }
}

/// The static source list a widget instance selects from.
///
/// Ids are unique and non-empty. The list is immutable once built and cheap
/// to clone, so every widget instance owns its own handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    items: Arc<[CandidateItem]>,
}

impl CandidateList {
    pub fn new(items: Vec<CandidateItem>) -> Result<Self, CatalogError> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if item.label.trim().is_empty() {
                return Err(CatalogError::EmptyLabel { id: item.id.clone() });
            }
            if let Some(first) = seen.insert(item.id.as_str(), index) {
                return Err(CatalogError::DuplicateId {
                    id: item.id.clone(),
                    first,
                    second: index,
                });
            }
        }

        Ok(Self {
            items: items.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[CandidateItem] {
        &self.items
    }

    /// Look up a candidate by id
    pub fn get(&self, id: &str) -> Option<&CandidateItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a CandidateItem;
    type IntoIter = std::slice::Iter<'a, CandidateItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
