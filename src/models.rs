//! Frontend Models
//!
//! Data structures matching the server's state payload.

use serde::{Deserialize, Serialize};

/// Complete server-held snapshot the page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatePayload {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub disable_argument: String,
    #[serde(default)]
    pub markdown: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Titled group of items (e.g. "Expansion Packs")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub items: Vec<Item>,
}

/// Single togglable entry. `code` is unique across a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub code: String,
    pub name: String,
    pub enabled: bool,
}

#[cfg(test)]
impl StatePayload {
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.categories.iter().flat_map(|category| category.items.iter())
    }

    pub fn find(&self, code: &str) -> Option<&Item> {
        self.items().find(|item| item.code == code)
    }
}
