//! # Saved-Items Manager
//!
//! The user's favourited dishes. Independent of the cart: saving a dish
//! never adds it to the cart and clearing the cart leaves favourites alone.
//!
//! Set semantics by `id`, kept in insertion order for the saved screen.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::SavedItem;

/// Deserializing goes through [`SavedItems::add`], so a repeated id keeps
/// its first entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "SavedLines")]
pub struct SavedItems {
    items: Vec<SavedItem>,
}

impl SavedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the dish unless an entry with the same id already exists.
    ///
    /// The existing entry is kept as-is; the incoming one is dropped.
    pub fn add(&mut self, item: SavedItem) {
        if self.contains(item.id) {
            return;
        }
        debug!(id = item.id, "saved item added");
        self.items.push(item);
    }

    /// Removes the entry for this id, if any.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|i| i.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// The heart button: saves when absent, unsaves when present.
    ///
    /// Returns whether the dish is saved afterwards.
    pub fn toggle(&mut self, item: SavedItem) -> bool {
        if self.contains(item.id) {
            self.remove(item.id);
            false
        } else {
            self.add(item);
            true
        }
    }

    pub fn items(&self) -> &[SavedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Deserialize)]
struct SavedLines {
    #[serde(default)]
    items: Vec<SavedItem>,
}

impl From<SavedLines> for SavedItems {
    fn from(lines: SavedLines) -> Self {
        let mut saved = SavedItems::new();
        for item in lines.items {
            saved.add(item);
        }
        saved
    }
}
