//! Tag Filtering
//!
//! Tag-name selections and the conjunctive gallery filter.

use crate::models::Item;

/// Insertion-ordered set of tag join keys.
///
/// Backs both the gallery's active filters and the tags picked for a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    names: Vec<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `name`. Returns whether it is now selected.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.clone()
    }
}

/// True when every selected name is among the item's tags
pub fn matches(item: &Item, selection: &TagSelection) -> bool {
    selection.iter().all(|name| item.has_tag(name))
}

/// Items matching `selection`, in collection order. An empty selection
/// keeps everything.
pub fn filter_items<'a>(items: &'a [Item], selection: &TagSelection) -> Vec<&'a Item> {
    items.iter().filter(|item| matches(item, selection)).collect()
}
