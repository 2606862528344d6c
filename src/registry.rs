//! Caller-owned item cache keyed by stable id.
//!
//! Items are registered as tiles are discovered, possibly before their asset
//! has loaded (they start as 1×1 placeholders). When the real size arrives the
//! caller updates it here and re-runs the layout from a fresh [`snapshot`].
//! The layout engine itself keeps no state between calls.
//!
//! [`snapshot`]: ItemRegistry::snapshot

use indexmap::IndexMap;
use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::layout::{GridLayout, Item, full_layout};

#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: IndexMap<String, Item>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tile. An id that is already present keeps its existing item.
    ///
    /// Returns `true` when a new item was created.
    pub fn register(
        &mut self,
        id: &str,
        natural_size: Option<(f64, f64)>,
    ) -> Result<bool, LayoutError> {
        if self.items.contains_key(id) {
            return Ok(false);
        }
        let item = match natural_size {
            Some((w, h)) => Item::new(id, w, h)?,
            None => Item::pending(id),
        };
        debug!(id, pending = natural_size.is_none(), "registered item");
        self.items.insert(id.to_string(), item);
        Ok(true)
    }

    /// Record a loaded asset's natural size.
    pub fn update_natural_size(
        &mut self,
        id: &str,
        width: f64,
        height: f64,
    ) -> Result<(), LayoutError> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| LayoutError::UnknownItem(id.to_string()))?;
        item.set_natural_size(width, height)?;
        debug!(id, width, height, orientation = %item.orientation(), "updated natural size");
        Ok(())
    }

    /// Remove a tile. Returns the removed item, if any.
    pub fn deregister(&mut self, id: &str) -> Option<Item> {
        self.items.shift_remove(id)
    }

    /// Sync with a new source collection: keep known ids (reusing their items),
    /// add unknown ids as pending placeholders, drop everything else. The
    /// registry order becomes the order of `ids`.
    pub fn sync<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let mut next = IndexMap::new();
        for id in ids {
            if next.contains_key(id) {
                continue;
            }
            let item = self
                .items
                .shift_remove(id)
                .unwrap_or_else(|| Item::pending(id));
            next.insert(id.to_string(), item);
        }
        if !self.items.is_empty() {
            debug!(dropped = self.items.len(), "dropped items missing from source");
        }
        self.items = next;
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in registration order, detached from the registry.
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    /// Lay out the current snapshot.
    pub fn lay_out(&self, config: &LayoutConfig) -> Result<GridLayout, LayoutError> {
        full_layout(&self.snapshot(), config)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_registry.rs"]
mod tests;
