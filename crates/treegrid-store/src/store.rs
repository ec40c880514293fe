#![forbid(unsafe_code)]

//! Hierarchical item index.
//!
//! [`TreeStore`] owns a flat collection of [`Item`]s and keeps two indexes
//! over it:
//!
//! - `items`: id to item, in insertion order (authoritative).
//! - `children`: parent id to the ordered ids of its direct children.
//!
//! `ItemId::Null` is reserved for the root sentinel: items carrying it as
//! their own id are ignored, so it never resolves.
//!
//! Every mutating method takes `&mut self` and updates both indexes before
//! returning, so callers never observe a half-applied change.
//!
//! # Known gap
//!
//! With the default [`StoreConfig`], [`TreeStore::update_item`] does not move
//! an item between children groups when its `parent` changes. The children
//! index then keeps listing the item under its old parent. Enable
//! [`StoreConfig::with_reparent_on_update`] to move it instead.
//!
//! # Example
//! ```
//! use treegrid_store::{Item, ItemId, TreeStore};
//!
//! let mut store = TreeStore::new(vec![
//!     Item::new(1, ItemId::Null, "root"),
//!     Item::new("2", 1, "a"),
//!     Item::new(3, 1, "b"),
//!     Item::new(4, "2", "c"),
//! ]);
//!
//! let ids: Vec<_> = store.get_all_children(&1.into()).iter().map(|i| i.id.clone()).collect();
//! assert_eq!(ids, vec![ItemId::from("2"), ItemId::from(3), ItemId::from(4)]);
//!
//! store.remove_item(&"2".into());
//! assert!(store.get_item(&4.into()).is_none());
//! ```

use std::collections::VecDeque;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use tracing::{debug, trace, warn};

use crate::item::{Item, ItemId};

/// Behavior switches for a [`TreeStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Move an item between children groups when an update changes its parent.
    pub reparent_on_update: bool,
}

impl StoreConfig {
    /// Enable or disable reparenting on update.
    #[must_use]
    pub fn with_reparent_on_update(mut self, enabled: bool) -> Self {
        self.reparent_on_update = enabled;
        self
    }
}

/// In-memory parent/child index over a flat item collection.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    items: IndexMap<ItemId, Item, FxBuildHasher>,
    children: FxHashMap<ItemId, Vec<ItemId>>,
    config: StoreConfig,
}

impl TreeStore {
    /// Build a store from a flat list. Later duplicates of an id replace
    /// earlier ones in the by-id index.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self::with_config(items, StoreConfig::default())
    }

    /// Build a store with explicit configuration.
    #[must_use]
    pub fn with_config(items: impl IntoIterator<Item = Item>, config: StoreConfig) -> Self {
        let mut store = Self {
            items: IndexMap::default(),
            children: FxHashMap::default(),
            config,
        };
        for item in items {
            store.insert(item);
        }
        debug!(items = store.items.len(), "tree store built");
        store
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with this id is stored.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// All items in index order.
    #[must_use]
    pub fn get_all(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    /// Item by id, `None` when unknown.
    #[must_use]
    pub fn get_item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Direct children of `id`, in insertion order.
    #[must_use]
    pub fn get_children(&self, id: &ItemId) -> Vec<&Item> {
        self.child_ids(id)
            .iter()
            .filter_map(|child| self.items.get(child))
            .collect()
    }

    /// Items attached to the root sentinel.
    #[must_use]
    pub fn roots(&self) -> Vec<&Item> {
        self.get_children(&ItemId::Null)
    }

    /// Every descendant of `id`, breadth-first: all direct children, then
    /// their children group by group.
    #[must_use]
    pub fn get_all_children(&self, id: &ItemId) -> Vec<&Item> {
        let mut out = Vec::new();
        let mut queue: VecDeque<&ItemId> = self.child_ids(id).iter().collect();

        while let Some(next) = queue.pop_front() {
            if let Some(item) = self.items.get(next) {
                out.push(item);
            }
            queue.extend(self.child_ids(next));
        }

        out
    }

    /// The item itself followed by its ancestors, stopping at the first id
    /// that does not resolve.
    #[must_use]
    pub fn get_all_parents(&self, id: &ItemId) -> Vec<&Item> {
        let mut chain = Vec::new();
        let mut cursor = self.items.get(id);
        while let Some(item) = cursor {
            chain.push(item);
            cursor = self.items.get(&item.parent);
        }
        chain
    }

    /// Insert an item (overwriting any item with the same id) and append it
    /// to its parent's children group. Items with a `Null` id are ignored.
    pub fn add_item(&mut self, item: Item) {
        trace!(id = %item.id, parent = %item.parent, "add item");
        self.insert(item);
    }

    /// Replace the stored item with the same id.
    ///
    /// The children index is left untouched unless reparenting is enabled.
    pub fn update_item(&mut self, item: Item) {
        if item.id.is_null() {
            warn!(label = %item.label, "ignoring update of item with null id");
            return;
        }
        trace!(id = %item.id, "update item");
        let previous_parent = self
            .items
            .get(&item.id)
            .map(|old| old.parent.clone());

        if self.config.reparent_on_update
            && let Some(old_parent) = previous_parent
            && old_parent != item.parent
        {
            debug!(id = %item.id, from = %old_parent, to = %item.parent, "reparent item");
            self.detach(&old_parent, &item.id);
            self.children
                .entry(item.parent.clone())
                .or_default()
                .push(item.id.clone());
        }

        self.items.insert(item.id.clone(), item);
    }

    /// Remove an item together with its whole subtree.
    ///
    /// Returns the removed items (descendants breadth-first, then the target).
    /// Unknown ids are a no-op and return an empty vector.
    pub fn remove_item(&mut self, id: &ItemId) -> Vec<Item> {
        let Some(target_parent) = self.items.get(id).map(|item| item.parent.clone()) else {
            return Vec::new();
        };

        let doomed: Vec<ItemId> = self
            .get_all_children(id)
            .into_iter()
            .map(|item| item.id.clone())
            .chain(std::iter::once(id.clone()))
            .collect();

        let mut removed = Vec::with_capacity(doomed.len());
        for key in &doomed {
            if let Some(item) = self.items.shift_remove(key) {
                removed.push(item);
            }
            self.children.remove(key);
        }

        self.detach(&target_parent, id);
        debug!(id = %id, removed = removed.len(), "removed subtree");
        removed
    }

    fn insert(&mut self, item: Item) {
        if item.id.is_null() {
            warn!(label = %item.label, "ignoring item with null id");
            return;
        }
        self.children
            .entry(item.parent.clone())
            .or_default()
            .push(item.id.clone());
        self.items.insert(item.id.clone(), item);
    }

    fn detach(&mut self, parent: &ItemId, id: &ItemId) {
        if let Some(group) = self.children.get_mut(parent) {
            group.retain(|child| child != id);
        }
    }

    fn child_ids(&self, id: &ItemId) -> &[ItemId] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }
}
