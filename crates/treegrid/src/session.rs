#![forbid(unsafe_code)]

//! Grid session: the tree store, its edit history and row expansion.
//!
//! [`GridSession`] is what a grid front end talks to. Each user action
//! mutates the [`TreeStore`] and records a [`Record`] describing how to
//! roll it back. Undo and redo pull a record from the [`History`] and apply
//! the matching value back onto the store:
//!
//! | Record | undo | redo |
//! |--------|------|------|
//! | edit   | update to `old_value` | update to `new_value` |
//! | add    | remove `new_value` | add `new_value` |
//! | remove | re-add target, then its subtree | remove `new_value` |
//!
//! # Example
//! ```
//! use treegrid::{GridConfig, GridSession, ItemId, fixture_items};
//!
//! let mut grid = GridSession::new(fixture_items(), GridConfig::default());
//! grid.remove(&ItemId::from(1));
//! assert!(grid.rows().is_empty());
//!
//! assert!(grid.undo());
//! assert_eq!(grid.rows().len(), 8);
//!
//! assert!(grid.redo());
//! assert!(grid.rows().is_empty());
//! ```

use tracing::{debug, info, warn};
use treegrid_history::History;
use treegrid_store::{Item, ItemId, TreeStore};

use crate::config::GridConfig;
use crate::record::Record;
use crate::rows::{Expansion, Row, visible_rows};
use crate::source::{ItemSource, SourceResult, check_items};

/// Editable tree grid state with linear undo/redo.
#[derive(Debug, Clone)]
pub struct GridSession {
    store: TreeStore,
    history: History<Record>,
    expansion: Expansion,
    config: GridConfig,
}

impl GridSession {
    /// Build a session over `items`.
    #[must_use]
    pub fn new(items: Vec<Item>, config: GridConfig) -> Self {
        Self {
            store: TreeStore::with_config(items, config.store),
            history: History::with_config(config.history),
            expansion: Expansion::new(config.default_expanded),
            config,
        }
    }

    /// Fetch items from `source` and build a session over them.
    pub fn load(source: &dyn ItemSource, config: GridConfig) -> SourceResult<Self> {
        let items = source.fetch_all()?;
        check_items(&items)?;
        info!(source = source.name(), items = items.len(), "grid loaded");
        Ok(Self::new(items, config))
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    /// The edit history.
    #[must_use]
    pub fn history(&self) -> &History<Record> {
        &self.history
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Whether there is an applied record to roll back.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_first_record()
    }

    /// Whether there is an undone record to reapply.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.history.is_last_record()
    }

    // ====================================================================
    // Edits
    // ====================================================================

    /// Append a new child under `parent` and expand the parent row.
    pub fn add_child(&mut self, parent: &ItemId) -> Item {
        let item = Item::new(
            self.next_id(),
            parent.clone(),
            self.config.new_item_label.clone(),
        );
        self.store.add_item(item.clone());
        self.history.set_record(&Record::add(item.clone()));
        if !parent.is_null() {
            self.expansion.set(parent.clone(), true);
        }
        debug!(id = %item.id, parent = %parent, "row added");
        item
    }

    /// Replace an item's fields. Returns the previous item.
    ///
    /// `None` when the id is unknown or the parent change cannot be undone:
    /// the store keeps stale groups on update, or the new parent lies inside
    /// the item's own subtree.
    pub fn edit(&mut self, item: Item) -> Option<Item> {
        let before = self.store.get_item(&item.id)?.clone();
        if item.parent != before.parent {
            if !self.store.config().reparent_on_update {
                warn!(id = %item.id, parent = %item.parent, "parent change rejected: store does not reparent");
                return None;
            }
            let ancestors = self.store.get_all_parents(&item.parent);
            if ancestors.iter().any(|ancestor| ancestor.id == item.id) {
                warn!(id = %item.id, parent = %item.parent, "parent change rejected: would form a cycle");
                return None;
            }
        }
        self.store.update_item(item.clone());
        self.history.set_record(&Record::edit(before.clone(), item));
        Some(before)
    }

    /// Change the label of `id`. Returns the updated item, `None` if unknown.
    pub fn edit_label(&mut self, id: &ItemId, label: impl Into<String>) -> Option<Item> {
        let after = self.store.get_item(id)?.with_label(label);
        self.edit(after.clone())?;
        debug!(id = %id, label = %after.label, "row label edited");
        Some(after)
    }

    /// Remove `id` with its subtree. Returns the removed items, `None` if unknown.
    pub fn remove(&mut self, id: &ItemId) -> Option<Vec<Item>> {
        let removed = self.store.remove_item(id);
        let target = removed.last()?.clone();
        self.history
            .set_record(&Record::remove(removed.clone(), target));
        for item in &removed {
            self.expansion.forget(&item.id);
        }
        debug!(id = %id, removed = removed.len(), "row removed");
        Some(removed)
    }

    // ====================================================================
    // Undo / redo
    // ====================================================================

    /// Roll back the last applied record. Returns `false` when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.get_record(true).cloned() else {
            return false;
        };
        debug!(action = %record.action(), id = %record.target().id, "undo");
        match record {
            Record::Edit { old_value, .. } => self.store.update_item(old_value),
            Record::Add { new_value, .. } => {
                self.store.remove_item(&new_value.id);
            }
            Record::Remove {
                old_value,
                new_value,
            } => {
                let target_id = new_value.id.clone();
                self.store.add_item(new_value);
                for item in old_value.into_iter().filter(|item| item.id != target_id) {
                    self.store.add_item(item);
                }
            }
        }
        true
    }

    /// Reapply the next undone record. Returns `false` when there is none.
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.history.get_record(false).cloned() else {
            return false;
        };
        debug!(action = %record.action(), id = %record.target().id, "redo");
        match record {
            Record::Edit { new_value, .. } => self.store.update_item(new_value),
            Record::Add { new_value, .. } => self.store.add_item(new_value),
            Record::Remove { new_value, .. } => {
                self.store.remove_item(&new_value.id);
            }
        }
        true
    }

    // ====================================================================
    // Rows
    // ====================================================================

    /// Rows currently visible, numbered from 1.
    #[must_use]
    pub fn rows(&self) -> Vec<Row<'_>> {
        visible_rows(&self.store, &self.expansion)
    }

    /// Flip the expanded state of a row. Returns the new state.
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        let depth = self.store.get_all_parents(id).len().saturating_sub(1);
        self.expansion.toggle(id, depth)
    }

    /// Force a row open or closed.
    pub fn set_expanded(&mut self, id: &ItemId, expanded: bool) {
        self.expansion.set(id.clone(), expanded);
    }

    /// Smallest integer id above every stored integer id.
    fn next_id(&self) -> i64 {
        self.store
            .get_all()
            .iter()
            .filter_map(|item| item.id.as_int())
            .max()
            .map_or(1, |max| max + 1)
    }
}
