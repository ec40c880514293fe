#![forbid(unsafe_code)]

//! Flattening the tree into visible grid rows.
//!
//! Top-level rows are the items whose parent does not resolve (the `Null`
//! sentinel or a missing id), in store order. Below each row its children
//! follow depth-first in group order, but only while the row is expanded.
//! Ordinals are 1-based and contiguous over the visible rows, so collapsing
//! a row renumbers everything after it.

use rustc_hash::FxHashMap;
use treegrid_store::{Item, ItemId, TreeStore};

/// One visible grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    /// 1-based position among visible rows.
    pub ordinal: usize,
    /// Distance from the top level.
    pub depth: usize,
    /// The stored item behind the row.
    pub item: &'a Item,
    /// Whether the item has any children (shown or not).
    pub has_children: bool,
    /// Whether the row's children are shown.
    pub expanded: bool,
}

/// Expanded/collapsed state per row.
///
/// Rows without an explicit override fall back to the default depth rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    default_depth: Option<usize>,
    overrides: FxHashMap<ItemId, bool>,
}

impl Expansion {
    /// Rows shallower than `default_depth` start expanded; `None` expands all.
    #[must_use]
    pub fn new(default_depth: Option<usize>) -> Self {
        Self {
            default_depth,
            overrides: FxHashMap::default(),
        }
    }

    /// Whether the row for `id` at `depth` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &ItemId, depth: usize) -> bool {
        self.overrides
            .get(id)
            .copied()
            .unwrap_or_else(|| self.default_depth.is_none_or(|limit| depth < limit))
    }

    /// Force a row open or closed.
    pub fn set(&mut self, id: ItemId, expanded: bool) {
        self.overrides.insert(id, expanded);
    }

    /// Flip a row and return its new state.
    pub fn toggle(&mut self, id: &ItemId, depth: usize) -> bool {
        let next = !self.is_expanded(id, depth);
        self.overrides.insert(id.clone(), next);
        next
    }

    /// Drop the override for a row.
    pub fn forget(&mut self, id: &ItemId) {
        self.overrides.remove(id);
    }
}

/// Flatten `store` into the rows currently visible under `expansion`.
#[must_use]
pub fn visible_rows<'a>(store: &'a TreeStore, expansion: &Expansion) -> Vec<Row<'a>> {
    let mut rows = Vec::new();
    let mut stack: Vec<(&'a Item, usize)> = store
        .get_all()
        .into_iter()
        .filter(|item| !store.contains(&item.parent))
        .rev()
        .map(|item| (item, 0))
        .collect();

    while let Some((item, depth)) = stack.pop() {
        let children = store.get_children(&item.id);
        let expanded = expansion.is_expanded(&item.id, depth);
        rows.push(Row {
            ordinal: rows.len() + 1,
            depth,
            item,
            has_children: !children.is_empty(),
            expanded,
        });
        if expanded {
            stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixture_items;

    fn labels<'a>(rows: &[Row<'a>]) -> Vec<&'a str> {
        rows.iter().map(|row| row.item.label.as_str()).collect()
    }

    #[test]
    fn fully_expanded_is_depth_first() {
        let store = TreeStore::new(fixture_items());
        let rows = visible_rows(&store, &Expansion::new(None));
        assert_eq!(
            labels(&rows),
            ["Item 1", "Item 2", "Item 4", "Item 7", "Item 8", "Item 5", "Item 6", "Item 3"]
        );
        let depths: Vec<usize> = rows.iter().map(|row| row.depth).collect();
        assert_eq!(depths, [0, 1, 2, 3, 3, 2, 2, 1]);
        let ordinals: Vec<usize> = rows.iter().map(|row| row.ordinal).collect();
        assert_eq!(ordinals, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn default_depth_limits_visible_rows() {
        let store = TreeStore::new(fixture_items());
        let counts: Vec<usize> = [Some(0), Some(1), Some(2), Some(3), None]
            .into_iter()
            .map(|depth| visible_rows(&store, &Expansion::new(depth)).len())
            .collect();
        assert_eq!(counts, [1, 3, 6, 8, 8]);
    }

    #[test]
    fn collapsing_renumbers_following_rows() {
        let store = TreeStore::new(fixture_items());
        let mut expansion = Expansion::new(None);
        assert!(!expansion.toggle(&ItemId::from("2"), 1));

        let rows = visible_rows(&store, &expansion);
        assert_eq!(labels(&rows), ["Item 1", "Item 2", "Item 3"]);
        assert_eq!(rows[2].ordinal, 3);
        assert!(rows[1].has_children);
        assert!(!rows[1].expanded);
    }

    #[test]
    fn override_beats_default_depth() {
        let store = TreeStore::new(fixture_items());
        let mut expansion = Expansion::new(Some(1));
        expansion.set(ItemId::from("2"), true);
        assert_eq!(visible_rows(&store, &expansion).len(), 6);

        expansion.forget(&ItemId::from("2"));
        assert_eq!(visible_rows(&store, &expansion).len(), 3);
    }

    #[test]
    fn orphans_show_at_top_level() {
        let store = TreeStore::new(vec![
            Item::new(1, ItemId::Null, "root"),
            Item::new(5, 99, "orphan"),
            Item::new(6, 5, "orphan child"),
        ]);
        let rows = visible_rows(&store, &Expansion::default());
        assert_eq!(labels(&rows), ["root", "orphan", "orphan child"]);
        assert_eq!(rows[1].depth, 0);
        assert!(!rows[0].has_children);
    }

    #[test]
    fn empty_store_has_no_rows() {
        let store = TreeStore::default();
        assert!(visible_rows(&store, &Expansion::default()).is_empty());
    }
}
