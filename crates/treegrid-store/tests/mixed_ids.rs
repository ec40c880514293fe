//! Store behavior on the mixed integer/string id fixture.
//!
//! The fixture mirrors the seed data of the grid: numeric ids with one
//! string id (`"2"`) in the middle of the hierarchy.

use treegrid_store::{Item, ItemId, StoreConfig, TreeStore};

// =============================================================================
// Fixtures
// =============================================================================

fn seed() -> Vec<Item> {
    vec![
        Item::new(1, ItemId::Null, "Item 1"),
        Item::new("2", 1, "Item 2"),
        Item::new(3, 1, "Item 3"),
        Item::new(4, "2", "Item 4"),
        Item::new(5, "2", "Item 5"),
        Item::new(6, "2", "Item 6"),
        Item::new(7, 4, "Item 7"),
        Item::new(8, 4, "Item 8"),
    ]
}

fn labels(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.label.clone()).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn numeric_and_string_ids_do_not_collide() {
    let mut store = TreeStore::new(seed());
    store.add_item(Item::new(2, 3, "numeric two"));

    assert_eq!(store.len(), 9);
    assert_eq!(store.get_item(&ItemId::from("2")).unwrap().label, "Item 2");
    assert_eq!(store.get_item(&ItemId::from(2)).unwrap().label, "numeric two");
    assert_eq!(labels(&store.get_children(&ItemId::from(3))), ["numeric two"]);
    assert_eq!(store.get_children(&ItemId::from(2)).len(), 0);
}

#[test]
fn small_example_groups_siblings_first() {
    let store = TreeStore::new(vec![
        Item::new(1, ItemId::Null, "a"),
        Item::new("2", 1, "b"),
        Item::new(3, 1, "c"),
        Item::new(4, "2", "d"),
    ]);

    assert_eq!(labels(&store.get_children(&ItemId::from(1))), ["b", "c"]);
    assert_eq!(labels(&store.get_all_children(&ItemId::from(1))), ["b", "c", "d"]);
}

#[test]
fn get_all_follows_insertion_order() {
    let mut store = TreeStore::new(seed());
    store.add_item(Item::new(9, 3, "Item 9"));
    store.remove_item(&ItemId::from(4));

    assert_eq!(
        labels(&store.get_all()),
        ["Item 1", "Item 2", "Item 3", "Item 5", "Item 6", "Item 9"]
    );
}

#[test]
fn removing_root_empties_store() {
    let mut store = TreeStore::new(seed());
    let removed = store.remove_item(&ItemId::from(1));

    assert_eq!(removed.len(), 8);
    assert_eq!(removed.last().unwrap().id, ItemId::from(1));
    assert!(store.is_empty());
    assert!(store.roots().is_empty());
}

#[test]
fn readding_removed_subtree_restores_lookup() {
    let mut store = TreeStore::new(seed());
    let mut removed = store.remove_item(&ItemId::from("2"));

    // Target is last; put it back first so its group exists before its children.
    if let Some(target) = removed.pop() {
        store.add_item(target);
    }
    for item in removed {
        store.add_item(item);
    }

    assert_eq!(store.len(), 8);
    assert_eq!(
        labels(&store.get_all_children(&ItemId::from("2"))),
        ["Item 4", "Item 5", "Item 6", "Item 7", "Item 8"]
    );
    assert_eq!(labels(&store.get_children(&ItemId::from(1))), ["Item 3", "Item 2"]);
}

#[test]
fn reparent_then_remove_old_parent_keeps_moved_item() {
    let config = StoreConfig::default().with_reparent_on_update(true);
    let mut store = TreeStore::with_config(seed(), config);

    store.update_item(Item::new(7, 3, "Item 7"));
    store.remove_item(&ItemId::from(4));

    assert!(store.get_item(&ItemId::from(7)).is_some());
    assert!(store.get_item(&ItemId::from(8)).is_none());
    assert_eq!(labels(&store.get_children(&ItemId::from(3))), ["Item 7"]);
}

#[test]
fn stale_group_survives_remove_of_old_parent_by_default() {
    let mut store = TreeStore::new(seed());

    // Item 7 claims a new parent but stays grouped under 4.
    store.update_item(Item::new(7, 3, "Item 7"));
    store.remove_item(&ItemId::from(4));

    assert!(store.get_item(&ItemId::from(7)).is_none());
    assert!(store.get_children(&ItemId::from(3)).is_empty());
}
