#![forbid(unsafe_code)]

//! Undoable structural edits.
//!
//! A [`Record`] carries the data needed to roll one change back
//! (`old_value`) and forward (`new_value`).
//!
//! | Action | `old_value` | `new_value` |
//! |--------|-------------|-------------|
//! | edit   | item before the edit | item after the edit |
//! | add    | the added item | the added item |
//! | remove | removed subtree, target last | the removed target |

use std::fmt;

use treegrid_store::Item;

/// Kind of structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Edit,
    Add,
    Remove,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Edit => "edit",
            Self::Add => "add",
            Self::Remove => "remove",
        })
    }
}

/// One entry in the edit history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "action", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum Record {
    /// An item's fields changed.
    Edit { old_value: Item, new_value: Item },
    /// An item was inserted. Both values hold the inserted item.
    Add { old_value: Item, new_value: Item },
    /// An item and its descendants were removed.
    Remove { old_value: Vec<Item>, new_value: Item },
}

impl Record {
    /// Record an edit from `before` to `after`.
    #[must_use]
    pub fn edit(before: Item, after: Item) -> Self {
        Self::Edit {
            old_value: before,
            new_value: after,
        }
    }

    /// Record an insertion.
    #[must_use]
    pub fn add(item: Item) -> Self {
        Self::Add {
            old_value: item.clone(),
            new_value: item,
        }
    }

    /// Record a subtree removal. `subtree` includes the target.
    #[must_use]
    pub fn remove(subtree: Vec<Item>, target: Item) -> Self {
        Self::Remove {
            old_value: subtree,
            new_value: target,
        }
    }

    /// Kind of change.
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Self::Edit { .. } => Action::Edit,
            Self::Add { .. } => Action::Add,
            Self::Remove { .. } => Action::Remove,
        }
    }

    /// The item the change is about.
    #[must_use]
    pub fn target(&self) -> &Item {
        match self {
            Self::Edit { new_value, .. }
            | Self::Add { new_value, .. }
            | Self::Remove { new_value, .. } => new_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treegrid_store::ItemId;

    #[test]
    fn add_record_mirrors_value() {
        let item = Item::new(3, 2, "new");
        let record = Record::add(item.clone());
        assert_eq!(record.action(), Action::Add);
        assert_eq!(
            record,
            Record::Add {
                old_value: item.clone(),
                new_value: item
            }
        );
    }

    #[test]
    fn target_is_new_value() {
        let before = Item::new(2, 1, "old");
        let after = before.with_label("new");
        let record = Record::edit(before, after.clone());
        assert_eq!(record.target(), &after);
        assert_eq!(record.action().to_string(), "edit");

        let root = Item::new(1, ItemId::Null, "root");
        let record = Record::remove(vec![root.clone()], root.clone());
        assert_eq!(record.target(), &root);
        assert_eq!(record.action(), Action::Remove);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_action_tag() {
        let item = Item::new(3, 2, "new");
        let json = serde_json::to_value(Record::add(item)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "add",
                "oldValue": {"id": 3, "parent": 2, "label": "new"},
                "newValue": {"id": 3, "parent": 2, "label": "new"},
            })
        );
    }
}
