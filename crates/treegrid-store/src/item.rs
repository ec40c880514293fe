#![forbid(unsafe_code)]

//! Item identifiers and records.
//!
//! Identifiers are a closed sum over integer, string and the `Null` root
//! sentinel. Variants never coerce into each other: `ItemId::Int(2)` and
//! `ItemId::Str("2")` are distinct keys.
//!
//! # Example
//! ```
//! use treegrid_store::{Item, ItemId};
//!
//! let root = Item::new(1, ItemId::Null, "root");
//! let child = Item::new("2", 1, "child");
//!
//! assert!(root.is_root());
//! assert_eq!(child.parent, root.id);
//! assert_ne!(ItemId::from(2), ItemId::from("2"));
//! ```

use std::fmt;

/// Identifier of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemId {
    /// Root sentinel. Never resolves to a stored item.
    #[default]
    Null,
    /// Numeric identifier.
    Int(i64),
    /// String identifier.
    Str(String),
}

impl ItemId {
    /// Whether this is the root sentinel.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Integer value, if this is a numeric id.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<ItemId>> From<Option<T>> for ItemId {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A labelled node in the hierarchy.
///
/// `parent` is a forward reference: it may name an id that is not stored
/// (yet), in which case the item simply has no discoverable ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique identifier within a store.
    pub id: ItemId,
    /// Owning item, or [`ItemId::Null`] for a root.
    pub parent: ItemId,
    /// Display string.
    pub label: String,
}

impl Item {
    /// Create an item.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, parent: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            label: label.into(),
        }
    }

    /// Whether this item hangs directly off the root sentinel.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_null()
    }

    /// Copy of this item with a different label.
    #[must_use]
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..self.clone()
        }
    }
}
