#![forbid(unsafe_code)]

//! Hierarchical item index for treegrid.
//!
//! - [`ItemId`] - integer / string / null identifier, never coerced
//! - [`Item`] - id, parent reference and label
//! - [`TreeStore`] - by-id lookup plus by-parent grouping with subtree
//!   traversal and removal
//! - [`StoreConfig`] - behavior switches (reparenting on update)
//!
//! # Example
//! ```
//! use treegrid_store::{Item, ItemId, TreeStore};
//!
//! let mut store = TreeStore::new([
//!     Item::new(1, ItemId::Null, "root"),
//!     Item::new(2, 1, "child"),
//! ]);
//! store.add_item(Item::new(3, 2, "grandchild"));
//!
//! assert_eq!(store.get_all_parents(&3.into()).len(), 3);
//! assert_eq!(store.get_all_children(&1.into()).len(), 2);
//! ```

pub mod item;
pub mod store;

pub use item::{Item, ItemId};
pub use store::{StoreConfig, TreeStore};
