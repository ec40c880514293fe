#![forbid(unsafe_code)]

//! Tree-structured grid model.
//!
//! This crate ties the item index and the undo log together into the model
//! behind an editable tree grid:
//!
//! - [`GridSession`] - store + history + row expansion, with add/edit/remove
//!   and undo/redo
//! - [`Record`] - one undoable structural change
//! - [`Row`] / [`visible_rows`] - the tree flattened into numbered rows
//! - [`ItemSource`] / [`FixtureSource`] - where the initial items come from
//! - [`GridConfig`] - labels, default expansion, store and history settings
//!
//! The store and the history never reference each other; the session is the
//! only place that applies history records back onto the store.
//!
//! # Example
//! ```
//! use treegrid::{GridConfig, GridSession, ItemId, fixture_items};
//!
//! let mut grid = GridSession::new(fixture_items(), GridConfig::default());
//! let added = grid.add_child(&ItemId::from(8));
//! grid.edit_label(&added.id, "renamed");
//!
//! assert_eq!(grid.rows().len(), 9);
//! grid.undo();
//! grid.undo();
//! assert_eq!(grid.rows().len(), 8);
//! ```

pub mod config;
pub mod record;
pub mod rows;
pub mod session;
pub mod source;

pub use config::{DEFAULT_NEW_ITEM_LABEL, GridConfig};
pub use record::{Action, Record};
pub use rows::{Expansion, Row, visible_rows};
pub use session::GridSession;
pub use source::{
    DEFAULT_LATENCY, FixtureSource, ItemSource, SourceError, SourceResult, check_items,
    fixture_items, join_fetch, spawn_fetch,
};
pub use treegrid_history::{History, HistoryConfig};
pub use treegrid_store::{Item, ItemId, StoreConfig, TreeStore};
