#![forbid(unsafe_code)]

//! Linear undo/redo log for treegrid.
//!
//! [`History`] stores owned copies of externally supplied records and a
//! single cursor marking the last applied one. It does not know what the
//! records describe; callers apply them back onto their own state.
//!
//! # Example
//! ```
//! use treegrid_history::History;
//!
//! let mut history = History::new();
//! history.set_record(&"rename");
//! history.set_record(&"insert");
//!
//! assert_eq!(history.get_record(true), Some(&"insert"));
//! assert_eq!(history.get_record(false), Some(&"insert"));
//! assert!(history.is_last_record());
//! ```

pub mod history;

pub use history::{History, HistoryConfig};
