#![forbid(unsafe_code)]

//! Single-branch undo/redo log.
//!
//! The log is a vector of records plus a cursor pointing at the last applied
//! record (`current_index`, `-1` when nothing is applied).
//!
//! # Navigation
//!
//! Undo and redo are deliberately asymmetric:
//!
//! | Direction | Order of operations | Caller applies |
//! |-----------|---------------------|----------------|
//! | undo (`is_prev = true`) | read at cursor, then decrement | the record's old value |
//! | redo (`is_prev = false`) | increment, then read at cursor | the record's new value |
//!
//! This keeps the cursor equal to "index of the last applied record" after
//! either step. Stepping past either end returns `None` and leaves the cursor
//! where it was.
//!
//! Writing a record while the cursor is behind the end discards every record
//! after the cursor before appending.

use tracing::{debug, trace};

/// Capacity settings for a [`History`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of records kept. `None` keeps everything.
    ///
    /// A capacity of zero is treated as one.
    pub max_records: Option<usize>,
}

impl HistoryConfig {
    /// Bound the log to `max` records, evicting the oldest first.
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }

    /// Keep every record.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_records = None;
        self
    }
}

/// Linear undo/redo log over owned record copies.
#[derive(Debug, Clone)]
pub struct History<T> {
    records: Vec<T>,
    /// Index of the last applied record.
    cursor: Option<usize>,
    config: HistoryConfig,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Create an empty, unbounded log.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Create an empty log with explicit configuration.
    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            records: Vec::new(),
            cursor: None,
            config,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    /// Cursor position; `-1` when no record is applied.
    #[must_use]
    pub fn current_index(&self) -> isize {
        self.cursor.map_or(-1, |idx| idx as isize)
    }

    /// Whether the cursor sits before the first record (nothing to undo).
    #[must_use]
    pub fn is_first_record(&self) -> bool {
        self.cursor.is_none()
    }

    /// Whether the cursor sits on the newest record (nothing to redo).
    #[must_use]
    pub fn is_last_record(&self) -> bool {
        match self.cursor {
            None => self.records.is_empty(),
            Some(idx) => idx + 1 >= self.records.len(),
        }
    }

    /// Number of stored records, redo entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Drop every record and reset the cursor.
    pub fn clear(&mut self) {
        self.records.clear();
        self.cursor = None;
    }

    /// Navigate one step. `is_prev = true` is undo, `false` is redo.
    pub fn get_record(&mut self, is_prev: bool) -> Option<&T> {
        if is_prev {
            self.step_back()
        } else {
            self.step_forward()
        }
    }

    /// Undo step: return the record at the cursor, then move the cursor back.
    pub fn step_back(&mut self) -> Option<&T> {
        let idx = self.cursor?;
        self.cursor = idx.checked_sub(1);
        trace!(index = self.current_index(), "history step back");
        self.records.get(idx)
    }

    /// Redo step: move the cursor forward, then return the record there.
    pub fn step_forward(&mut self) -> Option<&T> {
        let next = self.cursor.map_or(0, |idx| idx + 1);
        if next >= self.records.len() {
            return None;
        }
        self.cursor = Some(next);
        trace!(index = next, "history step forward");
        self.records.get(next)
    }
}

impl<T: Clone> History<T> {
    /// Store an independent copy of `value` after the cursor.
    ///
    /// Any records after the cursor (the redo branch) are discarded.
    pub fn set_record(&mut self, value: &T) {
        let next = self.cursor.map_or(0, |idx| idx + 1);
        let discarded = self.records.len().saturating_sub(next);
        self.records.truncate(next);
        self.records.push(value.clone());
        self.cursor = Some(next);

        if let Some(max) = self.config.max_records {
            let max = max.max(1);
            if self.records.len() > max {
                let evicted = self.records.len() - max;
                self.records.drain(..evicted);
                self.cursor = Some(self.records.len() - 1);
                debug!(evicted, max, "history evicted oldest records");
            }
        }

        trace!(index = self.current_index(), discarded, "history record set");
    }
}
