#![forbid(unsafe_code)]

//! Grid session configuration.

use treegrid_history::HistoryConfig;
use treegrid_store::StoreConfig;

/// Label given to rows created through [`GridSession::add_child`].
///
/// [`GridSession::add_child`]: crate::GridSession::add_child
pub const DEFAULT_NEW_ITEM_LABEL: &str = "New item";

/// Configuration for a [`GridSession`](crate::GridSession).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Label for newly added rows.
    pub new_item_label: String,
    /// Rows shallower than this depth start expanded. `None` expands every level.
    pub default_expanded: Option<usize>,
    /// Tree store behavior.
    pub store: StoreConfig,
    /// Undo log capacity.
    pub history: HistoryConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            new_item_label: DEFAULT_NEW_ITEM_LABEL.to_string(),
            default_expanded: None,
            store: StoreConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl GridConfig {
    /// Override the label of newly added rows.
    #[must_use]
    pub fn with_new_item_label(mut self, label: impl Into<String>) -> Self {
        self.new_item_label = label.into();
        self
    }

    /// Expand rows shallower than `depth` by default (`None` = all).
    #[must_use]
    pub fn with_default_expanded(mut self, depth: Option<usize>) -> Self {
        self.default_expanded = depth;
        self
    }

    /// Override the tree store configuration.
    #[must_use]
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    /// Override the undo log configuration.
    #[must_use]
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }
}
