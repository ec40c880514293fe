#![forbid(unsafe_code)]

//! Item sources used to seed a grid.
//!
//! [`ItemSource`] is the seam for "fetch all items". [`FixtureSource`] serves
//! a fixed collection after a simulated latency and never fails.
//! [`spawn_fetch`] runs one fetch on a background thread: no retry, no
//! cancellation. [`join_fetch`] waits for it, and [`check_items`] rejects
//! payloads the store would silently drop.

use std::fmt;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;
use treegrid_store::{Item, ItemId};

/// Default simulated latency of [`FixtureSource`].
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// Errors a source can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The backing store could not be reached.
    Unavailable(String),
    /// The payload was malformed.
    Invalid(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(msg) => write!(f, "item source unavailable: {msg}"),
            SourceError::Invalid(msg) => write!(f, "invalid item payload: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Something that can produce the full flat item collection.
pub trait ItemSource: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Fetch every item. Blocks for as long as the source needs.
    fn fetch_all(&self) -> SourceResult<Vec<Item>>;
}

/// Seed data: one root, a string-id branch and a nested group.
#[must_use]
pub fn fixture_items() -> Vec<Item> {
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

/// In-memory source with a fixed delay.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    items: Vec<Item>,
    latency: Duration,
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureSource {
    /// Serve [`fixture_items`] after [`DEFAULT_LATENCY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(fixture_items())
    }

    /// Serve the given items after [`DEFAULT_LATENCY`].
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency. Zero disables the delay.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Simulated latency.
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl ItemSource for FixtureSource {
    fn name(&self) -> &str {
        "FixtureSource"
    }

    fn fetch_all(&self) -> SourceResult<Vec<Item>> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        debug!(items = self.items.len(), latency = ?self.latency, "fixture fetch");
        Ok(self.items.clone())
    }
}

/// Run one fetch on a background thread.
pub fn spawn_fetch<S>(source: S) -> JoinHandle<SourceResult<Vec<Item>>>
where
    S: ItemSource + 'static,
{
    thread::spawn(move || {
        debug!(source = source.name(), "fetch started");
        source.fetch_all()
    })
}

/// Wait for a [`spawn_fetch`] handle. A panicked fetch reports
/// [`SourceError::Unavailable`].
pub fn join_fetch(handle: JoinHandle<SourceResult<Vec<Item>>>) -> SourceResult<Vec<Item>> {
    handle
        .join()
        .map_err(|_| SourceError::Unavailable("fetch thread panicked".into()))?
}

/// Reject a payload containing an item with a `Null` id.
pub fn check_items(items: &[Item]) -> SourceResult<()> {
    match items.iter().position(|item| item.id.is_null()) {
        Some(index) => Err(SourceError::Invalid(format!("item {index} has a null id"))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn fixture_has_mixed_ids() {
        let items = fixture_items();
        assert_eq!(items.len(), 8);
        assert_eq!(items[1].id, ItemId::from("2"));
        assert_eq!(items[3].parent, ItemId::from("2"));
    }

    #[test]
    fn fetch_waits_for_latency() {
        let source = FixtureSource::new().with_latency(Duration::from_millis(20));
        let start = Instant::now();
        let items = source.fetch_all().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(items, fixture_items());
    }

    #[test]
    fn spawned_fetch_returns_items() {
        let source = FixtureSource::with_items(vec![Item::new(1, ItemId::Null, "only")])
            .with_latency(Duration::ZERO);
        let items = spawn_fetch(source).join().unwrap().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "only");
    }

    struct BrokenSource;

    impl ItemSource for BrokenSource {
        fn name(&self) -> &str {
            "BrokenSource"
        }

        fn fetch_all(&self) -> SourceResult<Vec<Item>> {
            panic!("connection reset");
        }
    }

    #[test]
    fn joined_fetch_returns_items() {
        let source = FixtureSource::new().with_latency(Duration::ZERO);
        assert_eq!(join_fetch(spawn_fetch(source)).unwrap(), fixture_items());
    }

    #[test]
    fn panicked_fetch_is_unavailable() {
        let err = join_fetch(spawn_fetch(BrokenSource)).unwrap_err();
        assert_eq!(err, SourceError::Unavailable("fetch thread panicked".into()));
    }

    #[test]
    fn null_ids_are_invalid() {
        assert!(check_items(&fixture_items()).is_ok());
        let items = vec![
            Item::new(1, ItemId::Null, "root"),
            Item::new(ItemId::Null, 1, "nameless"),
        ];
        assert_eq!(
            check_items(&items),
            Err(SourceError::Invalid("item 1 has a null id".into()))
        );
    }

    #[test]
    fn error_messages_name_the_cause() {
        let err = SourceError::Unavailable("timeout".into());
        assert_eq!(err.to_string(), "item source unavailable: timeout");
        let err = SourceError::Invalid("missing id".into());
        assert_eq!(err.to_string(), "invalid item payload: missing id");
    }
}
