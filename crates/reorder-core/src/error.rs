//! Outcomes and errors of a move-and-commit cycle.

use thiserror::Error;

/// Type-erased error from a remote store
pub type BoxError = Box<dyn std::error::Error + 'static>;

/// How a move intent ended, when it did not fail
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome<Id> {
    /// The intent referenced missing or equal ids; nothing changed
    Unchanged,
    /// The store confirmed this order
    Committed(Vec<Id>),
    /// The commit resolved after the collection was reloaded or dropped
    Discarded,
}

/// Errors surfaced by the reordering core
#[derive(Debug, Error)]
pub enum ReorderError {
    /// Another commit is still in flight; the intent was not applied
    #[error("a previous reorder is still being saved")]
    CommitInFlight,

    /// The remote commit failed and the previous order was restored
    #[error("failed to save the new order: {source}")]
    CommitFailed {
        #[source]
        source: BoxError,
    },

    /// Fetching the collection failed; nothing is shown
    #[error("failed to load items: {source}")]
    LoadFailed {
        #[source]
        source: BoxError,
    },

    /// A loaded payload repeated an id
    #[error("duplicate item id {0}")]
    DuplicateId(String),
}
