//! Reorder Core
//!
//! Optimistic reordering of an identified collection:
//! - entity: identity contract for orderable items
//! - intent: move intents and the relocation rule
//! - collection: the two-phase state machine (Stable / PendingCommit)
//! - controller: async driver that commits through an injected store

mod collection;
mod controller;
mod entity;
mod error;
mod intent;

pub use collection::{CommitTicket, OrderedCollection, Phase, PreparedMove};
pub use controller::{OrderCommitter, ReorderController};
pub use entity::{order_of, Entity};
pub use error::{BoxError, MoveOutcome, ReorderError};
pub use intent::{relocate, MoveIntent};
