//! Core trait for orderable items.
//!
//! Identity is the only attribute the reordering core looks at.

use std::fmt::Debug;
use std::hash::Hash;

/// An item with a stable, unique identifier
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash + Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Ids of `items` in sequence order
pub fn order_of<T: Entity>(items: &[T]) -> Vec<T::Id> {
    items.iter().map(|item| item.id().clone()).collect()
}
