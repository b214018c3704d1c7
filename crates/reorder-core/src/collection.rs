//! Ordered Collection State Machine
//!
//! Holds the visible order and at most one pending commit snapshot.
//! Every transition is synchronous; the async driver lives in `controller`.

use std::collections::HashSet;

use crate::entity::{order_of, Entity};
use crate::error::ReorderError;
use crate::intent::{relocate, MoveIntent};

/// Identifies one move-and-commit cycle.
///
/// Tickets are never reused, so a resolution that arrives after a reload
/// cannot touch the reloaded state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitTicket(u64);

/// Commit phase of the collection
#[derive(Clone, Debug)]
pub enum Phase<T> {
    Stable,
    /// An optimistic order is visible; `snapshot` is the order before it
    PendingCommit {
        ticket: CommitTicket,
        snapshot: Vec<T>,
    },
    /// A reload replaced the optimistic order while its commit was still in
    /// flight. No snapshot is kept, but new moves wait for `ticket` to settle.
    Superseded { ticket: CommitTicket },
}

impl<T> Default for Phase<T> {
    fn default() -> Self {
        Self::Stable
    }
}

/// An optimistic move that still has to be committed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedMove<Id> {
    pub ticket: CommitTicket,
    /// The new order, as the persistence payload
    pub order: Vec<Id>,
}

/// Ordered sequence of unique items with a single-pending-commit invariant
#[derive(Clone, Debug)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
    phase: Phase<T>,
    next_ticket: u64,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Stable,
            next_ticket: 0,
        }
    }
}

impl<T: Entity> OrderedCollection<T> {
    pub fn new(items: Vec<T>) -> Result<Self, ReorderError> {
        let mut collection = Self::default();
        collection.replace(items)?;
        Ok(collection)
    }

    /// Items in visible order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn order(&self) -> Vec<T::Id> {
        order_of(&self.items)
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::PendingCommit { .. })
    }

    /// Whether a commit request may still be outstanding at the store
    pub fn is_committing(&self) -> bool {
        !matches!(self.phase, Phase::Stable)
    }

    /// Swap in a freshly loaded sequence.
    ///
    /// Supersedes any pending commit: its snapshot is dropped and its ticket
    /// goes stale, but moves stay blocked until that ticket settles. A
    /// sequence with a repeated id is refused and the current state is kept.
    pub fn replace(&mut self, items: Vec<T>) -> Result<(), ReorderError> {
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id())) {
            return Err(ReorderError::DuplicateId(format!("{:?}", dup.id())));
        }
        self.items = items;
        if let Phase::PendingCommit { ticket, .. } = self.phase {
            self.phase = Phase::Superseded { ticket };
        }
        Ok(())
    }

    /// Apply `intent` optimistically and enter `PendingCommit`.
    ///
    /// Returns `Ok(None)` for a no-op intent, which leaves the phase alone.
    pub fn begin_move(
        &mut self,
        intent: &MoveIntent<T::Id>,
    ) -> Result<Option<PreparedMove<T::Id>>, ReorderError> {
        if self.is_committing() {
            return Err(ReorderError::CommitInFlight);
        }

        let mut next = self.items.clone();
        if !relocate(&mut next, intent) {
            return Ok(None);
        }

        let ticket = CommitTicket(self.next_ticket);
        self.next_ticket += 1;
        let snapshot = std::mem::replace(&mut self.items, next);
        self.phase = Phase::PendingCommit { ticket, snapshot };

        Ok(Some(PreparedMove {
            ticket,
            order: self.order(),
        }))
    }

    /// Keep the optimistic order. Returns `false` for a stale ticket.
    pub fn confirm(&mut self, ticket: CommitTicket) -> bool {
        match &self.phase {
            Phase::PendingCommit { ticket: pending, .. } if *pending == ticket => {
                self.phase = Phase::Stable;
                true
            }
            _ => {
                self.settle_superseded(ticket);
                false
            }
        }
    }

    /// Restore the snapshot. Returns `false` for a stale ticket.
    pub fn roll_back(&mut self, ticket: CommitTicket) -> bool {
        match std::mem::take(&mut self.phase) {
            Phase::PendingCommit { ticket: pending, snapshot } if pending == ticket => {
                self.items = snapshot;
                true
            }
            other => {
                self.phase = other;
                self.settle_superseded(ticket);
                false
            }
        }
    }

    fn settle_superseded(&mut self, ticket: CommitTicket) {
        if matches!(self.phase, Phase::Superseded { ticket: stale } if stale == ticket) {
            self.phase = Phase::Stable;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Entity for Row {
        type Id = &'static str;

        fn id(&self) -> &&'static str {
            &self.0
        }
    }

    fn rows() -> Vec<Row> {
        ["a", "b", "c", "d"].into_iter().map(Row).collect()
    }

    #[test]
    fn test_begin_move_is_optimistic() {
        let mut collection = OrderedCollection::new(rows()).unwrap();
        let prepared = collection.begin_move(&MoveIntent::new("a", "c")).unwrap().unwrap();

        assert_eq!(prepared.order, vec!["b", "c", "a", "d"]);
        assert_eq!(collection.order(), vec!["b", "c", "a", "d"]);
        assert!(collection.is_pending());
    }

    #[test]
    fn test_roll_back_restores_exact_items() {
        let original = rows();
        let mut collection = OrderedCollection::new(original.clone()).unwrap();
        let prepared = collection.begin_move(&MoveIntent::new("a", "c")).unwrap().unwrap();

        assert!(collection.roll_back(prepared.ticket));
        assert_eq!(collection.items(), original.as_slice());
        assert!(!collection.is_pending());
    }

    #[test]
    fn test_confirm_keeps_optimistic_order() {
        let mut collection = OrderedCollection::new(rows()).unwrap();
        let prepared = collection.begin_move(&MoveIntent::new("d", "a")).unwrap().unwrap();

        assert!(collection.confirm(prepared.ticket));
        assert_eq!(collection.order(), vec!["d", "a", "b", "c"]);
        assert!(!collection.is_pending());
    }

    #[test]
    fn test_second_move_rejected_while_pending() {
        let mut collection = OrderedCollection::new(rows()).unwrap();
        collection.begin_move(&MoveIntent::new("a", "b")).unwrap();

        let err = collection.begin_move(&MoveIntent::new("c", "d")).unwrap_err();
        assert!(matches!(err, ReorderError::CommitInFlight));
        assert_eq!(collection.order(), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_noop_intent_stays_stable() {
        let mut collection = OrderedCollection::new(rows()).unwrap();
        assert!(collection.begin_move(&MoveIntent::new("a", "a")).unwrap().is_none());
        assert!(collection.begin_move(&MoveIntent::new("a", "zz")).unwrap().is_none());
        assert!(!collection.is_pending());
    }

    #[test]
    fn test_replace_makes_pending_ticket_stale() {
        let mut collection = OrderedCollection::new(rows()).unwrap();
        let prepared = collection.begin_move(&MoveIntent::new("a", "d")).unwrap().unwrap();

        collection.replace(rows()[..2].to_vec()).unwrap();
        assert!(!collection.roll_back(prepared.ticket));
        assert!(!collection.confirm(prepared.ticket));
        assert_eq!(collection.order(), vec!["a", "b"]);
    }

    #[test]
    fn test_superseded_commit_blocks_moves_until_settled() {
        let mut collection = OrderedCollection::new(rows()).unwrap();
        let first = collection.begin_move(&MoveIntent::new("a", "c")).unwrap().unwrap();

        collection.replace(rows()).unwrap();
        assert!(!collection.is_pending());
        assert!(collection.is_committing());
        let err = collection.begin_move(&MoveIntent::new("c", "a")).unwrap_err();
        assert!(matches!(err, ReorderError::CommitInFlight));
        assert_eq!(collection.order(), vec!["a", "b", "c", "d"]);

        // a reload while superseded keeps the marker
        collection.replace(rows()).unwrap();
        assert!(collection.is_committing());

        assert!(!collection.confirm(first.ticket));
        assert!(!collection.is_committing());
        assert_eq!(collection.order(), vec!["a", "b", "c", "d"]);
        assert!(collection.begin_move(&MoveIntent::new("c", "a")).unwrap().is_some());
    }

    #[test]
    fn test_failed_superseded_commit_keeps_reloaded_items() {
        let mut collection = OrderedCollection::new(rows()).unwrap();
        let first = collection.begin_move(&MoveIntent::new("a", "c")).unwrap().unwrap();
        collection.replace(rows()[..3].to_vec()).unwrap();

        assert!(!collection.roll_back(first.ticket));
        assert!(!collection.is_committing());
        assert_eq!(collection.order(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_ids_refused() {
        let mut items = rows();
        items.push(Row("b"));

        let err = OrderedCollection::new(items).unwrap_err();
        assert_eq!(err.to_string(), "duplicate item id \"b\"");
    }
}
