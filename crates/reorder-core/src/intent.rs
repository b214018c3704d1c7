//! Move Intents
//!
//! A move intent asks to relocate one item to the position another item
//! currently occupies.

use crate::entity::Entity;

/// Relocate `source` to the position currently held by `target`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveIntent<Id> {
    pub source: Id,
    pub target: Id,
}

impl<Id: PartialEq> MoveIntent<Id> {
    pub fn new(source: Id, target: Id) -> Self {
        Self { source, target }
    }

    /// Moving an item onto itself never changes the order
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

/// Apply `intent` to `items` in place.
///
/// The source is removed and reinserted at the index the target held before
/// the removal, so every item between the two positions shifts by one slot.
/// Returns `false` (leaving `items` untouched) when the intent is an identity
/// move or either id is absent.
pub fn relocate<T: Entity>(items: &mut Vec<T>, intent: &MoveIntent<T::Id>) -> bool {
    if intent.is_identity() {
        return false;
    }
    let from = items.iter().position(|item| item.id() == &intent.source);
    let to = items.iter().position(|item| item.id() == &intent.target);
    let (Some(from), Some(to)) = (from, to) else {
        return false;
    };

    let moved = items.remove(from);
    items.insert(to, moved);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::order_of;

    #[derive(Clone, Debug, PartialEq)]
    struct Card(u32);

    impl Entity for Card {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.0
        }
    }

    fn cards(ids: &[u32]) -> Vec<Card> {
        ids.iter().copied().map(Card).collect()
    }

    #[test]
    fn test_move_later_item_forward() {
        let mut items = cards(&[1, 2, 3, 4, 5]);
        assert!(relocate(&mut items, &MoveIntent::new(5, 2)));
        assert_eq!(order_of(&items), vec![1, 5, 2, 3, 4]);
    }

    #[test]
    fn test_move_earlier_item_backward() {
        let mut items = cards(&[1, 2, 3, 4]);
        assert!(relocate(&mut items, &MoveIntent::new(1, 3)));
        assert_eq!(order_of(&items), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_adjacent_move_swaps_neighbours() {
        let mut items = cards(&[1, 2, 3]);
        assert!(relocate(&mut items, &MoveIntent::new(1, 2)));
        assert_eq!(order_of(&items), vec![2, 1, 3]);
    }

    #[test]
    fn test_identity_move_is_noop() {
        let mut items = cards(&[1, 2, 3]);
        assert!(!relocate(&mut items, &MoveIntent::new(2, 2)));
        assert_eq!(order_of(&items), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_ids_are_noop() {
        let mut items = cards(&[1, 2, 3]);
        assert!(!relocate(&mut items, &MoveIntent::new(9, 2)));
        assert!(!relocate(&mut items, &MoveIntent::new(1, 9)));
        assert_eq!(order_of(&items), vec![1, 2, 3]);
    }

    #[test]
    fn test_every_move_is_a_permutation() {
        let original = cards(&[10, 20, 30, 40, 50, 60]);
        for source in order_of(&original) {
            for target in order_of(&original) {
                let mut items = original.clone();
                relocate(&mut items, &MoveIntent::new(source, target));

                let mut sorted = order_of(&items);
                sorted.sort_unstable();
                assert_eq!(sorted, order_of(&original), "{source} -> {target}");

                // source lands exactly where the target was
                let target_index = original.iter().position(|c| c.0 == target).unwrap();
                assert_eq!(items[target_index].0, source);
            }
        }
    }
}
