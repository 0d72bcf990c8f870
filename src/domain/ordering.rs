//! Order maintenance shared by lists and cards.
//!
//! Every positioned record belongs to a scope: all lists of a board, or all
//! cards that share one list. Within a scope the positions are expected to be
//! exactly `0..count`. The helpers here either keep that property intact
//! (`shift_range`, `renumber`) or compute positions that respect it
//! (`clamp_position`, `tail_position`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A record that carries a zero-based position within its scope
pub trait Positioned {
    fn position(&self) -> usize;
    fn set_position(&mut self, position: usize);
}

/// How the next append slot of a scope is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailPlacement {
    /// One past the largest position, with the largest position floored at
    /// zero. An empty scope therefore receives position 1.
    #[default]
    Legacy,
    /// One past the largest position; an empty scope receives position 0.
    Dense,
}

/// Shifts the siblings lying between `old` and `new` so that a record moving
/// from `old` to `new` leaves no gap and no collision behind it.
///
/// Moving down (`old < new`) pulls every sibling in `(old, new]` up by one;
/// moving up (`old > new`) pushes every sibling in `[new, old)` down by one.
/// The moving record itself is left alone (its position is `old`, which lies
/// outside both ranges) and must be set to `new` by the caller.
///
/// Returns the number of siblings that were shifted.
pub fn shift_range<'a, T, I>(siblings: I, old: usize, new: usize) -> usize
where
    T: Positioned + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let mut shifted = 0;
    match old.cmp(&new) {
        Ordering::Equal => {}
        Ordering::Less => {
            for sibling in siblings {
                let pos = sibling.position();
                if pos > old && pos <= new {
                    sibling.set_position(pos - 1);
                    shifted += 1;
                }
            }
        }
        Ordering::Greater => {
            for sibling in siblings {
                let pos = sibling.position();
                if pos >= new && pos < old {
                    sibling.set_position(pos + 1);
                    shifted += 1;
                }
            }
        }
    }
    shifted
}

/// Clamps a requested position into `[0, count - 1]`.
///
/// An empty scope clamps everything to 0.
pub fn clamp_position(requested: usize, count: usize) -> usize {
    requested.min(count.saturating_sub(1))
}

/// Reassigns `0..items.len()` following the current position order.
///
/// The sort is stable, so records sharing a position keep their relative
/// order. Returns how many records changed position.
pub fn renumber<T: Positioned>(items: &mut [&mut T]) -> usize {
    items.sort_by_key(|item| item.position());

    let mut changed = 0;
    for (index, item) in items.iter_mut().enumerate() {
        if item.position() != index {
            item.set_position(index);
            changed += 1;
        }
    }
    changed
}

/// Position for a record appended at the tail of a scope holding `existing`
pub fn tail_position<I>(existing: I, placement: TailPlacement) -> usize
where
    I: IntoIterator<Item = usize>,
{
    let max = existing.into_iter().max();
    match placement {
        TailPlacement::Legacy => max.unwrap_or(0) + 1,
        TailPlacement::Dense => max.map_or(0, |m| m + 1),
    }
}

/// True when the positions, taken as a set, are exactly `0..count`
pub fn is_contiguous<I>(positions: I) -> bool
where
    I: IntoIterator<Item = usize>,
{
    let mut sorted: Vec<usize> = positions.into_iter().collect();
    sorted.sort_unstable();
    sorted.iter().enumerate().all(|(index, &pos)| index == pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Slot {
        name: &'static str,
        pos: usize,
    }

    impl Positioned for Slot {
        fn position(&self) -> usize {
            self.pos
        }

        fn set_position(&mut self, position: usize) {
            self.pos = position;
        }
    }

    fn slots(names: &[&'static str]) -> Vec<Slot> {
        names
            .iter()
            .enumerate()
            .map(|(pos, name)| Slot { name: *name, pos })
            .collect()
    }

    fn position_of(items: &[Slot], name: &str) -> usize {
        items.iter().find(|s| s.name == name).unwrap().pos
    }

    #[test]
    fn test_shift_range_moving_down() {
        let mut items = slots(&["a", "b", "c", "d"]);

        let shifted = shift_range(items.iter_mut(), 0, 2);
        items[0].set_position(2);

        assert_eq!(shifted, 2);
        assert_eq!(position_of(&items, "b"), 0);
        assert_eq!(position_of(&items, "c"), 1);
        assert_eq!(position_of(&items, "a"), 2);
        assert_eq!(position_of(&items, "d"), 3);
    }

    #[test]
    fn test_shift_range_moving_up() {
        let mut items = slots(&["a", "b", "c", "d"]);

        let shifted = shift_range(items.iter_mut(), 3, 1);
        items[3].set_position(1);

        assert_eq!(shifted, 2);
        assert_eq!(position_of(&items, "a"), 0);
        assert_eq!(position_of(&items, "d"), 1);
        assert_eq!(position_of(&items, "b"), 2);
        assert_eq!(position_of(&items, "c"), 3);
    }

    #[test]
    fn test_shift_range_same_position_is_noop() {
        let mut items = slots(&["a", "b", "c"]);
        let before = items.clone();

        assert_eq!(shift_range(items.iter_mut(), 1, 1), 0);
        assert_eq!(items, before);
    }

    #[test]
    fn test_shift_range_keeps_contiguity() {
        let mut items = slots(&["a", "b", "c", "d", "e"]);

        shift_range(items.iter_mut(), 1, 3);
        items[1].set_position(3);

        assert!(is_contiguous(items.iter().map(|s| s.pos)));
    }

    #[test]
    fn test_clamp_position() {
        assert_eq!(clamp_position(0, 3), 0);
        assert_eq!(clamp_position(2, 3), 2);
        assert_eq!(clamp_position(10, 3), 2);
        assert_eq!(clamp_position(5, 0), 0);
        assert_eq!(clamp_position(5, 1), 0);
    }

    #[test]
    fn test_renumber_sorts_by_position() {
        let mut items = vec![
            Slot { name: "x", pos: 7 },
            Slot { name: "y", pos: 2 },
            Slot { name: "z", pos: 4 },
        ];

        let mut scope: Vec<&mut Slot> = items.iter_mut().collect();
        let changed = renumber(&mut scope);

        assert_eq!(changed, 3);
        assert_eq!(position_of(&items, "y"), 0);
        assert_eq!(position_of(&items, "z"), 1);
        assert_eq!(position_of(&items, "x"), 2);
    }

    #[test]
    fn test_renumber_is_stable_for_ties() {
        let mut items = vec![
            Slot { name: "first", pos: 1 },
            Slot { name: "second", pos: 1 },
            Slot { name: "zero", pos: 0 },
        ];

        let mut scope: Vec<&mut Slot> = items.iter_mut().collect();
        renumber(&mut scope);

        assert_eq!(position_of(&items, "zero"), 0);
        assert_eq!(position_of(&items, "first"), 1);
        assert_eq!(position_of(&items, "second"), 2);
    }

    #[test]
    fn test_renumber_contiguous_scope_changes_nothing() {
        let mut items = slots(&["a", "b", "c"]);
        let mut scope: Vec<&mut Slot> = items.iter_mut().collect();

        assert_eq!(renumber(&mut scope), 0);
    }

    #[test]
    fn test_renumber_empty_scope() {
        let mut scope: Vec<&mut Slot> = Vec::new();
        assert_eq!(renumber(&mut scope), 0);
    }

    #[test]
    fn test_tail_position_legacy() {
        assert_eq!(tail_position([], TailPlacement::Legacy), 1);
        assert_eq!(tail_position([0], TailPlacement::Legacy), 1);
        assert_eq!(tail_position([0, 1, 2], TailPlacement::Legacy), 3);
    }

    #[test]
    fn test_tail_position_dense() {
        assert_eq!(tail_position([], TailPlacement::Dense), 0);
        assert_eq!(tail_position([0], TailPlacement::Dense), 1);
        assert_eq!(tail_position([2, 0, 1], TailPlacement::Dense), 3);
    }

    #[test]
    fn test_is_contiguous() {
        assert!(is_contiguous([]));
        assert!(is_contiguous([2, 0, 1]));
        assert!(!is_contiguous([1, 2]));
        assert!(!is_contiguous([0, 0, 1]));
        assert!(!is_contiguous([0, 2]));
    }

    #[test]
    fn test_tail_placement_serde_names() {
        let json = serde_json::to_string(&TailPlacement::Dense).unwrap();
        assert_eq!(json, "\"dense\"");

        let placement: TailPlacement = serde_json::from_str("\"legacy\"").unwrap();
        assert_eq!(placement, TailPlacement::Legacy);
    }
}
