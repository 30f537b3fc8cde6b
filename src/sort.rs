// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Insertion-order policy

use crate::ItemStore;
use std::cmp::Ordering;
use std::fmt;

/// Item comparison function
///
/// Must implement a total order over the item type. Ascending order
/// under this function is the order maintained by sorted collections.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Insertion-order policy for an item collection
///
/// Fixed when the collection is constructed; it does not change over
/// the collection's lifetime.
pub enum SortMode<T> {
    /// Items stay where the caller puts them
    Unsorted,
    /// Items are kept in ascending comparator order
    Sorted(Comparator<T>),
}

impl<T> fmt::Debug for SortMode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Unsorted => f.write_str("Unsorted"),
            SortMode::Sorted(_) => f.write_str("Sorted(..)"),
        }
    }
}

impl<T> SortMode<T> {
    /// True if this is [`SortMode::Sorted`]
    #[inline]
    pub fn is_sorted(&self) -> bool {
        matches!(self, SortMode::Sorted(_))
    }

    /// Resolve the index at which to insert `item`
    ///
    /// In unsorted mode this is `requested`, unchanged (the caller
    /// validates it against the store's bounds). In sorted mode
    /// `requested` is ignored and the upper bound of `item` under the
    /// comparator is returned: the first position whose element
    /// compares greater. An item equal to existing items therefore
    /// inserts after all of them, so repeated insertion of equal keys
    /// preserves their relative order.
    pub fn resolve_insertion_index(
        &self,
        store: &ItemStore<T>,
        item: &T,
        requested: usize,
    ) -> usize {
        match self {
            SortMode::Unsorted => requested,
            SortMode::Sorted(cmp) => upper_bound(store.as_slice(), item, cmp),
        }
    }
}

/// Find the first index whose element compares greater than `item`
///
/// `items` must be sorted ascending under `cmp` (if not, the result is
/// meaningless). Returns `items.len()` if no element is greater.
fn upper_bound<T>(items: &[T], item: &T, cmp: &dyn Fn(&T, &T) -> Ordering) -> usize {
    // INVARIANTS:
    // - 0 <= left <= right <= items.len()
    // - cmp returns Less or Equal for everything in items[..left]
    // - cmp returns Greater for everything in items[right..]
    let mut left = 0;
    let mut right = items.len();
    while left < right {
        let mid = left + (right - left) / 2;
        if cmp(&items[mid], item) == Ordering::Greater {
            right = mid;
        } else {
            left = mid + 1;
        }
    }
    left
}

#[cfg(test)]
mod test {
    use super::*;

    fn cmp(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn upper_bound_positions() {
        let items = [1, 3, 3, 5];
        assert_eq!(upper_bound(&items, &0, &cmp), 0);
        assert_eq!(upper_bound(&items, &1, &cmp), 1);
        assert_eq!(upper_bound(&items, &2, &cmp), 1);
        assert_eq!(upper_bound(&items, &3, &cmp), 3);
        assert_eq!(upper_bound(&items, &4, &cmp), 3);
        assert_eq!(upper_bound(&items, &5, &cmp), 4);
        assert_eq!(upper_bound(&items, &6, &cmp), 4);
        assert_eq!(upper_bound(&[], &6, &cmp), 0);
    }

    #[test]
    fn unsorted_passes_requested_index_through() {
        let store = ItemStore::from_vec(vec![3, 1, 2]);
        let mode = SortMode::Unsorted;
        assert_eq!(mode.resolve_insertion_index(&store, &9, 1), 1);
        assert_eq!(mode.resolve_insertion_index(&store, &0, 3), 3);
    }

    #[test]
    fn sorted_ignores_requested_index() {
        let store = ItemStore::from_vec(vec![1, 2]);
        let mode = SortMode::Sorted(Box::new(|a: &i32, b: &i32| a.cmp(b)));
        assert_eq!(mode.resolve_insertion_index(&store, &0, 2), 0);
        assert_eq!(mode.resolve_insertion_index(&store, &3, 0), 2);
    }

    #[test]
    fn sorted_appends_on_tie() {
        // comparator on the first element only, so the second element
        // records insertion identity
        let mode = SortMode::Sorted(Box::new(|a: &(i32, u8), b: &(i32, u8)| a.0.cmp(&b.0)));
        let store = ItemStore::from_vec(vec![(1, 0), (1, 1), (2, 0)]);
        assert_eq!(mode.resolve_insertion_index(&store, &(1, 2), 0), 2);
    }
}
