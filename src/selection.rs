// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Selection index bookkeeping

use smallvec::SmallVec;

/// A set of selected item indices
///
/// Owned by the list control (exposed to the collection through
/// [`ListHost::selection`]) and kept ascending and duplicate-free.
///
/// The `adjust_*` methods rewrite the set after a collection mutation
/// so that every surviving selection still points at the same logical
/// item, and report whether the set of selected *items* changed —
/// purely shifted indices do not count as a change, dropped or
/// replaced selections do. [`ItemCollection`] applies exactly one
/// adjustment per mutation and notifies the host when an adjustment
/// reports a change.
///
/// [`ListHost::selection`]: crate::ListHost::selection
/// [`ItemCollection`]: crate::ItemCollection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    // Invariant: strictly increasing
    indices: SmallVec<[usize; 8]>,
}

impl SelectionSet {
    /// Construct an empty selection
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// The number of selected indices
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if nothing is selected
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// True if `index` is selected
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// The lowest selected index, if any
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    /// Mark `index` as selected
    ///
    /// Returns true if it was not selected before.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.indices.binary_search(&index) {
            Ok(_) => false,
            Err(pos) => {
                self.indices.insert(pos, index);
                true
            }
        }
    }

    /// Unmark `index`
    ///
    /// Returns true if it was selected before.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.indices.binary_search(&index) {
            Ok(pos) => {
                self.indices.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Unmark everything
    #[inline]
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Iterate over selected indices in ascending order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Adjust for an item inserted at `index`
    ///
    /// Selected indices at or above `index` shift up by one; nothing
    /// is dropped. Always returns false: a pure shift never changes
    /// which items are selected.
    pub fn adjust_insert(&mut self, index: usize) -> bool {
        for i in &mut self.indices {
            if *i >= index {
                *i += 1;
            }
        }
        false
    }

    /// Adjust for removal of the item at `index`
    ///
    /// A selection of the removed item is dropped (it can no longer be
    /// selected); selected indices above `index` shift down by one.
    /// Returns true iff a selection was dropped.
    pub fn adjust_remove(&mut self, index: usize) -> bool {
        let dropped = self.remove(index);
        for i in &mut self.indices {
            if *i > index {
                *i -= 1;
            }
        }
        dropped
    }

    /// Adjust for in-place replacement of the item at `index`
    ///
    /// Membership does not change, but if `index` is selected then the
    /// selected item is now a different value. Returns true iff
    /// `index` is selected.
    #[inline]
    pub fn adjust_replace(&self, index: usize) -> bool {
        self.contains(index)
    }

    /// Adjust for removal of all items
    ///
    /// Returns true iff the selection was non-empty.
    pub fn adjust_clear(&mut self) -> bool {
        let changed = !self.indices.is_empty();
        self.indices.clear();
        changed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn set(indices: &[usize]) -> SelectionSet {
        let mut s = SelectionSet::new();
        for i in indices {
            assert!(s.insert(*i));
        }
        s
    }

    #[test]
    fn insert_keeps_ascending_unique() {
        let mut s = SelectionSet::new();
        assert!(s.insert(4));
        assert!(s.insert(1));
        assert!(!s.insert(4));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn adjust_insert_shifts_at_and_above() {
        let mut s = set(&[0, 2, 5]);
        assert!(!s.adjust_insert(2));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 3, 6]);
    }

    #[test]
    fn adjust_insert_at_end_is_noop() {
        let mut s = set(&[0, 1]);
        assert!(!s.adjust_insert(7));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn adjust_remove_drops_and_shifts() {
        let mut s = set(&[1, 3, 4]);
        assert!(s.adjust_remove(3));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn adjust_remove_shift_only_is_not_a_change() {
        let mut s = set(&[2, 4]);
        assert!(!s.adjust_remove(0));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 3]);
        assert!(!s.adjust_remove(2));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn adjust_replace_reports_membership() {
        let s = set(&[2]);
        assert!(s.adjust_replace(2));
        assert!(!s.adjust_replace(1));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn adjust_clear_reports_prior_content() {
        let mut s = set(&[0, 1]);
        assert!(s.adjust_clear());
        assert!(s.is_empty());
        assert!(!s.adjust_clear());
    }
}
