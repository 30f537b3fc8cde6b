// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Item storage

/// An ordered, dense sequence of items
///
/// This is the authoritative in-process copy of a list's contents: a
/// zero-based container with no gaps. Items may repeat. The store has
/// no knowledge of sort order, selection state or the native peer;
/// those concerns live in [`SortMode`], [`SelectionSet`] and the peer
/// mirror respectively and are composed by [`ItemCollection`].
///
/// Mutating methods expect in-range indices; the public API layer
/// validates before calling.
///
/// [`SortMode`]: crate::SortMode
/// [`SelectionSet`]: crate::SelectionSet
/// [`ItemCollection`]: crate::ItemCollection
#[derive(Clone, Debug)]
pub struct ItemStore<T> {
    items: Vec<T>,
}

impl<T> Default for ItemStore<T> {
    fn default() -> Self {
        ItemStore { items: vec![] }
    }
}

impl<T> ItemStore<T> {
    /// Construct an empty store
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Construct from existing items, preserving their order
    #[inline]
    pub fn from_vec(items: Vec<T>) -> Self {
        ItemStore { items }
    }

    /// The number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the store holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item at `index`, if any
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Insert `item` at `index`, shifting subsequent items up
    ///
    /// Expects `index <= self.len()`.
    pub fn insert_at(&mut self, index: usize, item: T) {
        debug_assert!(index <= self.items.len());
        self.items.insert(index, item);
    }

    /// Remove and return the item at `index`, shifting subsequent items down
    ///
    /// Expects `index < self.len()`.
    pub fn remove_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.items.len());
        self.items.remove(index)
    }

    /// Replace the item at `index` in place, returning the displaced item
    ///
    /// Expects `index < self.len()`.
    pub fn replace_at(&mut self, index: usize, item: T) -> T {
        debug_assert!(index < self.items.len());
        std::mem::replace(&mut self.items[index], item)
    }

    /// Remove all items
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The index of the first item matching `pred`, by linear scan
    #[inline]
    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    /// View the items as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the items in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a ItemStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_shifts_up() {
        let mut store = ItemStore::from_vec(vec![1, 3]);
        store.insert_at(1, 2);
        assert_eq!(store.as_slice(), &[1, 2, 3]);
        store.insert_at(3, 4);
        assert_eq!(store.as_slice(), &[1, 2, 3, 4]);
        store.insert_at(0, 0);
        assert_eq!(store.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn remove_shifts_down() {
        let mut store = ItemStore::from_vec(vec![1, 2, 3]);
        assert_eq!(store.remove_at(1), 2);
        assert_eq!(store.as_slice(), &[1, 3]);
    }

    #[test]
    fn replace_in_place() {
        let mut store = ItemStore::from_vec(vec![1, 2, 3]);
        assert_eq!(store.replace_at(2, 9), 3);
        assert_eq!(store.as_slice(), &[1, 2, 9]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn position_finds_first_match() {
        let store = ItemStore::from_vec(vec![5, 7, 5]);
        assert_eq!(store.position(|x| *x == 5), Some(0));
        assert_eq!(store.position(|x| *x == 7), Some(1));
        assert_eq!(store.position(|x| *x == 8), None);
    }
}
