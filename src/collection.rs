// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The item collection

use crate::peer::PeerMirror;
use crate::{Comparator, Error, ItemStore, ListHost, Result, SortMode};
use std::ops::Index;

/// An ordered item collection synchronized with a native list peer
///
/// This is the data model behind a selectable list control: an
/// ordered sequence of items which
///
/// -   optionally keeps itself sorted by a caller-supplied comparator
///     (fixed at construction; see [`SortMode`]);
/// -   mirrors every mutation onto the owning control's native peer
///     whenever one is realized, replaying the whole sequence when the
///     peer first appears;
/// -   rewrites the owner's [`SelectionSet`] after every mutation so
///     that surviving selections keep pointing at the same items, and
///     notifies the owner when the selected items changed.
///
/// Mutating operations take the owning control as a
/// [`ListHost`] context argument and run a fixed pipeline: validate
/// (data-source gate, index bounds), resolve the insertion index via
/// the sort mode, mirror to the peer, commit to the store, adjust the
/// selection, notify. Insertions are offered to the peer before the
/// store commits, so a peer failure ([`Error::OutOfResource`]) leaves
/// the collection, the selection and the peer's contents unchanged.
///
/// Everything is synchronous and single-threaded; iteration borrows
/// the collection, so mutating while iterating is a compile-time
/// error.
///
/// [`SelectionSet`]: crate::SelectionSet
#[derive(Debug)]
pub struct ItemCollection<T> {
    store: ItemStore<T>,
    sort: SortMode<T>,
    mirror: PeerMirror,
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + 'static> ItemCollection<T> {
    /// Construct an empty collection sorted by the item type's ordering
    pub fn sorted() -> Self {
        Self::sorted_by(Box::new(|a: &T, b: &T| a.cmp(b)))
    }
}

impl<T> ItemCollection<T> {
    /// Construct an empty, unsorted collection
    ///
    /// Items stay in the order the caller gives them.
    pub fn new() -> Self {
        ItemCollection {
            store: ItemStore::new(),
            sort: SortMode::Unsorted,
            mirror: PeerMirror::new(),
        }
    }

    /// Construct an empty collection sorted ascending by `cmp`
    pub fn sorted_by(cmp: Comparator<T>) -> Self {
        ItemCollection {
            store: ItemStore::new(),
            sort: SortMode::Sorted(cmp),
            mirror: PeerMirror::new(),
        }
    }

    /// Construct an unsorted collection holding `items` in order
    pub fn from_items(items: Vec<T>) -> Self {
        ItemCollection {
            store: ItemStore::from_vec(items),
            sort: SortMode::Unsorted,
            mirror: PeerMirror::new(),
        }
    }

    /// Construct a sorted collection seeded from `items`
    ///
    /// Each item is placed at its comparator position; equal items
    /// keep their relative order from `items`.
    pub fn sorted_from_items(cmp: Comparator<T>, items: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::sorted_by(cmp);
        for item in items {
            let index = collection
                .sort
                .resolve_insertion_index(&collection.store, &item, collection.store.len());
            collection.store.insert_at(index, item);
        }
        collection
    }

    /// True if items are kept in comparator order
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.sort.is_sorted()
    }

    /// The number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if the collection holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get the item at `index`, if any
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.store.get(index)
    }

    /// View the items as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Iterate over the items in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.store.iter()
    }

    /// True if an item equal to `item` is present
    #[inline]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// The index of the first item equal to `item`, if any
    ///
    /// Linear scan using `T`'s equality, even in sorted mode (the
    /// sort comparator need not agree with `==`).
    #[inline]
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.store.position(|x| x == item)
    }

    /// Copy all items into `dest`, starting at `dest[start]`
    ///
    /// The destination is not resized.
    ///
    /// # Panics
    ///
    /// Panics if `dest` is too short to hold the items at `start`.
    pub fn copy_to(&self, dest: &mut [T], start: usize)
    where
        T: Clone,
    {
        dest[start..start + self.len()].clone_from_slice(self.as_slice());
    }

    /// Add `item`, returning the index it was placed at
    ///
    /// Unsorted collections append; sorted collections insert at the
    /// comparator position, after any existing equal items.
    ///
    /// The peer, when realized, is updated before the collection: a
    /// peer failure yields [`Error::OutOfResource`] and leaves the
    /// collection unchanged, with no selection adjustment and no
    /// notification. This ordering applies to every mutation.
    pub fn add(&mut self, host: &mut dyn ListHost<T>, item: T) -> Result<usize> {
        self.check_unbound(host)?;
        self.mirror.ensure_synced(host, &self.store)?;
        let index = self
            .sort
            .resolve_insertion_index(&self.store, &item, self.store.len());
        self.mirror.on_insert(host, index, &item)?;
        self.store.insert_at(index, item);
        log::trace!("add: item inserted at {index}");
        if host.selection().adjust_insert(index) {
            host.selection_may_have_changed();
        }
        Ok(index)
    }

    /// Add every item of `items`, returning the number added
    ///
    /// Each element follows the [`ItemCollection::add`] path, so an
    /// unsorted collection preserves the sequence's order and a sorted
    /// collection places each element individually. On error the
    /// elements added so far remain.
    pub fn add_range<I>(&mut self, host: &mut dyn ListHost<T>, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_unbound(host)?;
        let mut count = 0;
        for item in items {
            self.add(host, item)?;
            count += 1;
        }
        log::trace!("add_range: {count} items added");
        Ok(count)
    }

    /// Insert `item` at `index`, returning the index it was placed at
    ///
    /// `index` must be in `[0, len]`. In sorted mode the validated
    /// `index` is then *ignored*: the position is re-derived from the
    /// comparator, exactly as for [`ItemCollection::add`]. This
    /// matches classic list-control behavior; callers wanting a
    /// caller-chosen position must use an unsorted collection.
    pub fn insert(&mut self, host: &mut dyn ListHost<T>, index: usize, item: T) -> Result<usize> {
        self.check_unbound(host)?;
        if index > self.store.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.store.len(),
            });
        }
        self.mirror.ensure_synced(host, &self.store)?;
        let index = self.sort.resolve_insertion_index(&self.store, &item, index);
        self.mirror.on_insert(host, index, &item)?;
        self.store.insert_at(index, item);
        log::trace!("insert: item inserted at {index}");
        if host.selection().adjust_insert(index) {
            host.selection_may_have_changed();
        }
        Ok(index)
    }

    /// Remove the first item equal to `item`, if present
    ///
    /// Returns the index it was removed from, or `None` (not an
    /// error) if no equal item is present.
    pub fn remove(&mut self, host: &mut dyn ListHost<T>, item: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => {
                self.remove_at(host, index)?;
                Ok(Some(index))
            }
            None => Ok(None),
        }
    }

    /// Remove and return the item at `index`
    ///
    /// `index` must be in `[0, len)`. A selection of the removed item
    /// is dropped (with a change notification); selections above it
    /// shift down.
    pub fn remove_at(&mut self, host: &mut dyn ListHost<T>, index: usize) -> Result<T> {
        self.check_unbound(host)?;
        if index >= self.store.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.store.len(),
            });
        }
        self.mirror.ensure_synced(host, &self.store)?;
        let item = self.store.remove_at(index);
        self.mirror.on_remove_at(host, index);
        log::trace!("remove_at: item removed from {index}");
        if host.selection().adjust_remove(index) {
            host.selection_may_have_changed();
        }
        Ok(item)
    }

    /// Replace the item at `index` in place, returning the displaced item
    ///
    /// `index` must be in `[0, len)`. The slot is overwritten even in
    /// sorted mode: the collection is *not* re-sorted around the new
    /// value, so a caller relying on sort order after `set` must
    /// supply a value that preserves it. If `index` is currently
    /// selected the owner is notified, since the selected item is now
    /// a different value.
    pub fn set(&mut self, host: &mut dyn ListHost<T>, index: usize, item: T) -> Result<T> {
        self.check_unbound(host)?;
        if index >= self.store.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.store.len(),
            });
        }
        self.mirror.ensure_synced(host, &self.store)?;
        self.mirror.on_replace_at(host, index, &item);
        let old = self.store.replace_at(index, item);
        log::trace!("set: item replaced at {index}");
        if host.selection().adjust_replace(index) {
            host.selection_may_have_changed();
        }
        Ok(old)
    }

    /// Remove all items
    ///
    /// Succeeds on an empty collection (without notifying). Any
    /// selection is dropped, with a change notification if it was
    /// non-empty.
    pub fn clear(&mut self, host: &mut dyn ListHost<T>) -> Result<()> {
        self.check_unbound(host)?;
        self.store.clear();
        self.mirror.on_clear(host);
        log::trace!("clear: all items removed");
        if host.selection().adjust_clear() {
            host.selection_may_have_changed();
        }
        Ok(())
    }

    /// Populate a newly realized peer
    ///
    /// Call when the owning control realizes its native peer: replays
    /// every item onto the peer, in order, exactly once per
    /// realization. A no-op while the peer is unrealized or already
    /// populated. (A realized peer is also detected and populated by
    /// the next mutation, but calling this keeps the peer current even
    /// when no mutation follows.)
    pub fn sync_peer(&mut self, host: &mut dyn ListHost<T>) -> Result<()> {
        self.mirror.ensure_synced(host, &self.store)
    }

    fn check_unbound(&self, host: &dyn ListHost<T>) -> Result<()> {
        if host.is_data_bound() {
            return Err(Error::DataBound);
        }
        Ok(())
    }
}

impl<T> Index<usize> for ItemCollection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::SelectionSet;

    // Host with no peer and no data source
    #[derive(Default)]
    struct BareHost {
        selection: SelectionSet,
    }

    impl<T> ListHost<T> for BareHost {
        fn peer(&mut self) -> Option<&mut dyn crate::ListPeer<T>> {
            None
        }

        fn selection(&mut self) -> &mut SelectionSet {
            &mut self.selection
        }
    }

    #[test]
    fn add_appends_when_unsorted() {
        let host = &mut BareHost::default();
        let mut items = ItemCollection::new();
        assert_eq!(items.add(host, 3), Ok(0));
        assert_eq!(items.add(host, 1), Ok(1));
        assert_eq!(items.add(host, 2), Ok(2));
        assert_eq!(items.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn add_sorts_when_sorted() {
        let host = &mut BareHost::default();
        let mut items = ItemCollection::sorted();
        assert_eq!(items.add(host, 2), Ok(0));
        assert_eq!(items.add(host, 1), Ok(0));
        assert_eq!(items.add(host, 3), Ok(2));
        assert_eq!(items.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn insert_validates_index_in_sorted_mode_too() {
        let host = &mut BareHost::default();
        let mut items = ItemCollection::sorted();
        items.add(host, 1).unwrap();
        assert_eq!(
            items.insert(host, 5, 2),
            Err(Error::IndexOutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn index_of_uses_equality_not_comparator() {
        // comparator on absolute value; equality is full equality
        let host = &mut BareHost::default();
        let mut items = ItemCollection::sorted_by(Box::new(|a: &i32, b: &i32| {
            a.abs().cmp(&b.abs())
        }));
        items.add_range(host, [-1, 2, -3]).unwrap();
        assert_eq!(items.as_slice(), &[-1, 2, -3]);
        assert_eq!(items.index_of(&-3), Some(2));
        assert_eq!(items.index_of(&3), None);
    }

    #[test]
    fn remove_missing_is_noop() {
        let host = &mut BareHost::default();
        let mut items = ItemCollection::from_items(vec![1, 2]);
        assert_eq!(items.remove(host, &7), Ok(None));
        assert_eq!(items.as_slice(), &[1, 2]);
        assert_eq!(items.remove(host, &1), Ok(Some(0)));
        assert_eq!(items.as_slice(), &[2]);
    }

    #[test]
    fn indexing_and_iteration() {
        let items = ItemCollection::from_items(vec![10, 20]);
        assert_eq!(items[1], 20);
        assert_eq!(items.get(2), None);
        assert_eq!((&items).into_iter().sum::<i32>(), 30);
    }

    #[test]
    fn copy_to_offsets_into_destination() {
        let items = ItemCollection::from_items(vec![1, 2]);
        let mut dest = [0; 4];
        items.copy_to(&mut dest, 1);
        assert_eq!(dest, [0, 1, 2, 0]);
    }
}
