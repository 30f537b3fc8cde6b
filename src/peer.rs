// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Host and peer interfaces; peer mirroring

use crate::{Error, ItemStore, Result, SelectionSet};

/// Result code: the peer rejected the operation
pub const PEER_ERR: isize = -1;

/// Result code: the peer ran out of item storage
pub const PEER_ERR_SPACE: isize = -2;

/// Mutation primitives of a realized native list peer
///
/// Implemented by the owning control's wrapper around its native list
/// instance. Calls are synchronous round-trips; [`ListPeer::insert`]
/// reports success through a non-negative result code and failure
/// through [`PEER_ERR`] or [`PEER_ERR_SPACE`] (any negative code is
/// treated as failure).
pub trait ListPeer<T> {
    /// Insert `item` at `index`, shifting subsequent entries up
    ///
    /// Returns a non-negative result code on success, negative on
    /// failure (typically resource exhaustion).
    fn insert(&mut self, index: usize, item: &T) -> isize;

    /// Remove the entry at `index`, shifting subsequent entries down
    fn remove_at(&mut self, index: usize);

    /// Replace the entry at `index` in place
    fn replace(&mut self, index: usize, item: &T);

    /// Remove all entries
    fn clear(&mut self);

    /// The number of entries the peer currently holds
    fn len(&self) -> usize;

    /// True if the peer holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Capabilities the owning list control lends to its item collection
///
/// Mutating operations on [`ItemCollection`] take the host as a
/// context argument, in place of a back-reference to the control; the
/// collection never stores the host.
///
/// [`ItemCollection`]: crate::ItemCollection
pub trait ListHost<T> {
    /// True while the owner's contents are governed by an external data source
    ///
    /// While this returns true, every direct mutation of the
    /// collection fails with [`Error::DataBound`].
    fn is_data_bound(&self) -> bool {
        false
    }

    /// Access the native peer, or `None` while it is unrealized
    ///
    /// Once realized, a peer is expected to stay available until the
    /// owning control tears it down; teardown is not this crate's
    /// concern.
    fn peer(&mut self) -> Option<&mut dyn ListPeer<T>>;

    /// Access the owner's selection set
    ///
    /// The collection rewrites this set after each mutation; no other
    /// actor may mutate it while a collection mutation is in progress.
    fn selection(&mut self) -> &mut SelectionSet;

    /// Notification that the set of selected items may have changed
    ///
    /// Invoked at most once per mutation, after the collection, peer
    /// and selection set have all been updated.
    fn selection_may_have_changed(&mut self) {}
}

/// Replays store mutations onto the native peer
///
/// While the peer is unrealized every mirror call is a no-op; the
/// store is replayed wholesale by [`PeerMirror::ensure_synced`] the
/// first time a peer is observed. After that, each mutation is
/// mirrored index-for-index so that peer and store never diverge in
/// order or count.
///
/// Insertions are offered to the peer *before* the store commits (see
/// [`ItemCollection::add`]), so a peer failure leaves the collection
/// unchanged.
///
/// [`ItemCollection::add`]: crate::ItemCollection::add
#[derive(Debug, Default)]
pub(crate) struct PeerMirror {
    synced: bool,
}

impl PeerMirror {
    pub fn new() -> Self {
        Default::default()
    }

    /// Replay the store onto a newly observed peer
    ///
    /// No-op while the peer is unrealized or after a successful
    /// replay. On a peer failure part-way through, the peer is
    /// cleared and the mirror stays unsynchronized; a later call
    /// retries the full replay.
    pub fn ensure_synced<T>(
        &mut self,
        host: &mut dyn ListHost<T>,
        store: &ItemStore<T>,
    ) -> Result<()> {
        if self.synced {
            return Ok(());
        }
        let Some(peer) = host.peer() else {
            return Ok(());
        };
        log::debug!("ensure_synced: replaying {} items onto peer", store.len());
        for (index, item) in store.iter().enumerate() {
            let code = peer.insert(index, item);
            if code < 0 {
                log::warn!("ensure_synced: peer insert at {index} failed (code {code})");
                // a retry replays from index 0: drop the partial contents
                peer.clear();
                return Err(Error::OutOfResource(code));
            }
        }
        self.synced = true;
        Ok(())
    }

    /// Mirror an insertion at `index`
    pub fn on_insert<T>(
        &self,
        host: &mut dyn ListHost<T>,
        index: usize,
        item: &T,
    ) -> Result<()> {
        if let Some(peer) = host.peer() {
            let code = peer.insert(index, item);
            if code < 0 {
                log::warn!("on_insert: peer insert at {index} failed (code {code})");
                return Err(Error::OutOfResource(code));
            }
        }
        Ok(())
    }

    /// Mirror a removal at `index`
    pub fn on_remove_at<T>(&self, host: &mut dyn ListHost<T>, index: usize) {
        if let Some(peer) = host.peer() {
            peer.remove_at(index);
        }
    }

    /// Mirror an in-place replacement at `index`
    pub fn on_replace_at<T>(&self, host: &mut dyn ListHost<T>, index: usize, item: &T) {
        if let Some(peer) = host.peer() {
            peer.replace(index, item);
        }
    }

    /// Mirror removal of all items
    pub fn on_clear<T>(&self, host: &mut dyn ListHost<T>) {
        if let Some(peer) = host.peer() {
            peer.clear();
        }
    }
}
