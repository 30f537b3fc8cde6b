// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use thiserror::Error;

/// Possible operation failures
///
/// All errors are reported synchronously at the point of the offending
/// call; there is no deferred reporting and no retry.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index argument was outside the valid range for the operation
    ///
    /// Indices are never clamped.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Current item count
        len: usize,
    },

    /// The owning control's contents are governed by a data source
    ///
    /// Direct mutation of the collection is rejected while an external
    /// data source is attached ([`ListHost::is_data_bound`]).
    ///
    /// [`ListHost::is_data_bound`]: crate::ListHost::is_data_bound
    #[error("cannot modify items while bound to a data source")]
    DataBound,

    /// The native peer failed to store an item
    ///
    /// Carries the result code reported by the peer; see [`PEER_ERR`]
    /// and [`PEER_ERR_SPACE`]. The operation which triggered the
    /// failing peer call has no other effect: the item was not added
    /// to the collection and the selection was not adjusted.
    ///
    /// [`PEER_ERR`]: crate::PEER_ERR
    /// [`PEER_ERR_SPACE`]: crate::PEER_ERR_SPACE
    #[error("list peer out of resources (code {0})")]
    OutOfResource(isize),
}

/// A `Result` type representing `T` or [`enum@Error`]
pub type Result<T> = std::result::Result<T, Error>;
