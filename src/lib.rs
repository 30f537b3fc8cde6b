// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Item collection model for selectable list controls
//!
//! [`ItemCollection`] is the data model behind a list box: an ordered
//! collection of items which may keep itself sorted by a
//! caller-supplied comparator, mirrors its mutations onto the owning
//! control's native peer once that peer is realized, and keeps the
//! owner's selection indices consistent across insertions, removals
//! and replacements.
//!
//! The owning control is abstracted by two traits: [`ListHost`]
//! (data-source gate, access to the peer and the [`SelectionSet`],
//! change notification) and [`ListPeer`] (the native list's mutation
//! primitives). Rendering, input handling and the peer's lifecycle
//! are the control's own concern.
//!
//! ```
//! use list_items::{ItemCollection, ListHost, ListPeer, SelectionSet};
//!
//! #[derive(Default)]
//! struct Host {
//!     selection: SelectionSet,
//! }
//!
//! impl ListHost<i32> for Host {
//!     fn peer(&mut self) -> Option<&mut dyn ListPeer<i32>> {
//!         None // not realized yet
//!     }
//!     fn selection(&mut self) -> &mut SelectionSet {
//!         &mut self.selection
//!     }
//! }
//!
//! let mut host = Host::default();
//! let mut items = ItemCollection::sorted();
//! items.add_range(&mut host, [3, 1, 2])?;
//! assert_eq!(items.as_slice(), &[1, 2, 3]);
//!
//! host.selection.insert(1);
//! items.remove_at(&mut host, 0)?;
//! assert_eq!(host.selection.first(), Some(0)); // still selecting 2
//! # Ok::<(), list_items::Error>(())
//! ```

mod collection;
mod error;
mod peer;
mod selection;
mod sort;
mod store;

pub use collection::ItemCollection;
pub use error::{Error, Result};
pub use peer::{ListHost, ListPeer, PEER_ERR, PEER_ERR_SPACE};
pub use selection::SelectionSet;
pub use sort::{Comparator, SortMode};
pub use store::ItemStore;
