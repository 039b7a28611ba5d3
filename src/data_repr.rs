// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::Arc;

/// Backing storage of an array.
///
/// `Owned` elements belong to the array alone; `Shared` aliases a window of
/// a reference-counted buffer, so a view keeps its parent's buffer alive for
/// as long as the view exists. Mutating access to shared storage first
/// unshares it (copy-on-write).
pub(crate) enum Storage<A>
{
    Owned(Vec<A>),
    Shared
    {
        buf: Arc<[A]>,
        offset: usize,
    },
}

impl<A> Storage<A>
{
    /// Element at physical offset `i` relative to the array's base.
    #[inline]
    pub(crate) fn elem(&self, i: usize) -> &A
    {
        match self {
            Storage::Owned(v) => &v[i],
            Storage::Shared { buf, offset } => &buf[offset + i],
        }
    }

    /// Whether this array owns its buffer (is not a view).
    #[inline]
    pub(crate) fn is_owned(&self) -> bool
    {
        matches!(self, Storage::Owned(_))
    }

    /// Mutable slice of the whole buffer; `None` while the storage is shared.
    #[inline]
    pub(crate) fn owned_mut(&mut self) -> Option<&mut [A]>
    {
        match self {
            Storage::Owned(v) => Some(v),
            Storage::Shared { .. } => None,
        }
    }
}
