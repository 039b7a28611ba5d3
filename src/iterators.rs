// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::{flatten_index, Ix};
use crate::Array;

/// An iterator over the elements of an array in logical (row-major) order.
///
/// Walks a mixed-radix counter over the shape, so it visits elements in the
/// right order for any strides; the counter's rightmost digit advances first
/// and carries leftward on overflow.
pub struct Iter<'a, A>
{
    arr: &'a Array<A>,
    index: Vec<Ix>,
    pos: usize,
}

impl<'a, A> Iter<'a, A>
{
    pub(crate) fn new(arr: &'a Array<A>) -> Self
    {
        Iter {
            index: vec![0; arr.ndim()],
            pos: 0,
            arr,
        }
    }
}

impl<'a, A> Iterator for Iter<'a, A>
{
    type Item = &'a A;

    fn next(&mut self) -> Option<&'a A>
    {
        if self.pos >= self.arr.len() {
            return None;
        }
        let offset = flatten_index(&self.index, self.arr.strides());
        for (ix, &dim) in self.index.iter_mut().zip(self.arr.shape()).rev() {
            *ix += 1;
            if *ix < dim {
                break;
            }
            *ix = 0;
        }
        self.pos += 1;
        Some(self.arr.elem_at(offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let rem = self.arr.len() - self.pos;
        (rem, Some(rem))
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}
