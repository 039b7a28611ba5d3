// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Broadcasting: iterating a source array as if it had a larger shape.

use crate::dimension::{broadcast_shapes, flatten_index, size_of, Ix, Shape, Strides};
use crate::error::*;
use crate::Array;

/// A cursor that enumerates a target shape in row-major order and maps each
/// logical position back to the correct element of a lower-rank or
/// size-1-dimensioned source array.
///
/// The source shape is right-aligned against the target shape, with missing
/// leading dimensions treated as size 1. Along any dimension where the
/// source size is 1 the source index is pinned to 0; elsewhere the logical
/// index passes through. Stepping advances the rightmost dimension first
/// and carries leftward on overflow (a mixed-radix counter).
pub struct BroadcastIter<'a, A>
{
    source: &'a Array<A>,
    target_shape: Shape,
    // strides into the source for each target dimension; 0 where the
    // (padded) source size is 1
    mapped_strides: Strides,
    index: Vec<Ix>,
    pos: usize,
    len: usize,
}

impl<'a, A> BroadcastIter<'a, A>
{
    /// Create a cursor over `target_shape` reading from `source`.
    ///
    /// **Errors** with `IncompatibleShape` if the source shape cannot be
    /// broadcast to `target_shape` (a source dimension that is neither equal
    /// to the target's nor 1).
    pub fn new(source: &'a Array<A>, target_shape: &[Ix]) -> Result<Self, ArrayError>
    {
        let src_shape = source.shape();
        if src_shape.len() > target_shape.len() {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        let k = target_shape.len() - src_shape.len();
        let mut mapped_strides = vec![0; target_shape.len()];
        for (i, (&dim, &stride)) in src_shape.iter().zip(source.strides()).enumerate() {
            if dim == target_shape[k + i] {
                mapped_strides[k + i] = stride;
            } else if dim != 1 {
                return Err(from_kind(ErrorKind::IncompatibleShape));
            }
            // dim == 1: stride stays 0, pinning the source index
        }
        Ok(BroadcastIter {
            source,
            mapped_strides,
            index: vec![0; target_shape.len()],
            pos: 0,
            len: size_of(target_shape),
            target_shape: target_shape.to_vec(),
        })
    }
}

impl<'a, A> Iterator for BroadcastIter<'a, A>
{
    type Item = &'a A;

    fn next(&mut self) -> Option<&'a A>
    {
        if self.pos >= self.len {
            return None;
        }
        let offset = flatten_index(&self.index, &self.mapped_strides);
        for (ix, &dim) in self.index.iter_mut().zip(&self.target_shape).rev() {
            *ix += 1;
            if *ix < dim {
                break;
            }
            *ix = 0;
        }
        self.pos += 1;
        Some(self.source.elem_at(offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let rem = self.len - self.pos;
        (rem, Some(rem))
    }
}

impl<'a, A> ExactSizeIterator for BroadcastIter<'a, A> {}

/// Copy `a` into a new owning array of the shape that `a` and
/// `target_shape` broadcast to.
///
/// Broadcasting here always densifies: every value is explicitly copied and
/// the result owns a contiguous buffer. No lazy or strided view is ever
/// returned, at the cost of memory for large broadcasts.
///
/// **Errors** with `IncompatibleShape` if the shapes cannot be broadcast
/// together.
pub fn broadcast_to<A>(a: &Array<A>, target_shape: &[Ix]) -> Result<Array<A>, ArrayError>
where A: Clone
{
    let shape = broadcast_shapes(a.shape(), target_shape)?;
    let data: Vec<A> = BroadcastIter::new(a, &shape)?.cloned().collect();
    Ok(Array::from_data(shape, data))
}
