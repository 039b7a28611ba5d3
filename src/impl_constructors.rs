// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `Array`.

use num_traits::{One, Zero};
use std::sync::Arc;

use crate::data_repr::Storage;
use crate::dimension::{flatten_index, size_of, strides_of, Shape, Strides};
use crate::error::*;
use crate::Array;

impl<A> Array<A>
{
    /// Create an array from a shape and a row-major element vector, without
    /// validating their agreement.
    pub(crate) fn from_data(shape: Shape, data: Vec<A>) -> Array<A>
    {
        debug_assert_eq!(size_of(&shape), data.len());
        let strides = strides_of(&shape);
        let len = data.len();
        Array {
            data: Storage::Owned(data),
            shape,
            strides,
            len,
        }
    }

    /// Create an array with the given shape from a vector of elements in
    /// row-major order.
    ///
    /// **Errors** with `IncompatibleShape` if the length of `v` does not
    /// equal the product of `shape`.
    pub fn from_shape_vec(shape: Shape, v: Vec<A>) -> Result<Array<A>, ArrayError>
    {
        if size_of(&shape) != v.len() {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        Ok(Array::from_data(shape, v))
    }

    /// Create a one-dimensional array from a vector (no copying needed).
    pub fn from_vec(v: Vec<A>) -> Array<A>
    {
        let shape = vec![v.len()];
        Array::from_data(shape, v)
    }

    /// Create an array with the given shape, with every element set to
    /// `elem`.
    pub fn from_elem(shape: Shape, elem: A) -> Array<A>
    where A: Clone
    {
        let data = vec![elem; size_of(&shape)];
        Array::from_data(shape, data)
    }

    /// Create an array of zeros with the given shape.
    pub fn zeros(shape: Shape) -> Array<A>
    where A: Clone + Zero
    {
        Array::from_elem(shape, A::zero())
    }

    /// Create an array of ones with the given shape.
    pub fn ones(shape: Shape) -> Array<A>
    where A: Clone + One
    {
        Array::from_elem(shape, A::one())
    }

    /// Create the `n` × `n` identity matrix.
    pub fn eye(n: usize) -> Array<A>
    where A: Clone + Zero + One
    {
        let mut data = vec![A::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = A::one();
        }
        Array::from_data(vec![n, n], data)
    }

    /// Create a non-owning view over a window of a shared buffer, with
    /// caller-supplied shape and strides.
    ///
    /// The view holds a reference count on `buf`, so the buffer outlives the
    /// view by construction. The strides need not be contiguous; logical
    /// iteration stays row-major over `shape` while element lookup follows
    /// the given strides from `offset`.
    ///
    /// **Errors** with `RankMismatch` if `shape` and `strides` differ in
    /// length, or `OutOfBounds` if any addressable element would fall outside
    /// the buffer.
    pub fn view_with(buf: &Arc<[A]>, offset: usize, shape: Shape, strides: Strides)
        -> Result<Array<A>, ArrayError>
    {
        if shape.len() != strides.len() {
            return Err(from_kind(ErrorKind::RankMismatch));
        }
        let len = size_of(&shape);
        if len > 0 {
            // The largest reachable offset is at the last index along
            // every dimension.
            let last: Vec<_> = shape.iter().map(|&d| d - 1).collect();
            if offset + flatten_index(&last, &strides) >= buf.len() {
                return Err(from_kind(ErrorKind::OutOfBounds));
            }
        }
        Ok(Array {
            data: Storage::Shared {
                buf: Arc::clone(buf),
                offset,
            },
            shape,
            strides,
            len,
        })
    }
}
