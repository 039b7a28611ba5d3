// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element access, shape inspection and reshaping for `Array`.

use std::sync::Arc;

use crate::data_repr::Storage;
use crate::dimension::{flatten_index, size_of, strides_of, unravel_index, Ix, Shape};
use crate::error::*;
use crate::iterators::Iter;
use crate::Array;

impl<A> Array<A>
{
    /// Return the shape of the array as a slice.
    #[inline]
    pub fn shape(&self) -> &[Ix]
    {
        &self.shape
    }

    /// Return the strides of the array as a slice, in elements.
    #[inline]
    pub fn strides(&self) -> &[Ix]
    {
        &self.strides
    }

    /// Return the number of dimensions (axes) of the array.
    #[inline]
    pub fn ndim(&self) -> usize
    {
        self.shape.len()
    }

    /// Return the total number of elements in the array.
    ///
    /// Always equal to the product of the shape; the empty shape has one
    /// element.
    #[inline]
    pub fn len(&self) -> usize
    {
        self.len
    }

    /// Return whether the array has any elements.
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// Return whether the array owns its buffer (is not a view).
    #[inline]
    pub fn owns_data(&self) -> bool
    {
        self.data.is_owned()
    }

    /// Return whether the strides describe a contiguous row-major layout
    /// for the shape.
    pub fn is_standard_layout(&self) -> bool
    {
        self.strides == strides_of(&self.shape)
    }

    /// Element at physical offset `physical` relative to the array's base.
    #[inline]
    pub(crate) fn elem_at(&self, physical: usize) -> &A
    {
        self.data.elem(physical)
    }

    /// Return a reference to the element at flat (row-major logical)
    /// position `index`.
    ///
    /// **Errors** with `OutOfBounds` if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&A, ArrayError>
    {
        if index >= self.len {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        if self.is_standard_layout() {
            Ok(self.elem_at(index))
        } else {
            let ix = unravel_index(index, &self.shape);
            Ok(self.elem_at(flatten_index(&ix, &self.strides)))
        }
    }

    /// Return a mutable reference to the element at flat position `index`,
    /// unsharing the storage first if this array is a view.
    ///
    /// **Errors** with `OutOfBounds` if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut A, ArrayError>
    where A: Clone
    {
        if index >= self.len {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        self.ensure_unique();
        // after ensure_unique the layout is contiguous row-major
        let slice = self.data.owned_mut().expect("storage is owned after ensure_unique");
        Ok(&mut slice[index])
    }

    /// Return a reference to the element at the given multi-dimensional
    /// index.
    ///
    /// **Errors** with `RankMismatch` if the number of coordinates does not
    /// equal the rank, or `OutOfBounds` if any coordinate exceeds its
    /// dimension.
    pub fn at(&self, index: &[Ix]) -> Result<&A, ArrayError>
    {
        self.check_coords(index)?;
        Ok(self.elem_at(flatten_index(index, &self.strides)))
    }

    /// Return a mutable reference to the element at the given
    /// multi-dimensional index, unsharing the storage first if needed.
    pub fn at_mut(&mut self, index: &[Ix]) -> Result<&mut A, ArrayError>
    where A: Clone
    {
        self.check_coords(index)?;
        self.ensure_unique();
        let flat = flatten_index(index, &self.strides);
        let slice = self.data.owned_mut().expect("storage is owned after ensure_unique");
        Ok(&mut slice[flat])
    }

    fn check_coords(&self, index: &[Ix]) -> Result<(), ArrayError>
    {
        if index.len() != self.ndim() {
            return Err(from_kind(ErrorKind::RankMismatch));
        }
        if index.iter().zip(&self.shape).any(|(&i, &d)| i >= d) {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(())
    }

    /// Set every element to `elem`.
    pub fn fill(&mut self, elem: A)
    where A: Clone
    {
        self.ensure_unique();
        if let Some(slice) = self.data.owned_mut() {
            slice.fill(elem);
        }
    }

    /// Return a contiguous slice of the elements in logical order, if the
    /// layout permits one.
    ///
    /// Owned arrays are always contiguous; only strided views return `None`.
    /// This, together with [`Array::len`] and [`Array::shape`], is the whole
    /// surface a rendering or export layer needs.
    pub fn as_slice(&self) -> Option<&[A]>
    {
        if !self.is_standard_layout() {
            return None;
        }
        match &self.data {
            Storage::Owned(v) => Some(v),
            Storage::Shared { buf, offset } => Some(&buf[*offset..*offset + self.len]),
        }
    }

    /// Transform the array into `shape`, copying the elements.
    ///
    /// The result is always a fresh owning array in row-major layout;
    /// reshape never returns a view, so there is no lifetime coupling
    /// between the result and `self`.
    ///
    /// **Errors** with `IncompatibleShape` if the product of `shape` differs
    /// from `self.len()`.
    pub fn reshape(&self, shape: Shape) -> Result<Array<A>, ArrayError>
    where A: Clone
    {
        if size_of(&shape) != self.len {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        Ok(Array::from_data(shape, self.iter().cloned().collect()))
    }

    /// Return a rank-1 copy of the array with the same elements in logical
    /// order.
    pub fn flatten(&self) -> Array<A>
    where A: Clone
    {
        Array::from_data(vec![self.len], self.iter().cloned().collect())
    }

    /// Return an iterator over the elements in logical (row-major) order.
    pub fn iter(&self) -> Iter<'_, A>
    {
        Iter::new(self)
    }

    /// Return the elements in logical order as a vector.
    pub fn to_vec(&self) -> Vec<A>
    where A: Clone
    {
        self.iter().cloned().collect()
    }

    /// Apply `f` to every element (by value) and collect the results into a
    /// new array of the same shape.
    pub fn mapv<B, F>(&self, mut f: F) -> Array<B>
    where
        A: Clone,
        F: FnMut(A) -> B,
    {
        Array::from_data(self.shape.clone(), self.iter().map(|x| f(x.clone())).collect())
    }

    /// Apply `f` to every element (by reference) and collect the results
    /// into a new array of the same shape.
    pub fn map<B, F>(&self, f: F) -> Array<B>
    where F: FnMut(&A) -> B
    {
        Array::from_data(self.shape.clone(), self.iter().map(f).collect())
    }

    /// Turn the array into a shared, contiguous buffer suitable for
    /// building views with [`Array::view_with`].
    pub fn into_shared(mut self) -> Arc<[A]>
    where A: Clone
    {
        self.ensure_unique();
        match self.data {
            Storage::Owned(v) => Arc::from(v),
            // ensure_unique always leaves owned storage
            Storage::Shared { .. } => unreachable!(),
        }
    }

    /// Make the storage uniquely owned and contiguous, cloning the elements
    /// out of a shared buffer if needed.
    ///
    /// Owned arrays are contiguous row-major by construction, so this only
    /// ever copies for views.
    fn ensure_unique(&mut self)
    where A: Clone
    {
        if self.data.is_owned() {
            return;
        }
        let data: Vec<A> = self.iter().cloned().collect();
        self.strides = strides_of(&self.shape);
        self.data = Storage::Owned(data);
    }
}
