// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use crate::iterators::Iter;
use crate::Array;

/// Access the element at flat (row-major logical) position `index`.
///
/// **Panics** if the index is out of bounds. Use [`Array::get`] for a
/// fallible variant.
impl<A> Index<usize> for Array<A>
{
    type Output = A;

    fn index(&self, index: usize) -> &A
    {
        match self.get(index) {
            Ok(elem) => elem,
            Err(_) => panic!("numbits: index {} out of bounds for array of len {}",
                             index, self.len()),
        }
    }
}

/// Access the element at flat position `index` mutably, unsharing the
/// storage first if this array is a view.
///
/// **Panics** if the index is out of bounds.
impl<A: Clone> IndexMut<usize> for Array<A>
{
    fn index_mut(&mut self, index: usize) -> &mut A
    {
        let len = self.len();
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(_) => panic!("numbits: index {} out of bounds for array of len {}", index, len),
        }
    }
}

/// Arrays are equal when their shapes match and every pair of elements at
/// the same logical position is equal.
impl<A: PartialEq> PartialEq for Array<A>
{
    fn eq(&self, rhs: &Array<A>) -> bool
    {
        self.shape() == rhs.shape() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for Array<A> {}

/// Create a one-dimensional array from a vector (no copying needed).
impl<A> From<Vec<A>> for Array<A>
{
    fn from(v: Vec<A>) -> Array<A>
    {
        Array::from_vec(v)
    }
}

/// Create a one-dimensional array from an iterable.
impl<A> FromIterator<A> for Array<A>
{
    fn from_iter<I>(iterable: I) -> Array<A>
    where I: IntoIterator<Item = A>
    {
        Array::from_vec(iterable.into_iter().collect())
    }
}

impl<'a, A> IntoIterator for &'a Array<A>
{
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl<A> Default for Array<A>
{
    /// An empty rank-1 array.
    fn default() -> Array<A>
    {
        Array::from_vec(Vec::new())
    }
}
