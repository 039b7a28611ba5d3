// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor functions for arrays of fixed small ranks.

use crate::Array;

/// Create a zero-dimensional (scalar) array with the element `x`.
pub fn arr0<A>(x: A) -> Array<A>
{
    Array::from_data(Vec::new(), vec![x])
}

/// Create a one-dimensional array with elements from `xs`.
pub fn arr1<A: Clone>(xs: &[A]) -> Array<A>
{
    Array::from_vec(xs.to_vec())
}

/// Create a two-dimensional array with elements from `xs`.
pub fn arr2<A: Clone, const N: usize>(xs: &[[A; N]]) -> Array<A>
{
    let data: Vec<A> = xs.iter().flat_map(|row| row.iter().cloned()).collect();
    Array::from_data(vec![xs.len(), N], data)
}

/// Create a three-dimensional array with elements from `xs`.
pub fn arr3<A: Clone, const N: usize, const M: usize>(xs: &[[[A; M]; N]]) -> Array<A>
{
    let data: Vec<A> = xs.iter()
                         .flat_map(|plane| plane.iter().flat_map(|row| row.iter().cloned()))
                         .collect();
    Array::from_data(vec![xs.len(), N, M], data)
}
