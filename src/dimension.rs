// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride arithmetic.
//!
//! Shapes here are runtime vectors of dimension sizes; rank is the vector
//! length, and a zero-length shape describes a scalar of logical size 1.
//! Strides are measured in elements, not bytes, with the last dimension
//! varying fastest (row-major).

use crate::error::*;

/// Array index type.
pub type Ix = usize;

/// Per-dimension sizes of an array; rank is the length of the vector.
pub type Shape = Vec<Ix>;

/// Per-dimension element steps; same length as the corresponding shape.
pub type Strides = Vec<Ix>;

/// An axis index.
///
/// An axis is one of an array’s “dimensions”; an *n*-dimensional array has *n*
/// axes. Axis *0* is the outermost dimension, axis *n* - 1 the innermost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Axis(pub usize);

impl Axis
{
    /// Return the index of the axis.
    #[inline(always)]
    pub fn index(self) -> usize
    {
        self.0
    }
}

/// Compute the number of elements described by `shape`.
///
/// The empty shape has size 1 (the scalar case); any zero-sized dimension
/// makes the whole product zero.
pub fn size_of(shape: &[Ix]) -> usize
{
    shape.iter().product()
}

/// Compute row-major strides for `shape`.
///
/// Shape (a, b, c) gives strides (b * c, c, 1); the empty shape gives
/// empty strides.
pub fn strides_of(shape: &[Ix]) -> Strides
{
    let mut strides = vec![1; shape.len()];
    let mut cum_prod = 1;
    for (s, &dim) in strides.iter_mut().rev().zip(shape.iter().rev()) {
        *s = cum_prod;
        cum_prod *= dim;
    }
    strides
}

/// Dot product of a multi-dimensional index with strides, giving the flat
/// element offset.
///
/// The caller guarantees `indices.len() == strides.len()` and that every
/// index is in range for its dimension.
pub fn flatten_index(indices: &[Ix], strides: &[Ix]) -> Ix
{
    indices.iter().zip(strides).map(|(&i, &s)| i * s).sum()
}

/// Recover the multi-dimensional index corresponding to `flat` in the
/// row-major enumeration of `shape`.
///
/// Inverse of [`flatten_index`] for standard (contiguous) strides.
pub fn unravel_index(flat: Ix, shape: &[Ix]) -> Vec<Ix>
{
    let mut rem = flat;
    let mut indices = vec![0; shape.len()];
    for (ix, stride) in indices.iter_mut().zip(strides_of(shape)) {
        *ix = rem / stride;
        rem %= stride;
    }
    indices
}

/// Calculate the common shape a pair of shapes can be broadcast to, or an
/// error if they are not compatible.
///
/// Shapes are aligned from the trailing dimension; each aligned pair must be
/// equal, or one of the two must be 1 (stretchable to the other). Missing
/// leading dimensions count as 1. Follows the [NumPy broadcasting rules]
/// (https://numpy.org/doc/stable/user/basics.broadcasting.html).
pub fn broadcast_shapes(shape1: &[Ix], shape2: &[Ix]) -> Result<Shape, ArrayError>
{
    // Swap the order if shape2 is longer; the output has the longer rank.
    if shape1.len() < shape2.len() {
        return broadcast_shapes(shape2, shape1);
    }
    let k = shape1.len() - shape2.len();
    let mut out = shape1.to_vec();
    for (out, &s2) in out[k..].iter_mut().zip(shape2) {
        if *out != s2 {
            if *out == 1 {
                *out = s2;
            } else if s2 != 1 {
                return Err(from_kind(ErrorKind::IncompatibleShape));
            }
        }
    }
    Ok(out)
}

/// Return whether two shapes can be broadcast together.
pub fn can_broadcast(shape1: &[Ix], shape2: &[Ix]) -> bool
{
    broadcast_shapes(shape1, shape2).is_ok()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_size_of()
    {
        assert_eq!(size_of(&[]), 1);
        assert_eq!(size_of(&[4]), 4);
        assert_eq!(size_of(&[2, 3, 4]), 24);
        assert_eq!(size_of(&[2, 0, 4]), 0);
    }

    #[test]
    fn test_strides_of()
    {
        assert_eq!(strides_of(&[]), Vec::<Ix>::new());
        assert_eq!(strides_of(&[7]), vec![1]);
        assert_eq!(strides_of(&[2, 3, 4]), vec![12, 4, 1]);
    }

    #[test]
    fn flatten_unravel_inverse()
    {
        let shape = [2, 3, 4];
        let strides = strides_of(&shape);
        for flat in 0..size_of(&shape) {
            let ix = unravel_index(flat, &shape);
            assert!(ix.iter().zip(&shape).all(|(&i, &d)| i < d));
            assert_eq!(flatten_index(&ix, &strides), flat);
        }
    }

    #[test]
    fn broadcast_rules()
    {
        assert_eq!(broadcast_shapes(&[2, 3], &[3]), Ok(vec![2, 3]));
        assert_eq!(broadcast_shapes(&[2, 1], &[1, 4]), Ok(vec![2, 4]));
        assert_eq!(broadcast_shapes(&[], &[5, 2]), Ok(vec![5, 2]));
        assert_eq!(broadcast_shapes(&[1], &[3, 1, 7]), Ok(vec![3, 1, 7]));
        assert_eq!(broadcast_shapes(&[2, 3], &[2, 4]),
                   Err(from_kind(ErrorKind::IncompatibleShape)));
        assert!(can_broadcast(&[2, 1, 4], &[8, 4]));
        assert!(!can_broadcast(&[3], &[2]));
    }
}
