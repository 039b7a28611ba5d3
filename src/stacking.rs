// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape-changing operations that reindex and copy data between arrays:
//! concatenation, stacking, splitting, repetition and tiling.

use crate::dimension::{size_of, unravel_index, Axis, Ix};
use crate::error::*;
use crate::Array;

/// Concatenate `arrays` along `axis`.
///
/// All inputs must share rank and every dimension except `axis`. The result
/// matches the input shape except along `axis`, whose size is the sum of
/// the per-input sizes.
///
/// **Errors** with `EmptyInput` for an empty input slice, `RankMismatch` if
/// the inputs disagree in rank, `AxisOutOfBounds` if `axis` exceeds the
/// rank, and `IncompatibleShape` if any non-`axis` dimension disagrees.
pub fn concatenate<A>(arrays: &[Array<A>], axis: Axis) -> Result<Array<A>, ArrayError>
where A: Clone
{
    let first = arrays.first().ok_or_else(|| from_kind(ErrorKind::EmptyInput))?;
    if arrays.len() == 1 {
        return Ok(first.clone());
    }
    let ndim = first.ndim();
    if arrays.iter().any(|a| a.ndim() != ndim) {
        return Err(from_kind(ErrorKind::RankMismatch));
    }
    let axis = axis.index();
    if axis >= ndim {
        return Err(from_kind(ErrorKind::AxisOutOfBounds));
    }
    let mut result_shape = first.shape().to_vec();
    result_shape[axis] = 0;
    for a in arrays {
        for i in 0..ndim {
            if i != axis && a.shape()[i] != result_shape[i] {
                return Err(from_kind(ErrorKind::IncompatibleShape));
            }
        }
        result_shape[axis] += a.shape()[axis];
    }

    let total = size_of(&result_shape);
    let mut data = Vec::with_capacity(total);
    for flat in 0..total {
        let mut index = unravel_index(flat, &result_shape);
        // walk the axis segments to find the source array this
        // coordinate falls in
        let mut source = 0;
        while index[axis] >= arrays[source].shape()[axis] {
            index[axis] -= arrays[source].shape()[axis];
            source += 1;
        }
        data.push(arrays[source].at(&index)?.clone());
    }
    Ok(Array::from_data(result_shape, data))
}

/// Stack `arrays` along a new axis inserted at position `axis`.
///
/// All inputs must share an identical shape; the new dimension has size
/// `arrays.len()` and each input occupies one slot along it.
///
/// **Errors** with `EmptyInput` for an empty input slice,
/// `AxisOutOfBounds` if `axis` exceeds the result rank (input rank plus
/// one insertion point at the end), and `IncompatibleShape` if the input
/// shapes differ.
pub fn stack<A>(arrays: &[Array<A>], axis: Axis) -> Result<Array<A>, ArrayError>
where A: Clone
{
    let first = arrays.first().ok_or_else(|| from_kind(ErrorKind::EmptyInput))?;
    let base_shape = first.shape();
    if arrays.iter().any(|a| a.shape() != base_shape) {
        return Err(from_kind(ErrorKind::IncompatibleShape));
    }
    let axis = axis.index();
    if axis > base_shape.len() {
        return Err(from_kind(ErrorKind::AxisOutOfBounds));
    }
    let mut result_shape = base_shape.to_vec();
    result_shape.insert(axis, arrays.len());

    let total = size_of(&result_shape);
    let mut data = Vec::with_capacity(total);
    for flat in 0..total {
        let mut index = unravel_index(flat, &result_shape);
        let slot = index.remove(axis);
        data.push(arrays[slot].at(&index)?.clone());
    }
    Ok(Array::from_data(result_shape, data))
}

/// Partition `a` along `axis` into `cut_points.len() + 1` contiguous
/// segments bounded by 0, the cut points, and the axis extent.
///
/// Each segment is returned as a new owning array.
///
/// **Errors** with `AxisOutOfBounds` if `axis` exceeds the rank, and
/// `OutOfBounds` if the cut points are not ascending or exceed the axis
/// extent.
pub fn split<A>(a: &Array<A>, axis: Axis, cut_points: &[Ix])
    -> Result<Vec<Array<A>>, ArrayError>
where A: Clone
{
    let axis = axis.index();
    if axis >= a.ndim() {
        return Err(from_kind(ErrorKind::AxisOutOfBounds));
    }
    let extent = a.shape()[axis];
    let mut bounds = Vec::with_capacity(cut_points.len() + 2);
    bounds.push(0);
    bounds.extend_from_slice(cut_points);
    bounds.push(extent);
    if bounds.windows(2).any(|w| w[0] > w[1]) || cut_points.iter().any(|&c| c > extent) {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }

    let mut segments = Vec::with_capacity(bounds.len() - 1);
    for w in bounds.windows(2) {
        let (start, end) = (w[0], w[1]);
        let mut seg_shape = a.shape().to_vec();
        seg_shape[axis] = end - start;
        let total = size_of(&seg_shape);
        let mut data = Vec::with_capacity(total);
        for flat in 0..total {
            let mut index = unravel_index(flat, &seg_shape);
            index[axis] += start;
            data.push(a.at(&index)?.clone());
        }
        segments.push(Array::from_data(seg_shape, data));
    }
    Ok(segments)
}

/// Tile `a` end-to-end `times` times along `axis`.
///
/// Block repeat semantics: each full copy is appended consecutively along
/// the axis, so repeating `[a, b]` twice gives `[a, b, a, b]`, not
/// `[a, a, b, b]`.
///
/// **Errors** with `AxisOutOfBounds` if `axis` exceeds the rank.
pub fn repeat<A>(a: &Array<A>, times: usize, axis: Axis) -> Result<Array<A>, ArrayError>
where A: Clone
{
    let axis = axis.index();
    if axis >= a.ndim() {
        return Err(from_kind(ErrorKind::AxisOutOfBounds));
    }
    let axis_size = a.shape()[axis];
    let mut result_shape = a.shape().to_vec();
    result_shape[axis] = axis_size * times;

    let total = size_of(&result_shape);
    let mut data = Vec::with_capacity(total);
    for flat in 0..total {
        let mut index = unravel_index(flat, &result_shape);
        index[axis] %= axis_size;
        data.push(a.at(&index)?.clone());
    }
    Ok(Array::from_data(result_shape, data))
}

/// Replicate `a` along every dimension simultaneously, `reps[i]` times in
/// dimension `i`.
///
/// A result coordinate maps back to the source by taking it modulo the
/// original size in each dimension.
///
/// **Errors** with `RankMismatch` if `reps.len()` differs from the rank.
pub fn tile<A>(a: &Array<A>, reps: &[usize]) -> Result<Array<A>, ArrayError>
where A: Clone
{
    if reps.len() != a.ndim() {
        return Err(from_kind(ErrorKind::RankMismatch));
    }
    let result_shape: Vec<Ix> = a.shape().iter().zip(reps).map(|(&d, &r)| d * r).collect();

    let total = size_of(&result_shape);
    let mut data = Vec::with_capacity(total);
    for flat in 0..total {
        let mut index = unravel_index(flat, &result_shape);
        for (ix, &d) in index.iter_mut().zip(a.shape()) {
            *ix %= d;
        }
        data.push(a.at(&index)?.clone());
    }
    Ok(Array::from_data(result_shape, data))
}
