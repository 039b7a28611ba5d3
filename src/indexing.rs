// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Indexing helpers: slicing, gathering, and conditional selection.

use crate::broadcast::broadcast_to;
use crate::dimension::{broadcast_shapes, size_of, unravel_index, Axis, Ix};
use crate::error::*;
use crate::Array;

/// Extract every `step`-th element of a rank-1 array in `[start, stop)`.
///
/// `stop` is clamped to the array length; an empty result is returned when
/// `start >= stop`. The output has `ceil((stop - start) / step)` elements.
///
/// **Errors** with `RankMismatch` unless the input is rank 1, and
/// `IncompatibleDimension` for a zero step.
pub fn slice_1d<A>(a: &Array<A>, start: Ix, stop: Ix, step: Ix) -> Result<Array<A>, ArrayError>
where A: Clone
{
    if a.ndim() != 1 {
        return Err(from_kind(ErrorKind::RankMismatch));
    }
    if step == 0 {
        return Err(from_kind(ErrorKind::IncompatibleDimension));
    }
    let stop = stop.min(a.len());
    if start >= stop {
        return Ok(Array::from_vec(Vec::new()));
    }
    let count = (stop - start + step - 1) / step;
    let mut data = Vec::with_capacity(count);
    for i in 0..count {
        data.push(a.get(start + i * step)?.clone());
    }
    Ok(Array::from_vec(data))
}

/// Gather entries along `axis` at the given positions.
///
/// The result matches the input shape except along `axis`, whose size is
/// `indices.len()`; entry `i` of the result along the axis is the input's
/// entry `indices[i]`.
///
/// **Errors** with `AxisOutOfBounds` if `axis` exceeds the rank, and
/// `OutOfBounds` if any index exceeds the axis extent.
pub fn take<A>(a: &Array<A>, indices: &[Ix], axis: Axis) -> Result<Array<A>, ArrayError>
where A: Clone
{
    let axis = axis.index();
    if axis >= a.ndim() {
        return Err(from_kind(ErrorKind::AxisOutOfBounds));
    }
    let extent = a.shape()[axis];
    if indices.iter().any(|&i| i >= extent) {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    let mut result_shape = a.shape().to_vec();
    result_shape[axis] = indices.len();

    let total = size_of(&result_shape);
    let mut data = Vec::with_capacity(total);
    for flat in 0..total {
        let mut index = unravel_index(flat, &result_shape);
        index[axis] = indices[index[axis]];
        data.push(a.at(&index)?.clone());
    }
    Ok(Array::from_data(result_shape, data))
}

/// Select elements from `x` where `condition` is true and from `y`
/// elsewhere.
///
/// `x` and `y` must share a shape; `condition` is broadcast against it.
/// All three inputs are densified before selection.
///
/// **Errors** with `IncompatibleShape` if `x` and `y` differ in shape or
/// `condition` cannot be broadcast against them.
pub fn where_cond<A>(condition: &Array<bool>, x: &Array<A>, y: &Array<A>)
    -> Result<Array<A>, ArrayError>
where A: Clone
{
    if x.shape() != y.shape() {
        return Err(from_kind(ErrorKind::IncompatibleShape));
    }
    let shape = broadcast_shapes(condition.shape(), x.shape())?;
    let cond = broadcast_to(condition, &shape)?;
    let x = broadcast_to(x, &shape)?;
    let y = broadcast_to(y, &shape)?;
    let data = cond.iter()
                   .zip(x.iter().zip(y.iter()))
                   .map(|(&c, (xv, yv))| if c { xv.clone() } else { yv.clone() })
                   .collect();
    Ok(Array::from_data(shape, data))
}

/// Advanced (coordinate-list) indexing: gather `a` at the coordinate tuples
/// formed by zipping one index list per dimension.
///
/// All lists must have the same length `k`; the result is rank 1 with `k`
/// elements, where element `i` is `a` at the coordinate made of the `i`-th
/// entry of every list.
///
/// **Errors** with `RankMismatch` if the number of lists differs from the
/// rank, `IncompatibleDimension` if the lists have mismatched lengths, and
/// `OutOfBounds` if any coordinate exceeds its dimension.
pub fn index_select<A>(a: &Array<A>, index_lists: &[Vec<Ix>]) -> Result<Array<A>, ArrayError>
where A: Clone
{
    if index_lists.len() != a.ndim() {
        return Err(from_kind(ErrorKind::RankMismatch));
    }
    let first = match index_lists.first() {
        Some(first) => first,
        // rank 0: no coordinates to gather
        None => return Ok(Array::from_vec(Vec::new())),
    };
    let k = first.len();
    if index_lists.iter().any(|l| l.len() != k) {
        return Err(from_kind(ErrorKind::IncompatibleDimension));
    }
    let mut data = Vec::with_capacity(k);
    let mut coords = vec![0; a.ndim()];
    for i in 0..k {
        for (c, list) in coords.iter_mut().zip(index_lists) {
            *c = list[i];
        }
        data.push(a.at(&coords)?.clone());
    }
    Ok(Array::from_vec(data))
}
