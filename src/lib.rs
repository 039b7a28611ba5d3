// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `numbits` crate provides [`Array`], a dynamic-rank numerical
//! container similar to numpy's ndarray, intended as a small computation
//! layer under higher-level tools (plotting, statistics) and usable
//! standalone.
//!
//! ## Highlights
//!
//! - Arbitrary rank with runtime shape and stride vectors; row-major layout.
//! - NumPy-style broadcasting for elementwise arithmetic and comparisons.
//!   Broadcasting always materializes a dense result
//!   (see [`broadcast_to`]); it never returns a lazy strided view. This
//!   trades memory for simplicity: every consumer sees a contiguous buffer.
//! - Shape manipulation: [`concatenate`], [`stack`], [`split`], [`repeat`]
//!   (block semantics), [`tile`].
//! - Small-matrix linear algebra: [`matmul`], [`dot`], [`transpose`],
//!   [`determinant`], [`inverse`], [`trace`]. Determinant and inverse use
//!   recursive cofactor expansion and are exponential in the matrix size;
//!   they are meant for small matrices only.
//! - Indexing helpers: [`slice_1d`], [`take`], [`where_cond`],
//!   [`index_select`].
//! - Binary persistence of arrays in a simple tagged format ([`save`],
//!   [`load`]).
//!
//! ## Ownership and views
//!
//! An array either owns its elements or aliases a window of a
//! reference-counted buffer (a *view*, see [`Array::view_with`]). Views keep
//! the parent buffer alive through the reference count, so they can never
//! dangle. Mutating a view unshares its storage first (copy-on-write);
//! [`Array::clone`] always produces an independently owned, contiguous deep
//! copy. [`Array::reshape`] likewise always copies.
//!
//! The crate is single-threaded by design: no operation spawns concurrent
//! work, and mutation requires exclusive (`&mut`) access. The optional
//! `rayon` feature parallelizes only bulk random fills, where every output
//! position is written exactly once by exactly one worker.
//!
//! ## Errors
//!
//! Fallible operations return `Result<_, ArrayError>` and never mutate
//! caller-visible state on failure. The arithmetic *operators* (`+`, `-`,
//! `*`, `/`) are sugar over the fallible functions ([`add`], [`subtract`],
//! ...) and panic on shape errors instead of returning them.

mod data_repr;
pub mod dimension;
mod error;

mod arrayformat;
mod arraytraits;
mod broadcast;
mod free_functions;
mod impl_constructors;
mod impl_methods;
mod impl_numeric;
mod impl_ops;
mod indexing;
mod io;
mod iterators;
mod linalg;
mod random;
mod stacking;

#[cfg(feature = "approx")]
mod array_approx;
mod impl_float_maths;

pub mod prelude;

pub use crate::dimension::{broadcast_shapes, can_broadcast, flatten_index, size_of, strides_of,
                           unravel_index};
pub use crate::dimension::{Axis, Ix, Shape, Strides};
pub use crate::error::{ArrayError, ErrorKind};

pub use crate::broadcast::{broadcast_to, BroadcastIter};
pub use crate::free_functions::{arr0, arr1, arr2, arr3};
pub use crate::impl_ops::{add, divide, multiply, subtract, ScalarOperand};
pub use crate::impl_ops::{equal, greater, greater_equal, less, less_equal, not_equal};
pub use crate::indexing::{index_select, slice_1d, take, where_cond};
pub use crate::io::{load, save, DType, Element, IoError, FILE_EXTENSION};
pub use crate::iterators::Iter;
pub use crate::linalg::{determinant, dot, inverse, matmul, trace, transpose, LinalgScalar};
pub use crate::stacking::{concatenate, repeat, split, stack, tile};

use crate::data_repr::Storage;

/// A dynamic-rank array of elements `A`.
///
/// The array carries a shape vector (per-dimension sizes), a stride vector
/// (per-dimension element steps, row-major for owned arrays) and either an
/// owned buffer or a shared window into another array's buffer.
///
/// Logical element order is always row-major over the shape, regardless of
/// the physical strides. The logical element count is the product of the
/// shape; the empty shape describes a scalar holding one element.
pub struct Array<A>
{
    data: Storage<A>,
    shape: Shape,
    strides: Strides,
    len: usize,
}

impl<A: Clone> Clone for Array<A>
{
    /// Deep copy: the clone always owns freshly allocated, contiguous
    /// row-major storage, even when `self` is a view.
    fn clone(&self) -> Self
    {
        Array::from_data(self.shape.clone(), self.iter().cloned().collect())
    }
}
