// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Linear algebra on rank-2 (and rank-1 where defined) arrays.
//!
//! Determinant and inverse use recursive cofactor expansion, which is
//! exponential in the matrix size. That is a correctness-over-performance
//! choice fit for small matrices; it is not a production linear-algebra
//! kernel. Callers working with matrices beyond roughly 10 × 10 should
//! reach for a decomposition-based library instead.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::{One, Zero};

use crate::dimension::Ix;
use crate::error::*;
use crate::Array;

/// Elements that support linear algebra operations.
///
/// `Copy` so that they don't need move semantics or destructors, and the
/// rest are numerical traits.
pub trait LinalgScalar:
    'static
    + Copy
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> LinalgScalar for T where T: 'static
        + Copy
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

fn require_matrix<A>(a: &Array<A>) -> Result<(Ix, Ix), ArrayError>
{
    if a.ndim() != 2 {
        return Err(from_kind(ErrorKind::RankMismatch));
    }
    Ok((a.shape()[0], a.shape()[1]))
}

fn require_square<A>(a: &Array<A>) -> Result<Ix, ArrayError>
{
    let (m, n) = require_matrix(a)?;
    if m != n {
        return Err(from_kind(ErrorKind::IncompatibleDimension));
    }
    Ok(n)
}

/// Matrix product of two rank-2 arrays, by the standard triple loop.
///
/// **Errors** with `RankMismatch` unless both operands are rank 2, and
/// `IncompatibleDimension` unless `a` has as many columns as `b` has rows.
pub fn matmul<A>(a: &Array<A>, b: &Array<A>) -> Result<Array<A>, ArrayError>
where A: LinalgScalar
{
    let (m, n) = require_matrix(a)?;
    let (n2, p) = require_matrix(b)?;
    if n != n2 {
        return Err(from_kind(ErrorKind::IncompatibleDimension));
    }
    let mut data = Vec::with_capacity(m * p);
    for i in 0..m {
        for j in 0..p {
            let mut acc = A::zero();
            for k in 0..n {
                acc = acc + *a.at(&[i, k])? * *b.at(&[k, j])?;
            }
            data.push(acc);
        }
    }
    Ok(Array::from_data(vec![m, p], data))
}

/// Rank-aware dot product.
///
/// - rank 1 × rank 1: vector dot product, returned as a one-element array;
/// - rank 2 × rank 2: matrix product ([`matmul`]);
/// - rank 2 × rank 1: matrix-vector product, returned as a rank-1 array.
///
/// **Errors** with `RankMismatch` for any other rank combination, and
/// `IncompatibleDimension` when the inner dimensions disagree.
pub fn dot<A>(a: &Array<A>, b: &Array<A>) -> Result<Array<A>, ArrayError>
where A: LinalgScalar
{
    match (a.ndim(), b.ndim()) {
        (1, 1) => {
            if a.len() != b.len() {
                return Err(from_kind(ErrorKind::IncompatibleDimension));
            }
            let mut acc = A::zero();
            for i in 0..a.len() {
                acc = acc + *a.get(i)? * *b.get(i)?;
            }
            Ok(Array::from_vec(vec![acc]))
        }
        (2, 2) => matmul(a, b),
        (2, 1) => {
            let (m, n) = require_matrix(a)?;
            if n != b.len() {
                return Err(from_kind(ErrorKind::IncompatibleDimension));
            }
            let mut data = Vec::with_capacity(m);
            for i in 0..m {
                let mut acc = A::zero();
                for j in 0..n {
                    acc = acc + *a.at(&[i, j])? * *b.get(j)?;
                }
                data.push(acc);
            }
            Ok(Array::from_vec(data))
        }
        _ => Err(from_kind(ErrorKind::RankMismatch)),
    }
}

/// Transpose a rank-2 array, producing a new owning array with the two
/// axes swapped.
///
/// **Errors** with `RankMismatch` unless the input is rank 2.
pub fn transpose<A>(a: &Array<A>) -> Result<Array<A>, ArrayError>
where A: Clone
{
    let (m, n) = require_matrix(a)?;
    let mut data = Vec::with_capacity(m * n);
    for j in 0..n {
        for i in 0..m {
            data.push(a.at(&[i, j])?.clone());
        }
    }
    Ok(Array::from_data(vec![n, m], data))
}

/// The (n-1) × (n-1) matrix obtained by deleting row `row` and column
/// `col` from a square matrix.
fn minor<A>(a: &Array<A>, n: Ix, row: Ix, col: Ix) -> Result<Array<A>, ArrayError>
where A: LinalgScalar
{
    let mut data = Vec::with_capacity((n - 1) * (n - 1));
    for i in (0..n).filter(|&i| i != row) {
        for j in (0..n).filter(|&j| j != col) {
            data.push(*a.at(&[i, j])?);
        }
    }
    Ok(Array::from_data(vec![n - 1, n - 1], data))
}

/// Determinant of a square rank-2 array.
///
/// 1 × 1 and 2 × 2 matrices use the closed forms; anything larger uses
/// recursive Laplace expansion along the first row, which costs O(n!).
/// Intended for small matrices only.
///
/// **Errors** with `RankMismatch` unless the input is rank 2, and
/// `IncompatibleDimension` unless it is square.
pub fn determinant<A>(a: &Array<A>) -> Result<A, ArrayError>
where A: LinalgScalar
{
    let n = require_square(a)?;
    if n == 1 {
        return Ok(*a.at(&[0, 0])?);
    }
    if n == 2 {
        return Ok(*a.at(&[0, 0])? * *a.at(&[1, 1])? - *a.at(&[0, 1])? * *a.at(&[1, 0])?);
    }
    let mut det = A::zero();
    for j in 0..n {
        let term = *a.at(&[0, j])? * determinant(&minor(a, n, 0, j)?)?;
        det = if j % 2 == 0 { det + term } else { det - term };
    }
    Ok(det)
}

/// Inverse of a square rank-2 array by the classical adjugate method.
///
/// 1 × 1 and 2 × 2 matrices use the closed forms; anything larger builds
/// the cofactor matrix (one recursive determinant per cell), transposes it
/// into the adjugate and scales by the reciprocal determinant. Like
/// [`determinant`], this is exponential and meant for small matrices.
///
/// **Errors** with `RankMismatch`/`IncompatibleDimension` like
/// [`determinant`], and `SingularMatrix` if the determinant's magnitude
/// does not exceed `1e-10`.
pub fn inverse<A>(a: &Array<A>) -> Result<Array<A>, ArrayError>
where A: LinalgScalar + Float
{
    let n = require_square(a)?;
    let det = determinant(a)?;
    let eps = A::from(1e-10).unwrap_or_else(A::epsilon);
    if det.abs() <= eps {
        return Err(from_kind(ErrorKind::SingularMatrix));
    }
    let inv_det = A::one() / det;
    if n == 1 {
        return Ok(Array::from_data(vec![1, 1], vec![inv_det]));
    }
    if n == 2 {
        let data = vec![*a.at(&[1, 1])? * inv_det,
                        -*a.at(&[0, 1])? * inv_det,
                        -*a.at(&[1, 0])? * inv_det,
                        *a.at(&[0, 0])? * inv_det];
        return Ok(Array::from_data(vec![2, 2], data));
    }
    let mut adjugate = vec![A::zero(); n * n];
    for i in 0..n {
        for j in 0..n {
            let cofactor = determinant(&minor(a, n, i, j)?)?;
            let signed = if (i + j) % 2 == 0 { cofactor } else { -cofactor };
            // transposed placement builds the adjugate directly
            adjugate[j * n + i] = signed * inv_det;
        }
    }
    Ok(Array::from_data(vec![n, n], adjugate))
}

/// Sum of the main diagonal of a square rank-2 array.
///
/// **Errors** with `RankMismatch` unless the input is rank 2, and
/// `IncompatibleDimension` unless it is square.
pub fn trace<A>(a: &Array<A>) -> Result<A, ArrayError>
where A: LinalgScalar
{
    let n = require_square(a)?;
    let mut acc = A::zero();
    for i in 0..n {
        acc = acc + *a.at(&[i, i])?;
    }
    Ok(acc)
}
