// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error::Error;
use std::fmt;

/// An error related to array shape, rank, bounds or numeric preconditions.
#[derive(Clone, Debug)]
pub struct ArrayError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ArrayError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }
}

/// Error code for an error related to array shape or contents.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug)]
#[non_exhaustive]
pub enum ErrorKind
{
    /// operand shapes are incompatible for the requested operation
    IncompatibleShape,
    /// an operation received an array of unsupported rank
    RankMismatch,
    /// a specific dimension is incompatible (e.g. matmul inner dimensions)
    IncompatibleDimension,
    /// axis index exceeds the rank of the array
    AxisOutOfBounds,
    /// coordinate or flat index exceeds bounds
    OutOfBounds,
    /// matrix inverse requested on a near-zero-determinant matrix
    SingularMatrix,
    /// reduction requested on a zero-element array where no scalar exists
    EmptyInput,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError
{
    ArrayError { repr: k }
}

impl PartialEq for ErrorKind
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        *self as u8 == *rhs as u8
    }
}

impl PartialEq for ArrayError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::IncompatibleShape => "incompatible shapes",
            ErrorKind::RankMismatch => "unsupported rank",
            ErrorKind::IncompatibleDimension => "incompatible dimensions",
            ErrorKind::AxisOutOfBounds => "axis out of bounds",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::SingularMatrix => "matrix is singular",
            ErrorKind::EmptyInput => "empty input",
        };
        write!(f, "{}", description)
    }
}
