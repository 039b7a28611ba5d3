// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Numerical reductions over the whole array.

use num_traits::{NumCast, Zero};
use std::ops::{Add, Div};

use crate::error::*;
use crate::Array;

impl<A> Array<A>
{
    /// Return the sum of all elements.
    ///
    /// The sum of a zero-element array is zero.
    pub fn sum(&self) -> A
    where A: Clone + Zero + Add<Output = A>
    {
        self.iter().fold(A::zero(), |acc, x| acc + x.clone())
    }

    /// Return the arithmetic mean of all elements.
    ///
    /// The mean of a zero-element array is defined as zero rather than an
    /// error or a division by zero; callers that need to distinguish the
    /// empty case should check [`Array::is_empty`] first.
    pub fn mean(&self) -> A
    where A: Clone + Zero + Add<Output = A> + Div<Output = A> + NumCast
    {
        if self.is_empty() {
            return A::zero();
        }
        match A::from(self.len()) {
            Some(n) => self.sum() / n,
            // element count not representable in A; nothing sensible to
            // divide by
            None => A::zero(),
        }
    }

    /// Return the smallest element.
    ///
    /// **Errors** with `EmptyInput` if the array has no elements.
    pub fn min(&self) -> Result<A, ArrayError>
    where A: Clone + PartialOrd
    {
        let mut it = self.iter();
        let first = it.next().ok_or_else(|| from_kind(ErrorKind::EmptyInput))?;
        Ok(it.fold(first.clone(), |acc, x| if *x < acc { x.clone() } else { acc }))
    }

    /// Return the largest element.
    ///
    /// **Errors** with `EmptyInput` if the array has no elements.
    pub fn max(&self) -> Result<A, ArrayError>
    where A: Clone + PartialOrd
    {
        let mut it = self.iter();
        let first = it.next().ok_or_else(|| from_kind(ErrorKind::EmptyInput))?;
        Ok(it.fold(first.clone(), |acc, x| if *x > acc { x.clone() } else { acc }))
    }
}
