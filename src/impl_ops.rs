// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementwise arithmetic and comparisons, with broadcasting.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::broadcast::broadcast_to;
use crate::dimension::broadcast_shapes;
use crate::error::*;
use crate::Array;

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array
/// `a`, arithmetic like `&a + 1.0` and `&a * 2.` are allowed.
///
/// This trait does not limit which elements can be stored in an array in
/// general; non-`ScalarOperand` types still participate in array-array
/// arithmetic.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for bool {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}

fn binary_op<A, F>(a: &Array<A>, b: &Array<A>, mut f: F) -> Result<Array<A>, ArrayError>
where
    A: Clone,
    F: FnMut(A, A) -> A,
{
    let shape = broadcast_shapes(a.shape(), b.shape())?;
    let lhs = broadcast_to(a, &shape)?;
    let rhs = broadcast_to(b, &shape)?;
    let data = lhs.iter()
                  .zip(rhs.iter())
                  .map(|(x, y)| f(x.clone(), y.clone()))
                  .collect();
    Ok(Array::from_data(shape, data))
}

fn compare_op<A, F>(a: &Array<A>, b: &Array<A>, mut f: F) -> Result<Array<bool>, ArrayError>
where
    A: Clone,
    F: FnMut(&A, &A) -> bool,
{
    let shape = broadcast_shapes(a.shape(), b.shape())?;
    let lhs = broadcast_to(a, &shape)?;
    let rhs = broadcast_to(b, &shape)?;
    let data = lhs.iter().zip(rhs.iter()).map(|(x, y)| f(x, y)).collect();
    Ok(Array::from_data(shape, data))
}

macro_rules! elementwise_op {
    ($func:ident, $trt:ident, $mth:ident, $doc:expr) => {
        /// Perform elementwise
        #[doc = $doc]
        /// of `a` and `b`, broadcasting their shapes together.
        ///
        /// The result is a new owning array of the broadcast shape.
        ///
        /// **Errors** with `IncompatibleShape` if the shapes cannot be
        /// broadcast together.
        pub fn $func<A>(a: &Array<A>, b: &Array<A>) -> Result<Array<A>, ArrayError>
        where A: Clone + $trt<Output = A>
        {
            binary_op(a, b, $trt::$mth)
        }
    };
}

elementwise_op!(add, Add, add, "addition");
elementwise_op!(subtract, Sub, sub, "subtraction");
elementwise_op!(multiply, Mul, mul, "multiplication");
elementwise_op!(divide, Div, div, "division");

macro_rules! comparison_op {
    ($func:ident, $op:tt, $(#[$meta:meta])*) => {
        $(#[$meta])*
        /// The operand shapes are broadcast together; the result is a
        /// boolean array of the broadcast shape.
        ///
        /// **Errors** with `IncompatibleShape` if the shapes cannot be
        /// broadcast together.
        pub fn $func<A>(a: &Array<A>, b: &Array<A>) -> Result<Array<bool>, ArrayError>
        where A: Clone + PartialOrd
        {
            compare_op(a, b, |x, y| x $op y)
        }
    };
}

comparison_op!(equal, ==, #[doc = "Elementwise `a == b`."]);
comparison_op!(not_equal, !=, #[doc = "Elementwise `a != b`."]);
comparison_op!(less, <, #[doc = "Elementwise `a < b`."]);
comparison_op!(less_equal, <=, #[doc = "Elementwise `a <= b`."]);
comparison_op!(greater, >, #[doc = "Elementwise `a > b`."]);
comparison_op!(greater_equal, >=, #[doc = "Elementwise `a >= b`."]);

macro_rules! impl_binary_op {
    ($trt:ident, $mth:ident, $func:ident, $doc:expr) => {
        /// Perform elementwise
        #[doc = $doc]
        /// between `self` and `rhs`, and return the result.
        ///
        /// If their shapes disagree, the operands are broadcast to their
        /// common broadcast shape.
        ///
        /// **Panics** if broadcasting isn't possible.
        impl<'a, A> $trt<&'a Array<A>> for &'a Array<A>
        where A: Clone + $trt<Output = A>
        {
            type Output = Array<A>;
            fn $mth(self, rhs: &'a Array<A>) -> Array<A>
            {
                match $func(self, rhs) {
                    Ok(out) => out,
                    Err(e) => panic!("numbits: {}", e),
                }
            }
        }

        /// Perform elementwise
        #[doc = $doc]
        /// between `self` and `rhs`, and return the result.
        ///
        /// **Panics** if broadcasting isn't possible.
        impl<A> $trt<Array<A>> for Array<A>
        where A: Clone + $trt<Output = A>
        {
            type Output = Array<A>;
            fn $mth(self, rhs: Array<A>) -> Array<A>
            {
                (&self).$mth(&rhs)
            }
        }

        /// Perform elementwise
        #[doc = $doc]
        /// between `self` and the scalar `rhs`, and return the result.
        impl<A> $trt<A> for &Array<A>
        where A: ScalarOperand + $trt<Output = A>
        {
            type Output = Array<A>;
            fn $mth(self, rhs: A) -> Array<A>
            {
                self.mapv(|x| x.$mth(rhs.clone()))
            }
        }

        /// Perform elementwise
        #[doc = $doc]
        /// between `self` and the scalar `rhs`, and return the result.
        impl<A> $trt<A> for Array<A>
        where A: ScalarOperand + $trt<Output = A>
        {
            type Output = Array<A>;
            fn $mth(self, rhs: A) -> Array<A>
            {
                (&self).$mth(rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add, "addition");
impl_binary_op!(Sub, sub, subtract, "subtraction");
impl_binary_op!(Mul, mul, multiply, "multiplication");
impl_binary_op!(Div, div, divide, "division");

// Left hand side scalar operands need one impl per concrete scalar type.
macro_rules! impl_scalar_lhs_op {
    ($scalar:ty) => {
        impl Add<&Array<$scalar>> for $scalar
        {
            type Output = Array<$scalar>;
            fn add(self, rhs: &Array<$scalar>) -> Array<$scalar>
            {
                rhs.mapv(|x| self + x)
            }
        }

        impl Sub<&Array<$scalar>> for $scalar
        {
            type Output = Array<$scalar>;
            fn sub(self, rhs: &Array<$scalar>) -> Array<$scalar>
            {
                rhs.mapv(|x| self - x)
            }
        }

        impl Mul<&Array<$scalar>> for $scalar
        {
            type Output = Array<$scalar>;
            fn mul(self, rhs: &Array<$scalar>) -> Array<$scalar>
            {
                rhs.mapv(|x| self * x)
            }
        }

        impl Div<&Array<$scalar>> for $scalar
        {
            type Output = Array<$scalar>;
            fn div(self, rhs: &Array<$scalar>) -> Array<$scalar>
            {
                rhs.mapv(|x| self / x)
            }
        }

        impl Add<Array<$scalar>> for $scalar
        {
            type Output = Array<$scalar>;
            fn add(self, rhs: Array<$scalar>) -> Array<$scalar>
            {
                self + &rhs
            }
        }

        impl Sub<Array<$scalar>> for $scalar
        {
            type Output = Array<$scalar>;
            fn sub(self, rhs: Array<$scalar>) -> Array<$scalar>
            {
                self - &rhs
            }
        }

        impl Mul<Array<$scalar>> for $scalar
        {
            type Output = Array<$scalar>;
            fn mul(self, rhs: Array<$scalar>) -> Array<$scalar>
            {
                self * &rhs
            }
        }

        impl Div<Array<$scalar>> for $scalar
        {
            type Output = Array<$scalar>;
            fn div(self, rhs: Array<$scalar>) -> Array<$scalar>
            {
                self / &rhs
            }
        }
    };
}

impl_scalar_lhs_op!(i32);
impl_scalar_lhs_op!(i64);
impl_scalar_lhs_op!(u8);
impl_scalar_lhs_op!(f32);
impl_scalar_lhs_op!(f64);

/// Perform elementwise negation of `self`, and return the result.
impl<A> Neg for &Array<A>
where A: Clone + Neg<Output = A>
{
    type Output = Array<A>;
    fn neg(self) -> Array<A>
    {
        self.mapv(|x| -x)
    }
}

/// Perform elementwise negation of `self`, and return the result.
impl<A> Neg for Array<A>
where A: Clone + Neg<Output = A>
{
    type Output = Array<A>;
    fn neg(self) -> Array<A>
    {
        -&self
    }
}
