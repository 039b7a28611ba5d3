// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element-wise math functions for float arrays.

use num_traits::Float;

use crate::Array;

macro_rules! unary_float_method {
    ($($(#[$meta:meta])* fn $id:ident)+) => {
        $($(#[$meta])*
        #[must_use = "method returns a new array and does not mutate the original value"]
        pub fn $id(&self) -> Array<A>
        {
            self.mapv(A::$id)
        })+
    };
}

/// Element-wise math functions for any array type that contains float
/// number.
impl<A: Float> Array<A>
{
    unary_float_method! {
        /// Absolute value of each element.
        fn abs
        /// Square root of each element.
        fn sqrt
        /// `e^x` of each element.
        fn exp
        /// Natural logarithm of each element.
        fn ln
        /// Base-10 logarithm of each element.
        fn log10
        /// Sine of each element (radians).
        fn sin
        /// Cosine of each element (radians).
        fn cos
        /// Tangent of each element (radians).
        fn tan
        /// Largest integer less than or equal to each element.
        fn floor
        /// Smallest integer greater than or equal to each element.
        fn ceil
        /// Nearest integer to each element, half away from zero.
        fn round
    }

    /// Float power of each element.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn powf(&self, e: A) -> Array<A>
    {
        self.mapv(|x| x.powf(e))
    }
}
