// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod approx_impls
{
    use approx::{AbsDiffEq, RelativeEq};

    use crate::Array;

    impl<A> AbsDiffEq for Array<A>
    where
        A: AbsDiffEq,
        A::Epsilon: Clone,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon
        {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: A::Epsilon) -> bool
        {
            self.shape() == other.shape()
                && self.iter()
                       .zip(other.iter())
                       .all(|(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    impl<A> RelativeEq for Array<A>
    where
        A: RelativeEq,
        A::Epsilon: Clone,
    {
        fn default_max_relative() -> A::Epsilon
        {
            A::default_max_relative()
        }

        fn relative_eq(&self, other: &Self, epsilon: A::Epsilon, max_relative: A::Epsilon)
            -> bool
        {
            self.shape() == other.shape()
                && self.iter()
                       .zip(other.iter())
                       .all(|(a, b)| {
                           A::relative_eq(a, b, epsilon.clone(), max_relative.clone())
                       })
        }
    }
}
