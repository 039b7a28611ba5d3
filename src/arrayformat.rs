// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::dimension::Ix;
use crate::Array;

fn format_shape(shape: &[Ix]) -> String
{
    let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
    if dims.len() == 1 {
        format!("({},)", dims[0])
    } else {
        format!("({})", dims.join(", "))
    }
}

/// Recursively write one nesting level of the array, with rows after the
/// first indented to line up under the opening brackets.
fn format_nested<A, F>(a: &Array<A>, f: &mut fmt::Formatter<'_>, index: &mut Vec<Ix>,
                       fmt_elem: &F) -> fmt::Result
where F: Fn(&A, &mut fmt::Formatter<'_>) -> fmt::Result
{
    let dim = index.len();
    if dim == a.ndim() {
        let elem = a.at(index).map_err(|_| fmt::Error)?;
        return fmt_elem(elem, f);
    }
    write!(f, "[")?;
    for i in 0..a.shape()[dim] {
        if i > 0 {
            if dim == a.ndim() - 1 {
                write!(f, ", ")?;
            } else {
                write!(f, ",\n{}", " ".repeat(dim + 1))?;
            }
        }
        index.push(i);
        format_nested(a, f, index, fmt_elem)?;
        index.pop();
    }
    write!(f, "]")
}

/// Nested-bracket rendering of the elements followed by a `shape: (…)`
/// line.
impl<A: fmt::Display> fmt::Display for Array<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_nested(self, f, &mut Vec::new(), &<A as fmt::Display>::fmt)?;
        write!(f, "\nshape: {}", format_shape(self.shape()))
    }
}

impl<A: fmt::Debug> fmt::Debug for Array<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_nested(self, f, &mut Vec::new(), &<A as fmt::Debug>::fmt)?;
        write!(f, ", shape={:?}, strides={:?}", self.shape(), self.strides())
    }
}
