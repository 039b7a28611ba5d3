// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! numbits prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!
//! ```
//! use numbits::prelude::*;
//! ```

pub use crate::Array;

pub use crate::dimension::{Axis, Ix, Shape, Strides};

pub use crate::error::{ArrayError, ErrorKind};

pub use crate::free_functions::{arr0, arr1, arr2, arr3};

pub use crate::broadcast::broadcast_to;

pub use crate::linalg::LinalgScalar;

pub use crate::impl_ops::ScalarOperand;
