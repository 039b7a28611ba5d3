// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Binary persistence of arrays.
//!
//! The on-disk format is little-endian and sequential:
//!
//! 1. element-type tag, `u32` (see [`DType`]);
//! 2. dimension count, `u64`;
//! 3. one `u64` size per dimension;
//! 4. total element count, `u64`, redundant with the shape and kept as a
//!    cross-check;
//! 5. the raw elements in row-major order, no padding.
//!
//! File names are normalized to the `.nb` suffix when another suffix (or
//! none) is given. Loading validates that the stored type tag matches the
//! requested element type and that the stored count matches the
//! shape-derived count.

use std::error::Error;
use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::dimension::size_of;
use crate::Array;

/// The normalized file suffix for persisted arrays.
pub const FILE_EXTENSION: &str = "nb";

// Upper bound on allocation sized from header fields alone. The header is
// untrusted until the payload has actually been read, so larger vectors
// start here and grow as elements arrive.
const MAX_HEADER_PREALLOC: usize = 1 << 16;

/// On-disk element type tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DType
{
    F32 = 0,
    F64 = 1,
    I32 = 2,
    I64 = 3,
    U8 = 4,
    Bool = 5,
}

impl DType
{
    fn from_tag(tag: u32) -> Option<DType>
    {
        match tag {
            0 => Some(DType::F32),
            1 => Some(DType::F64),
            2 => Some(DType::I32),
            3 => Some(DType::I64),
            4 => Some(DType::U8),
            5 => Some(DType::Bool),
            _ => None,
        }
    }
}

/// An error raised while persisting or loading an array.
#[derive(Debug)]
pub enum IoError
{
    /// an underlying I/O failure
    Io(std::io::Error),
    /// the file's element-type tag disagrees with the requested type
    BadTypeTag
    {
        expected: DType,
        found: u32,
    },
    /// the stored element count disagrees with the shape-derived count
    CountMismatch
    {
        stored: u64,
        computed: u64,
    },
}

impl From<std::io::Error> for IoError
{
    fn from(e: std::io::Error) -> IoError
    {
        IoError::Io(e)
    }
}

impl Error for IoError
{
    fn source(&self) -> Option<&(dyn Error + 'static)>
    {
        match self {
            IoError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for IoError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            IoError::Io(e) => write!(f, "i/o error: {}", e),
            IoError::BadTypeTag { expected, found } => {
                write!(f, "type tag mismatch: expected {:?} ({}), found {}",
                       expected, *expected as u32, found)
            }
            IoError::CountMismatch { stored, computed } => {
                write!(f, "element count mismatch: stored {}, shape-derived {}",
                       stored, computed)
            }
        }
    }
}

/// Element types that can be persisted, with their on-disk tag and
/// little-endian encoding.
pub trait Element: Copy
{
    /// The type tag written to and checked against the file header.
    const DTYPE: DType;

    fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()>;
    fn read_from<R: Read>(r: &mut R) -> std::io::Result<Self>;
}

macro_rules! impl_element {
    ($ty:ty, $dtype:expr, $bytes:expr) => {
        impl Element for $ty
        {
            const DTYPE: DType = $dtype;

            fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()>
            {
                w.write_all(&self.to_le_bytes())
            }

            fn read_from<R: Read>(r: &mut R) -> std::io::Result<Self>
            {
                let mut buf = [0u8; $bytes];
                r.read_exact(&mut buf)?;
                Ok(<$ty>::from_le_bytes(buf))
            }
        }
    };
}

impl_element!(f32, DType::F32, 4);
impl_element!(f64, DType::F64, 8);
impl_element!(i32, DType::I32, 4);
impl_element!(i64, DType::I64, 8);
impl_element!(u8, DType::U8, 1);

impl Element for bool
{
    const DTYPE: DType = DType::Bool;

    fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()>
    {
        w.write_all(&[*self as u8])
    }

    fn read_from<R: Read>(r: &mut R) -> std::io::Result<Self>
    {
        let mut buf = [0u8; 1];
        r.read_exact(&mut buf)?;
        Ok(buf[0] != 0)
    }
}

/// Append the `.nb` suffix unless the path already carries it (in any
/// letter case).
fn ensure_extension(path: &Path) -> PathBuf
{
    if path.extension()
           .map_or(false, |ext| ext.eq_ignore_ascii_case(FILE_EXTENSION))
    {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(FILE_EXTENSION);
    PathBuf::from(name)
}

fn write_u32<W: Write>(w: &mut W, value: u32) -> std::io::Result<()>
{
    w.write_all(&value.to_le_bytes())
}

fn write_u64<W: Write>(w: &mut W, value: u64) -> std::io::Result<()>
{
    w.write_all(&value.to_le_bytes())
}

fn read_u32<R: Read>(r: &mut R) -> std::io::Result<u32>
{
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64<R: Read>(r: &mut R) -> std::io::Result<u64>
{
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Persist `a` at `path` (suffix normalized to `.nb`).
pub fn save<A, P>(a: &Array<A>, path: P) -> Result<(), IoError>
where
    A: Element,
    P: AsRef<Path>,
{
    let path = ensure_extension(path.as_ref());
    let mut file = BufWriter::new(File::create(path)?);
    write_u32(&mut file, A::DTYPE as u32)?;
    write_u64(&mut file, a.ndim() as u64)?;
    for &dim in a.shape() {
        write_u64(&mut file, dim as u64)?;
    }
    write_u64(&mut file, a.len() as u64)?;
    for elem in a.iter() {
        elem.write_to(&mut file)?;
    }
    file.flush()?;
    Ok(())
}

/// Load an array of element type `A` from `path` (suffix normalized to
/// `.nb`).
///
/// **Errors** with `BadTypeTag` if the stored tag is not `A`'s, and
/// `CountMismatch` if the stored element count disagrees with the stored
/// shape.
pub fn load<A, P>(path: P) -> Result<Array<A>, IoError>
where
    A: Element,
    P: AsRef<Path>,
{
    let path = ensure_extension(path.as_ref());
    let mut file = BufReader::new(File::open(path)?);
    let tag = read_u32(&mut file)?;
    if DType::from_tag(tag) != Some(A::DTYPE) {
        return Err(IoError::BadTypeTag {
            expected: A::DTYPE,
            found: tag,
        });
    }
    let ndim = read_u64(&mut file)? as usize;
    let mut shape = Vec::with_capacity(ndim.min(MAX_HEADER_PREALLOC));
    for _ in 0..ndim {
        shape.push(read_u64(&mut file)? as usize);
    }
    let stored = read_u64(&mut file)?;
    let computed = size_of(&shape) as u64;
    if stored != computed {
        return Err(IoError::CountMismatch { stored, computed });
    }
    let mut data = Vec::with_capacity((computed as usize).min(MAX_HEADER_PREALLOC));
    for _ in 0..computed {
        data.push(A::read_from(&mut file)?);
    }
    Ok(Array::from_data(shape, data))
}
