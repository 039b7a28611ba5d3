use std::fs;
use std::io::Write;

use numbits::prelude::*;
use numbits::{load, save, IoError};

#[test]
fn round_trip_f64()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix.nb");

    let a = arr2(&[[1.5, -2.25], [0.0, 1e300]]);
    save(&a, &path).unwrap();
    let b: Array<f64> = load(&path).unwrap();
    assert_eq!(a, b);
}

#[test]
fn round_trip_integers_and_bools()
{
    let dir = tempfile::tempdir().unwrap();

    let i = arr1(&[-1i32, 0, i32::MAX]);
    save(&i, dir.path().join("i")).unwrap();
    assert_eq!(load::<i32, _>(dir.path().join("i")).unwrap(), i);

    let u = arr2(&[[0u8, 255], [7, 42]]);
    save(&u, dir.path().join("u")).unwrap();
    assert_eq!(load::<u8, _>(dir.path().join("u")).unwrap(), u);

    let b = arr1(&[true, false, true]);
    save(&b, dir.path().join("b")).unwrap();
    assert_eq!(load::<bool, _>(dir.path().join("b")).unwrap(), b);
}

#[test]
fn round_trip_scalar_and_empty()
{
    let dir = tempfile::tempdir().unwrap();

    let s = arr0(3.5f32);
    save(&s, dir.path().join("scalar")).unwrap();
    let s2: Array<f32> = load(dir.path().join("scalar")).unwrap();
    assert_eq!(s2.ndim(), 0);
    assert_eq!(s2[0], 3.5);

    let e = Array::<i64>::zeros(vec![0, 4]);
    save(&e, dir.path().join("empty")).unwrap();
    let e2: Array<i64> = load(dir.path().join("empty")).unwrap();
    assert_eq!(e2.shape(), &[0, 4]);
    assert!(e2.is_empty());
}

#[test]
fn extension_is_normalized()
{
    let dir = tempfile::tempdir().unwrap();

    let a = arr1(&[1.0f64, 2.0]);
    save(&a, dir.path().join("plain")).unwrap();
    assert!(dir.path().join("plain.nb").exists());

    // an existing .nb suffix (any case) is kept as is
    save(&a, dir.path().join("upper.NB")).unwrap();
    assert!(dir.path().join("upper.NB").exists());

    // other suffixes get .nb appended, not replaced
    save(&a, dir.path().join("data.bin")).unwrap();
    assert!(dir.path().join("data.bin.nb").exists());

    // load applies the same normalization
    let b: Array<f64> = load(dir.path().join("plain")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn load_rejects_wrong_element_type()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("floats.nb");

    let a = arr1(&[1.0f64, 2.0]);
    save(&a, &path).unwrap();

    match load::<i32, _>(&path) {
        Err(IoError::BadTypeTag { found, .. }) => assert_eq!(found, 1),
        other => panic!("expected BadTypeTag, got {:?}", other.map(|a| a.shape().to_vec())),
    }
}

#[test]
fn load_rejects_corrupt_count()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.nb");

    // header claiming dtype i32, rank 1, dim 3, but a count of 2
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(&2u32.to_le_bytes()).unwrap();
    file.write_all(&1u64.to_le_bytes()).unwrap();
    file.write_all(&3u64.to_le_bytes()).unwrap();
    file.write_all(&2u64.to_le_bytes()).unwrap();
    drop(file);

    match load::<i32, _>(&path) {
        Err(IoError::CountMismatch { stored, computed }) => {
            assert_eq!(stored, 2);
            assert_eq!(computed, 3);
        }
        other => panic!("expected CountMismatch, got {:?}", other.map(|a| a.shape().to_vec())),
    }
}

#[test]
fn absurd_header_counts_fail_cleanly()
{
    let dir = tempfile::tempdir().unwrap();

    // rank u64::MAX with no dimension data behind it
    let path = dir.path().join("hugerank.nb");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(&2u32.to_le_bytes()).unwrap();
    file.write_all(&u64::MAX.to_le_bytes()).unwrap();
    drop(file);

    match load::<i32, _>(&path) {
        Err(IoError::Io(_)) => {}
        other => panic!("expected Io, got {:?}", other.map(|a| a.shape().to_vec())),
    }

    // a consistent but absurd element count with an empty payload
    let path = dir.path().join("hugecount.nb");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(&2u32.to_le_bytes()).unwrap();
    file.write_all(&1u64.to_le_bytes()).unwrap();
    file.write_all(&u64::MAX.to_le_bytes()).unwrap();
    file.write_all(&u64::MAX.to_le_bytes()).unwrap();
    drop(file);

    match load::<i32, _>(&path) {
        Err(IoError::Io(_)) => {}
        other => panic!("expected Io, got {:?}", other.map(|a| a.shape().to_vec())),
    }
}

#[test]
fn truncated_file_is_an_io_error()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.nb");
    fs::write(&path, [0u8; 3]).unwrap();

    match load::<f32, _>(&path) {
        Err(IoError::Io(_)) => {}
        other => panic!("expected Io, got {:?}", other.map(|a| a.shape().to_vec())),
    }
}

#[test]
fn persisted_views_densify()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.nb");

    let buf: std::sync::Arc<[i32]> = std::sync::Arc::from(vec![0, 1, 2, 3, 4, 5]);
    let v = Array::view_with(&buf, 0, vec![3], vec![2]).unwrap();
    save(&v, &path).unwrap();

    let back: Array<i32> = load(&path).unwrap();
    assert!(back.owns_data());
    assert_eq!(back.to_vec(), vec![0, 2, 4]);
}
