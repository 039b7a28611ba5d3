use numbits::prelude::*;
use numbits::{concatenate, repeat, split, stack, tile};

#[test]
fn concatenate_along_rows()
{
    let a = arr2(&[[1, 2], [3, 4]]);
    let b = arr2(&[[5, 6]]);
    let c = concatenate(&[a, b], Axis(0)).unwrap();
    assert_eq!(c, arr2(&[[1, 2], [3, 4], [5, 6]]));
}

#[test]
fn concatenate_along_columns()
{
    let a = arr2(&[[1, 2], [3, 4]]);
    let b = arr2(&[[5], [6]]);
    let c = concatenate(&[a, b], Axis(1)).unwrap();
    assert_eq!(c, arr2(&[[1, 2, 5], [3, 4, 6]]));
}

#[test]
fn concatenate_single_input_copies()
{
    let a = arr1(&[1, 2, 3]);
    let c = concatenate(&[a.clone()], Axis(0)).unwrap();
    assert_eq!(c, a);
    assert!(c.owns_data());
}

#[test]
fn concatenate_errors()
{
    let none: &[Array<i32>] = &[];
    assert_eq!(concatenate(none, Axis(0)).unwrap_err().kind(), ErrorKind::EmptyInput);

    let a = arr2(&[[1, 2]]);
    let v = arr1(&[1, 2]);
    assert_eq!(concatenate(&[a.clone(), v], Axis(0)).unwrap_err().kind(),
               ErrorKind::RankMismatch);

    let b = arr2(&[[1, 2, 3]]);
    assert_eq!(concatenate(&[a.clone(), b], Axis(0)).unwrap_err().kind(),
               ErrorKind::IncompatibleShape);

    let c = arr2(&[[3, 4]]);
    assert_eq!(concatenate(&[a, c], Axis(2)).unwrap_err().kind(),
               ErrorKind::AxisOutOfBounds);
}

#[test]
fn stack_inserts_new_axis()
{
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    let b = arr2(&[[7, 8, 9], [10, 11, 12]]);

    let s = stack(&[a.clone(), b.clone()], Axis(0)).unwrap();
    assert_eq!(s.shape(), &[2, 2, 3]);
    assert_eq!(*s.at(&[0, 1, 2]).unwrap(), 6);
    assert_eq!(*s.at(&[1, 0, 0]).unwrap(), 7);

    // the new axis may also be appended after the last one
    let last = stack(&[a.clone(), b.clone()], Axis(2)).unwrap();
    assert_eq!(last.shape(), &[2, 3, 2]);
    assert_eq!(*last.at(&[1, 2, 0]).unwrap(), 6);
    assert_eq!(*last.at(&[1, 2, 1]).unwrap(), 12);

    assert_eq!(stack(&[a.clone(), b], Axis(3)).unwrap_err().kind(),
               ErrorKind::AxisOutOfBounds);

    let short = arr2(&[[1, 2], [3, 4]]);
    assert_eq!(stack(&[a, short], Axis(0)).unwrap_err().kind(),
               ErrorKind::IncompatibleShape);
}

#[test]
fn split_partitions_axis()
{
    let a = arr1(&[1, 2, 3, 4, 5, 6]);
    let parts = split(&a, Axis(0), &[2, 4]).unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].to_vec(), vec![1, 2]);
    assert_eq!(parts[1].to_vec(), vec![3, 4]);
    assert_eq!(parts[2].to_vec(), vec![5, 6]);
}

#[test]
fn split_matrix_by_columns()
{
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    let parts = split(&a, Axis(1), &[1]).unwrap();
    assert_eq!(parts[0], arr2(&[[1], [4]]));
    assert_eq!(parts[1], arr2(&[[2, 3], [5, 6]]));
}

#[test]
fn split_allows_empty_segments()
{
    let a = arr1(&[1, 2, 3]);
    let parts = split(&a, Axis(0), &[0, 3]).unwrap();
    assert_eq!(parts[0].len(), 0);
    assert_eq!(parts[1].to_vec(), vec![1, 2, 3]);
    assert_eq!(parts[2].len(), 0);
}

#[test]
fn split_errors()
{
    let a = arr1(&[1, 2, 3]);
    assert_eq!(split(&a, Axis(1), &[1]).unwrap_err().kind(), ErrorKind::AxisOutOfBounds);
    assert_eq!(split(&a, Axis(0), &[4]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(split(&a, Axis(0), &[2, 1]).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn repeat_appends_whole_blocks()
{
    // block semantics: [a, b] twice is [a, b, a, b]
    let a = arr1(&[1, 2]);
    let r = repeat(&a, 2, Axis(0)).unwrap();
    assert_eq!(r.to_vec(), vec![1, 2, 1, 2]);

    let m = arr2(&[[1, 2], [3, 4]]);
    let rows = repeat(&m, 2, Axis(0)).unwrap();
    assert_eq!(rows, arr2(&[[1, 2], [3, 4], [1, 2], [3, 4]]));
    let cols = repeat(&m, 2, Axis(1)).unwrap();
    assert_eq!(cols, arr2(&[[1, 2, 1, 2], [3, 4, 3, 4]]));

    assert_eq!(repeat(&a, 2, Axis(1)).unwrap_err().kind(), ErrorKind::AxisOutOfBounds);
}

#[test]
fn repeat_zero_times_is_empty()
{
    let a = arr1(&[1, 2, 3]);
    let r = repeat(&a, 0, Axis(0)).unwrap();
    assert_eq!(r.shape(), &[0]);
}

#[test]
fn tile_replicates_every_dimension()
{
    let a = arr2(&[[1, 2], [3, 4]]);
    let t = tile(&a, &[2, 1]).unwrap();
    assert_eq!(t, arr2(&[[1, 2], [3, 4], [1, 2], [3, 4]]));

    let both = tile(&a, &[2, 2]).unwrap();
    assert_eq!(both.shape(), &[4, 4]);
    assert_eq!(*both.at(&[3, 3]).unwrap(), 4);
    assert_eq!(*both.at(&[2, 1]).unwrap(), 2);

    assert_eq!(tile(&a, &[2]).unwrap_err().kind(), ErrorKind::RankMismatch);
}
