use numbits::prelude::*;
use numbits::{index_select, slice_1d, take, where_cond};

#[test]
fn slice_1d_basic()
{
    let a = arr1(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(slice_1d(&a, 2, 6, 1).unwrap().to_vec(), vec![2, 3, 4, 5]);
    assert_eq!(slice_1d(&a, 0, 10, 3).unwrap().to_vec(), vec![0, 3, 6, 9]);
    assert_eq!(slice_1d(&a, 1, 8, 2).unwrap().to_vec(), vec![1, 3, 5, 7]);
}

#[test]
fn slice_1d_clamps_stop()
{
    let a = arr1(&[1, 2, 3]);
    assert_eq!(slice_1d(&a, 1, 100, 1).unwrap().to_vec(), vec![2, 3]);
}

#[test]
fn slice_1d_empty_when_start_passes_stop()
{
    let a = arr1(&[1, 2, 3]);
    assert!(slice_1d(&a, 2, 2, 1).unwrap().is_empty());
    assert!(slice_1d(&a, 5, 3, 1).unwrap().is_empty());
}

#[test]
fn slice_1d_errors()
{
    let a = arr1(&[1, 2, 3]);
    assert_eq!(slice_1d(&a, 0, 3, 0).unwrap_err().kind(), ErrorKind::IncompatibleDimension);

    let m = arr2(&[[1, 2], [3, 4]]);
    assert_eq!(slice_1d(&m, 0, 2, 1).unwrap_err().kind(), ErrorKind::RankMismatch);
}

#[test]
fn take_along_axis()
{
    let a = arr2(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let rows = take(&a, &[2, 0], Axis(0)).unwrap();
    assert_eq!(rows, arr2(&[[7, 8, 9], [1, 2, 3]]));

    let cols = take(&a, &[1, 1, 2], Axis(1)).unwrap();
    assert_eq!(cols, arr2(&[[2, 2, 3], [5, 5, 6], [8, 8, 9]]));
}

#[test]
fn take_errors()
{
    let a = arr1(&[1, 2, 3]);
    assert_eq!(take(&a, &[3], Axis(0)).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(take(&a, &[0], Axis(1)).unwrap_err().kind(), ErrorKind::AxisOutOfBounds);
}

#[test]
fn where_cond_selects_by_mask()
{
    let cond = arr1(&[true, false, true]);
    let x = arr1(&[1, 2, 3]);
    let y = arr1(&[10, 20, 30]);
    let out = where_cond(&cond, &x, &y).unwrap();
    assert_eq!(out.to_vec(), vec![1, 20, 3]);
}

#[test]
fn where_cond_broadcasts_condition()
{
    // a rank-1 mask applied to every row
    let cond = arr1(&[true, false]);
    let x = arr2(&[[1, 2], [3, 4]]);
    let y = arr2(&[[0, 0], [0, 0]]);
    let out = where_cond(&cond, &x, &y).unwrap();
    assert_eq!(out, arr2(&[[1, 0], [3, 0]]));
}

#[test]
fn where_cond_errors()
{
    let cond = arr1(&[true]);
    let x = arr1(&[1, 2]);
    let y = arr1(&[1, 2, 3]);
    assert_eq!(where_cond(&cond, &x, &y).unwrap_err().kind(), ErrorKind::IncompatibleShape);

    let bad_cond = arr1(&[true, false, true]);
    let x2 = arr1(&[1, 2]);
    let y2 = arr1(&[3, 4]);
    assert_eq!(where_cond(&bad_cond, &x2, &y2).unwrap_err().kind(),
               ErrorKind::IncompatibleShape);
}

#[test]
fn index_select_gathers_coordinates()
{
    let a = arr2(&[[1, 2], [3, 4]]);
    // the diagonal, then the bottom-left corner
    let out = index_select(&a, &[vec![0, 1, 1], vec![0, 1, 0]]).unwrap();
    assert_eq!(out.shape(), &[3]);
    assert_eq!(out.to_vec(), vec![1, 4, 3]);
}

#[test]
fn index_select_errors()
{
    let a = arr2(&[[1, 2], [3, 4]]);
    assert_eq!(index_select(&a, &[vec![0]]).unwrap_err().kind(), ErrorKind::RankMismatch);
    assert_eq!(index_select(&a, &[vec![0, 1], vec![0]]).unwrap_err().kind(),
               ErrorKind::IncompatibleDimension);
    assert_eq!(index_select(&a, &[vec![0], vec![2]]).unwrap_err().kind(),
               ErrorKind::OutOfBounds);
}

#[test]
fn index_select_scalar_input()
{
    let s = arr0(7);
    let out = index_select(&s, &[]).unwrap();
    assert_eq!(out.shape(), &[0]);
}
