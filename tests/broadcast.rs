use numbits::prelude::*;
use numbits::{broadcast_shapes, can_broadcast, BroadcastIter};
use quickcheck::quickcheck;

#[test]
fn broadcast_shape_resolution()
{
    assert_eq!(broadcast_shapes(&[2, 3], &[3]).unwrap(), vec![2, 3]);
    assert_eq!(broadcast_shapes(&[2, 1], &[4]).unwrap(), vec![2, 4]);
    assert_eq!(broadcast_shapes(&[8, 1, 6, 1], &[7, 1, 5]).unwrap(), vec![8, 7, 6, 5]);
    assert_eq!(broadcast_shapes(&[], &[2, 2]).unwrap(), vec![2, 2]);

    let err = broadcast_shapes(&[3], &[4]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);

    assert!(can_broadcast(&[5, 4], &[1]));
    assert!(!can_broadcast(&[5, 4], &[3]));
}

#[test]
fn broadcast_to_stretches_rows()
{
    let row = arr1(&[1, 2, 3]);
    let b = broadcast_to(&row, &[2, 3]).unwrap();
    assert_eq!(b.shape(), &[2, 3]);
    assert_eq!(b.to_vec(), vec![1, 2, 3, 1, 2, 3]);
    assert!(b.owns_data());
}

#[test]
fn broadcast_to_stretches_columns()
{
    let col = arr2(&[[1], [2]]);
    let b = broadcast_to(&col, &[2, 3]).unwrap();
    assert_eq!(b.to_vec(), vec![1, 1, 1, 2, 2, 2]);
}

#[test]
fn broadcast_scalar_to_anything()
{
    let s = arr0(7.);
    let b = broadcast_to(&s, &[2, 2, 2]).unwrap();
    assert_eq!(b.shape(), &[2, 2, 2]);
    assert!(b.iter().all(|&x| x == 7.));
}

#[test]
fn broadcast_resolves_against_target()
{
    // the source may also enlarge the target shape
    let a = arr2(&[[1], [2]]);
    let b = broadcast_to(&a, &[3]).unwrap();
    assert_eq!(b.shape(), &[2, 3]);
}

#[test]
fn broadcast_incompatible()
{
    let a = arr1(&[1, 2, 3]);
    let err = broadcast_to(&a, &[2, 4]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn broadcast_iter_is_row_major()
{
    let a = arr1(&[10, 20]);
    let it = BroadcastIter::new(&a, &[2, 2]).unwrap();
    let seen: Vec<i32> = it.cloned().collect();
    assert_eq!(seen, vec![10, 20, 10, 20]);
}

#[test]
fn broadcast_in_addition()
{
    // [[1,2,3],[4,5,6]] + [10,20,30] == [[11,22,33],[14,25,36]]
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    let b = arr1(&[10, 20, 30]);
    let sum = numbits::add(&a, &b).unwrap();
    assert_eq!(sum, arr2(&[[11, 22, 33], [14, 25, 36]]));
}

fn small_shape(dims: Vec<u8>) -> Vec<Ix>
{
    // keep ranks and extents small so products stay tiny
    dims.into_iter().take(4).map(|d| (d % 4) as Ix).collect()
}

quickcheck! {
    fn prop_broadcast_shapes_symmetric(a: Vec<u8>, b: Vec<u8>) -> bool {
        let a = small_shape(a);
        let b = small_shape(b);
        broadcast_shapes(&a, &b).ok() == broadcast_shapes(&b, &a).ok()
    }

    fn prop_broadcast_result_covers_both(a: Vec<u8>, b: Vec<u8>) -> bool {
        let a = small_shape(a);
        let b = small_shape(b);
        match broadcast_shapes(&a, &b) {
            Ok(out) => out.len() == a.len().max(b.len())
                && can_broadcast(&a, &out)
                && can_broadcast(&b, &out),
            Err(_) => true,
        }
    }
}
