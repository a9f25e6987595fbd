use algolab_core::{DistanceMatrix, MatrixError};

use crate::INF;

#[test]
fn test_from_rows_rejects_ragged_input() {
    let error = DistanceMatrix::from_rows(vec![vec![Some(0), None], vec![Some(1)]]).unwrap_err();

    assert_eq!(
        error,
        MatrixError::NotSquare {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_from_rows_rejects_wide_rows() {
    let result = DistanceMatrix::from_rows(vec![vec![Some(0), Some(1), Some(2)]]);
    assert!(matches!(result, Err(MatrixError::NotSquare { row: 0, .. })));
}

#[test]
fn test_sentinel_round_trip_keeps_missing_edges() {
    let rows = vec![vec![0, INF], vec![5, 0]];

    let matrix = DistanceMatrix::from_sentinel_rows(&rows, INF).unwrap();

    assert_eq!(matrix.get(0, 1), None);
    assert_eq!(matrix.get(1, 0), Some(5));
    assert_eq!(matrix.to_sentinel_rows(INF), rows);
    assert_eq!(
        matrix.to_rows(),
        vec![vec![Some(0), None], vec![Some(5), Some(0)]]
    );
}

#[test]
fn test_set_and_rows() {
    let mut matrix = DistanceMatrix::new(2);
    matrix.set(1, 0, Some(3));

    let rows: Vec<Vec<Option<i64>>> = matrix.rows().map(|row| row.to_vec()).collect();

    assert_eq!(rows, vec![vec![Some(0), None], vec![Some(3), Some(0)]]);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_get_out_of_range_panics() {
    let _ = DistanceMatrix::new(2).get(2, 0);
}
