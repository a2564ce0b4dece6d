#![cfg(feature = "std")]

use approx::assert_relative_eq;
use numkern::prelude::*;
use std::io::Cursor;
use std::path::PathBuf;

/// Write `contents` to a fresh file in the system temp directory.
fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("numkern-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Column Selection Tests
// ============================================================================

#[test]
fn test_column_spec_validation() {
    assert!(ColumnSpec::new(1, 3).is_ok());
    assert_eq!(ColumnSpec::new(0, 2), Err(KernelError::InvalidColumn(0)));
    assert_eq!(ColumnSpec::new(2, 0), Err(KernelError::InvalidColumn(0)));
    assert_eq!(ColumnSpec::default(), ColumnSpec { x: 1, y: 2 });
    assert_eq!(ColumnSpec { x: 4, y: 2 }.width(), 4);
}

// ============================================================================
// Column Reader Tests
// ============================================================================

#[test]
fn test_reader_selects_columns() {
    let text = "0 1.5 10\n1 2.5 20\n2 3.5 30\n";
    let spec = ColumnSpec::new(3, 2).unwrap();
    let reader = ColumnReader::<_, f64>::new(Cursor::new(text), spec).unwrap();
    let samples: Vec<_> = reader.collect();
    assert_eq!(samples, vec![(10.0, 1.5), (20.0, 2.5), (30.0, 3.5)]);
}

#[test]
fn test_reader_accepts_extra_whitespace_and_columns() {
    let text = "  1\t 2   99 98\n3 4 97\n";
    let reader = ColumnReader::<_, f32>::new(Cursor::new(text), ColumnSpec::default()).unwrap();
    let samples: Vec<_> = reader.collect();
    assert_eq!(samples, vec![(1.0, 2.0), (3.0, 4.0)]);
}

#[test]
fn test_reader_stops_at_short_line() {
    let text = "1 2\n3\n5 6\n";
    let mut reader =
        ColumnReader::<_, f64>::new(Cursor::new(text), ColumnSpec::default()).unwrap();
    assert_eq!(reader.next(), Some((1.0, 2.0)));
    assert_eq!(reader.next(), None);
    assert_eq!(reader.stopped_at(), Some(2));
}

#[test]
fn test_reader_rejects_column_zero() {
    let result = ColumnReader::<_, f64>::new(Cursor::new(""), ColumnSpec { x: 0, y: 1 });
    assert!(matches!(result, Err(KernelError::InvalidColumn(0))));
}

// ============================================================================
// File Metric Tests
// ============================================================================

#[test]
fn test_file_metrics_match_arrays() {
    let subject = "0.5 1.0\n1.5 3.5\n2.5 4.5\n";
    let reference = "# t h\n";
    // A header line ends the reference immediately
    let mse: f64 = file_mean_square_error(
        Cursor::new(subject),
        ColumnSpec::default(),
        Cursor::new(reference),
        ColumnSpec::default(),
    )
    .unwrap();
    assert_eq!(mse, 0.0);

    let reference = "0 0\n1 2\n2 4\n3 6\n";
    let mse: f64 = file_mean_square_error(
        Cursor::new(subject),
        ColumnSpec::default(),
        Cursor::new(reference),
        ColumnSpec::default(),
    )
    .unwrap();
    let expected = farray_mean_square_error(
        &[0.5, 1.5, 2.5],
        &[1.0, 3.5, 4.5],
        &[0.0, 1.0, 2.0, 3.0],
        &[0.0, 2.0, 4.0, 6.0],
    );
    assert_relative_eq!(mse, expected, epsilon = 1e-14);
    assert_relative_eq!(mse, 1.0 / 6.0, epsilon = 1e-14);

    let rmse: f64 = file_root_mean_square_error(
        Cursor::new(subject),
        ColumnSpec::default(),
        Cursor::new(reference),
        ColumnSpec::default(),
    )
    .unwrap();
    assert_relative_eq!(rmse, (1.0_f64 / 6.0).sqrt(), epsilon = 1e-14);
}

#[test]
fn test_file_metric_partial_result_on_malformed_subject() {
    let subject = "0 1\n1 2\nbroken line\n2 100\n";
    let reference = "0 0\n2 2\n";
    let mse: f64 = file_mean_square_error(
        Cursor::new(subject),
        ColumnSpec::default(),
        Cursor::new(reference),
        ColumnSpec::default(),
    )
    .unwrap();
    // Only the first two lines count: (1 - 0)^2 and (2 - 1)^2
    assert_relative_eq!(mse, 1.0);
}

#[test]
fn test_file_metric_partial_result_on_malformed_reference() {
    let subject = "0 1\n1 2\n2 10\n3 10\n4 10\n";
    let reference = "0 0\n1 1\nBAD\n3 3\n4 4\n";
    let mse: f64 = file_mean_square_error(
        Cursor::new(subject),
        ColumnSpec::default(),
        Cursor::new(reference),
        ColumnSpec::default(),
    )
    .unwrap();
    // The reference ends at x = 1, so x = 2 onwards is never compared
    assert_relative_eq!(mse, 1.0);

    let subject = "0 0\n1 1\n2 2\n3 3\n4 4\n";
    let mse: f64 = file_mean_square_error(
        Cursor::new(subject),
        ColumnSpec::default(),
        Cursor::new(reference),
        ColumnSpec::default(),
    )
    .unwrap();
    assert_eq!(mse, 0.0);
}

#[test]
fn test_file_metric_stops_at_reference_end() {
    let subject = "0 0\n1 3\n2 50\n3 50\n";
    let reference = "0 0\n1 1\n";
    let mse: f64 = file_mean_square_error(
        Cursor::new(subject),
        ColumnSpec::default(),
        Cursor::new(reference),
        ColumnSpec::default(),
    )
    .unwrap();
    // (0 - 0)^2 and (3 - 1)^2 over two compared samples
    assert_relative_eq!(mse, 2.0);

    let rmse: f64 = file_root_mean_square_error(
        Cursor::new("0 0\n1 1\n2 2\n3 3\n"),
        ColumnSpec::default(),
        Cursor::new(reference),
        ColumnSpec::default(),
    )
    .unwrap();
    assert_eq!(rmse, 0.0);
}

#[test]
fn test_file_metric_rejects_bad_columns() {
    let result: Result<f64, _> = file_mean_square_error(
        Cursor::new("1 2\n"),
        ColumnSpec { x: 1, y: 0 },
        Cursor::new("1 2\n"),
        ColumnSpec::default(),
    );
    assert_eq!(result, Err(KernelError::InvalidColumn(0)));
}

#[test]
fn test_file_metric_paths() {
    let subject = temp_file("subject.dat", "0 5 1\n1 5 2\n2 5 3\n");
    let reference = temp_file("reference.dat", "0 1\n2 3\n");
    let spec = ColumnSpec::new(1, 3).unwrap();

    let mse: f64 =
        file_mean_square_error_paths(&subject, spec, &reference, ColumnSpec::default()).unwrap();
    assert_relative_eq!(mse, 0.0, epsilon = 1e-14);

    let rmse: f32 =
        file_root_mean_square_error_paths(&subject, spec, &reference, ColumnSpec::default())
            .unwrap();
    assert_relative_eq!(rmse, 0.0, epsilon = 1e-6);

    std::fs::remove_file(subject).unwrap();
    std::fs::remove_file(reference).unwrap();
}

#[test]
fn test_file_metric_missing_file() {
    let missing = std::env::temp_dir().join("numkern-does-not-exist.dat");
    let result: Result<f64, _> = file_mean_square_error_paths(
        &missing,
        ColumnSpec::default(),
        &missing,
        ColumnSpec::default(),
    );
    assert!(matches!(result, Err(KernelError::Io(_))));
}
