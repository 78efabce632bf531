mod common;

use common::make_dataset;
use xrfalign_core::align::{AlignController, NullObserver};
use xrfalign_core::error::XrfError;

#[test]
fn test_exclude_middle_projection() {
    let mut ctrl = AlignController::new(NullObserver);
    // thetas = [0, 30, 60], fnames = [proj_000, proj_001, proj_002]
    ctrl.load(make_dataset(2, 3, 4, 4));

    ctrl.exclude_projection(1).unwrap();

    let ds = ctrl.dataset().unwrap();
    assert_eq!(ds.thetas, vec![0.0, 60.0]);
    assert_eq!(ds.fnames, vec!["proj_000.h5", "proj_002.h5"]);
    assert_eq!(ds.num_projections(), 2);
    assert_eq!(ctrl.cursor().projection, 0);

    // The surviving slices are the original 0 and 2.
    assert_eq!(ds.stack.image(0, 1).unwrap()[[0, 0]], 200.0);
}

#[test]
fn test_exclude_shrinks_every_parallel_sequence() {
    let mut ctrl = AlignController::new(NullObserver);
    ctrl.load(make_dataset(2, 4, 4, 4));

    ctrl.exclude_projection(2).unwrap();

    let ds = ctrl.dataset().unwrap();
    assert_eq!(ds.stack.num_projections(), 3);
    assert_eq!(ds.thetas.len(), 3);
    assert_eq!(ds.fnames.len(), 3);
    assert_eq!(ds.x_shifts.len(), 3);
    assert_eq!(ds.y_shifts.len(), 3);
    assert_eq!(ds.centers.len(), 3);
    assert!(ds.lengths_consistent());
}

#[test]
fn test_exclude_first_clamps_cursor_to_zero() {
    let mut ctrl = AlignController::new(NullObserver);
    ctrl.load(make_dataset(1, 3, 4, 4));

    ctrl.exclude_projection(0).unwrap();

    assert_eq!(ctrl.cursor().projection, 0);
    assert_eq!(ctrl.dataset().unwrap().thetas, vec![30.0, 60.0]);
}

#[test]
fn test_exclude_last_clamps_cursor_into_range() {
    let mut ctrl = AlignController::new(NullObserver);
    ctrl.load(make_dataset(1, 3, 4, 4));
    ctrl.select_projection(2).unwrap();

    ctrl.exclude_projection(2).unwrap();

    // cursor = max(0, min(index - 1, new_len - 1)) = 1
    assert_eq!(ctrl.cursor().projection, 1);
}

#[test]
fn test_exclude_down_to_empty_dataset() {
    let mut ctrl = AlignController::new(NullObserver);
    ctrl.load(make_dataset(1, 1, 4, 4));

    ctrl.exclude_projection(0).unwrap();

    let ds = ctrl.dataset().unwrap();
    assert_eq!(ds.num_projections(), 0);
    assert!(ds.lengths_consistent());
    assert_eq!(ctrl.cursor().projection, 0);
    assert!(ctrl.current_image().is_err());
}

#[test]
fn test_exclude_out_of_range_is_rejected() {
    let mut ctrl = AlignController::new(NullObserver);
    ctrl.load(make_dataset(1, 2, 4, 4));

    let err = ctrl.exclude_projection(2).unwrap_err();
    assert!(matches!(err, XrfError::IndexOutOfRange { index: 2, total: 2 }));

    let ds = ctrl.dataset().unwrap();
    assert_eq!(ds.num_projections(), 2);
    assert!(ds.lengths_consistent());
}

#[test]
fn test_delete_matches_exclude() {
    let mut a = AlignController::new(NullObserver);
    let mut b = AlignController::new(NullObserver);
    a.load(make_dataset(2, 3, 4, 4));
    b.load(make_dataset(2, 3, 4, 4));

    a.exclude_projection(1).unwrap();
    b.delete_projection(1).unwrap();

    let da = a.dataset().unwrap();
    let db = b.dataset().unwrap();
    assert_eq!(da.stack.data, db.stack.data);
    assert_eq!(da.thetas, db.thetas);
    assert_eq!(da.fnames, db.fnames);
    assert_eq!(da.x_shifts, db.x_shifts);
    assert_eq!(a.cursor(), b.cursor());
}

#[test]
fn test_exclude_before_load_is_rejected() {
    let mut ctrl = AlignController::new(NullObserver);
    assert!(matches!(
        ctrl.exclude_projection(0).unwrap_err(),
        XrfError::EmptyDataset
    ));
}
