use xrfalign_core::error::XrfError;
use xrfalign_core::stack::Region;

#[test]
fn test_centered_region_resolves_exactly() {
    let bounds = Region::new(4.0, 4.0, 4, 4).clamped_bounds(10, 10).unwrap();
    assert_eq!((bounds.row0, bounds.row1), (2, 6));
    assert_eq!((bounds.col0, bounds.col1), (2, 6));
    assert_eq!(bounds.height(), 4);
    assert_eq!(bounds.width(), 4);
}

#[test]
fn test_region_clamps_at_top_left() {
    // Centered at the origin, half the box hangs off the image.
    let bounds = Region::new(0.0, 0.0, 4, 4).clamped_bounds(10, 10).unwrap();
    assert_eq!((bounds.row0, bounds.row1), (0, 2));
    assert_eq!((bounds.col0, bounds.col1), (0, 2));
}

#[test]
fn test_region_clamps_at_bottom_right() {
    let bounds = Region::new(9.0, 9.0, 6, 6).clamped_bounds(10, 10).unwrap();
    assert_eq!((bounds.row0, bounds.row1), (6, 10));
    assert_eq!((bounds.col0, bounds.col1), (6, 10));
}

#[test]
fn test_fractional_center_rounds() {
    let bounds = Region::new(4.6, 3.4, 2, 2).clamped_bounds(10, 10).unwrap();
    assert_eq!((bounds.row0, bounds.row1), (2, 4));
    assert_eq!((bounds.col0, bounds.col1), (4, 6));
}

#[test]
fn test_zero_size_region_is_rejected() {
    let err = Region::new(4.0, 4.0, 0, 4).clamped_bounds(10, 10).unwrap_err();
    assert!(matches!(err, XrfError::InvalidRegion(_)));
}

#[test]
fn test_fully_outside_region_is_rejected() {
    // Entirely below and to the right of the image; no wraparound allowed.
    let err = Region::new(50.0, 50.0, 4, 4)
        .clamped_bounds(10, 10)
        .unwrap_err();
    assert!(matches!(err, XrfError::InvalidRegion(_)));

    // Negative center far off the top-left corner.
    let err = Region::new(-20.0, -20.0, 4, 4)
        .clamped_bounds(10, 10)
        .unwrap_err();
    assert!(matches!(err, XrfError::InvalidRegion(_)));
}
