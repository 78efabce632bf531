use approx::assert_relative_eq;
use ndarray::Array4;

use xrfalign_core::stack::ProjectionStack;
use xrfalign_core::stats::intensity_summary;

#[test]
fn test_totals_and_means() {
    let mut data = Array4::<f32>::zeros((2, 3, 2, 2));
    // Element 0: totals 4, 8, 12. Element 1: totals 40, 80, 120.
    for p in 0..3 {
        data.slice_mut(ndarray::s![0, p, .., ..])
            .fill((p + 1) as f32);
        data.slice_mut(ndarray::s![1, p, .., ..])
            .fill((p + 1) as f32 * 10.0);
    }
    let stack = ProjectionStack::new(data);

    let summary = intensity_summary(&stack);

    assert_eq!(summary.totals.dim(), (2, 3));
    assert_relative_eq!(summary.totals[[0, 0]], 4.0, epsilon = 1e-9);
    assert_relative_eq!(summary.totals[[0, 2]], 12.0, epsilon = 1e-9);
    assert_relative_eq!(summary.totals[[1, 1]], 80.0, epsilon = 1e-9);

    assert_relative_eq!(summary.means[0], 8.0, epsilon = 1e-9);
    assert_relative_eq!(summary.means[1], 80.0, epsilon = 1e-9);
}

#[test]
fn test_element_ratios() {
    let mut data = Array4::<f32>::zeros((2, 2, 2, 2));
    data.slice_mut(ndarray::s![0, .., .., ..]).fill(1.0);
    data.slice_mut(ndarray::s![1, .., .., ..]).fill(4.0);
    let stack = ProjectionStack::new(data);

    let summary = intensity_summary(&stack);

    assert_relative_eq!(summary.ratio(1, 0).unwrap(), 4.0, epsilon = 1e-9);
    assert_relative_eq!(summary.ratio(0, 1).unwrap(), 0.25, epsilon = 1e-9);
    assert!(summary.ratio(0, 7).is_none());
}

#[test]
fn test_ratio_against_zero_mean_is_none() {
    let mut data = Array4::<f32>::zeros((2, 1, 2, 2));
    data.slice_mut(ndarray::s![0, .., .., ..]).fill(1.0);
    let stack = ProjectionStack::new(data);

    let summary = intensity_summary(&stack);
    assert!(summary.ratio(0, 1).is_none());
}

#[test]
fn test_summary_of_empty_projection_axis() {
    let data = Array4::<f32>::zeros((2, 0, 4, 4));
    let summary = intensity_summary(&ProjectionStack::new(data));
    assert_eq!(summary.totals.dim(), (2, 0));
    assert_eq!(summary.means, vec![0.0, 0.0]);
}
