use ndarray::{s, Array2, ArrayView2, ArrayViewMut2};

use crate::stack::{ProjectionStack, RegionBounds};

/// Destructively crop the whole 4D stack to `bounds`, for every element and
/// every projection. Returns the new, smaller stack.
pub fn cut(stack: &ProjectionStack, bounds: &RegionBounds) -> ProjectionStack {
    let cropped = stack
        .data
        .slice(s![.., .., bounds.row0..bounds.row1, bounds.col0..bounds.col1])
        .to_owned();
    ProjectionStack::new(cropped)
}

/// Write `source` into `image` at the region's top-left corner.
///
/// Only the overlap between the region, the source, and the image is
/// written, so an edge-clamped region pastes a partial patch.
pub fn patch(mut image: ArrayViewMut2<'_, f32>, source: &ArrayView2<'_, f32>, bounds: &RegionBounds) {
    let h = bounds.height().min(source.nrows());
    let w = bounds.width().min(source.ncols());
    image
        .slice_mut(s![bounds.row0..bounds.row0 + h, bounds.col0..bounds.col0 + w])
        .assign(&source.slice(s![..h, ..w]));
}

/// Clone the region out of `image` into an owned background buffer.
pub fn capture_background(image: &ArrayView2<'_, f32>, bounds: &RegionBounds) -> Array2<f32> {
    image
        .slice(s![bounds.row0..bounds.row1, bounds.col0..bounds.col1])
        .to_owned()
}
