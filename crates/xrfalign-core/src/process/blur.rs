use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayView2, Axis};

use crate::consts::{BLUR3_KERNEL, BLUR5_KERNEL, PARALLEL_PIXEL_THRESHOLD};

/// 3x3 Gaussian (binomial) blur via separable 1D convolution.
pub fn gaussian_blur3(image: &ArrayView2<'_, f32>) -> Array2<f32> {
    convolve_separable(image, &BLUR3_KERNEL)
}

/// 5x5 Gaussian (binomial) blur via separable 1D convolution.
pub fn gaussian_blur5(image: &ArrayView2<'_, f32>) -> Array2<f32> {
    convolve_separable(image, &BLUR5_KERNEL)
}

fn convolve_separable(image: &ArrayView2<'_, f32>, kernel: &[f32]) -> Array2<f32> {
    let row_pass = convolve_rows(&image.view(), kernel);
    // Column pass = row pass on the transpose.
    let col_pass = convolve_rows(&row_pass.t(), kernel);
    col_pass.t().to_owned()
}

/// Convolve each row with `kernel`, clamping at the edges.
fn convolve_rows(data: &ArrayView2<'_, f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f32>::zeros((h, w));

    let fill_row = |row: usize, out: &mut [f32]| {
        for (col, value) in out.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_col =
                    (col as isize + ki as isize - radius as isize).clamp(0, w as isize - 1);
                sum += data[[row, src_col as usize]] * kv;
            }
            *value = sum;
        }
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut out)| {
                fill_row(row, out.as_slice_mut().expect("row is contiguous"));
            });
    } else {
        for (row, mut out) in result.axis_iter_mut(Axis(0)).enumerate() {
            fill_row(row, out.as_slice_mut().expect("row is contiguous"));
        }
    }

    result
}
