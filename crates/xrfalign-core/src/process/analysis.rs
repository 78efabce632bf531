use ndarray::ArrayView2;
use serde::Serialize;

use crate::consts::EPSILON;

/// Mean and standard deviation of a pixel region.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct NoiseStats {
    pub mean: f64,
    pub std_dev: f64,
}

/// Half-open pixel bounds of the signal found by [`bounding_analysis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub row0: usize,
    pub row1: usize,
    pub col0: usize,
    pub col1: usize,
}

impl BoundingBox {
    pub fn height(&self) -> usize {
        self.row1 - self.row0
    }

    pub fn width(&self) -> usize {
        self.col1 - self.col0
    }
}

/// Mean and standard deviation over all pixels of `image`.
pub fn noise_analysis(image: &ArrayView2<'_, f32>) -> NoiseStats {
    let n = image.len() as f64;
    if n == 0.0 {
        return NoiseStats {
            mean: 0.0,
            std_dev: 0.0,
        };
    }
    let sum: f64 = image.iter().map(|&v| v as f64).sum();
    let mean = sum / n;
    let var: f64 = image.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
    NoiseStats {
        mean,
        std_dev: var.sqrt(),
    }
}

/// Bounding box of all pixels above `threshold_fraction` of the peak value.
///
/// Returns `None` when the image carries no signal above the threshold
/// (empty or all-zero images included).
pub fn bounding_analysis(
    image: &ArrayView2<'_, f32>,
    threshold_fraction: f32,
) -> Option<BoundingBox> {
    let peak = image.fold(f32::MIN, |m, &v| m.max(v));
    if peak <= EPSILON {
        return None;
    }
    let threshold = peak * threshold_fraction;

    let mut bounds: Option<BoundingBox> = None;
    for ((row, col), &value) in image.indexed_iter() {
        if value < threshold {
            continue;
        }
        match bounds.as_mut() {
            None => {
                bounds = Some(BoundingBox {
                    row0: row,
                    row1: row + 1,
                    col0: col,
                    col1: col + 1,
                });
            }
            Some(b) => {
                b.row0 = b.row0.min(row);
                b.row1 = b.row1.max(row + 1);
                b.col0 = b.col0.min(col);
                b.col1 = b.col1.max(col + 1);
            }
        }
    }
    bounds
}
