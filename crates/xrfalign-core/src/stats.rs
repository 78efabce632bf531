use ndarray::{s, Array2};

use crate::consts::EPSILON;
use crate::stack::ProjectionStack;

/// Total intensity per (element, projection) plus per-element means.
///
/// This is the data behind the summary histogram view; rendering is the
/// caller's concern.
#[derive(Clone, Debug)]
pub struct IntensitySummary {
    /// `totals[[element, projection]]` = sum of all pixels of that image.
    pub totals: Array2<f64>,
    /// Mean of `totals` over the projection axis, one entry per element.
    pub means: Vec<f64>,
}

impl IntensitySummary {
    /// Ratio of element `a`'s mean intensity to element `b`'s.
    ///
    /// `None` when either index is out of range or `b`'s mean is ~zero.
    pub fn ratio(&self, a: usize, b: usize) -> Option<f64> {
        let ma = *self.means.get(a)?;
        let mb = *self.means.get(b)?;
        if mb.abs() < EPSILON as f64 {
            return None;
        }
        Some(ma / mb)
    }
}

/// Summarize per-projection intensity for every element channel.
pub fn intensity_summary(stack: &ProjectionStack) -> IntensitySummary {
    let elements = stack.num_elements();
    let projections = stack.num_projections();
    let mut totals = Array2::<f64>::zeros((elements, projections));

    for element in 0..elements {
        for projection in 0..projections {
            let image = stack.data.slice(s![element, projection, .., ..]);
            totals[[element, projection]] = image.iter().map(|&v| v as f64).sum();
        }
    }

    let means = (0..elements)
        .map(|element| {
            if projections == 0 {
                0.0
            } else {
                totals.row(element).sum() / projections as f64
            }
        })
        .collect();

    IntensitySummary { totals, means }
}
