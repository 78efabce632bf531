use ndarray::{s, Array2, Array4, ArrayView2, ArrayViewMut2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Result, XrfError};

/// The 4D projection volume of one dataset.
///
/// Indexed `[element, projection, row, col]`; pixel values are f32 counts.
#[derive(Clone, Debug)]
pub struct ProjectionStack {
    pub data: Array4<f32>,
}

impl ProjectionStack {
    pub fn new(data: Array4<f32>) -> Self {
        Self { data }
    }

    pub fn num_elements(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn num_projections(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn rows(&self) -> usize {
        self.data.shape()[2]
    }

    pub fn cols(&self) -> usize {
        self.data.shape()[3]
    }

    /// View of one projection image for one element channel.
    pub fn image(&self, element: usize, projection: usize) -> Result<ArrayView2<'_, f32>> {
        self.check_indices(element, projection)?;
        Ok(self.data.slice(s![element, projection, .., ..]))
    }

    /// Mutable view of one projection image for one element channel.
    pub fn image_mut(
        &mut self,
        element: usize,
        projection: usize,
    ) -> Result<ArrayViewMut2<'_, f32>> {
        self.check_indices(element, projection)?;
        Ok(self.data.slice_mut(s![element, projection, .., ..]))
    }

    /// Owned copy of a clamped sub-rectangle of one projection image.
    pub fn region(
        &self,
        element: usize,
        projection: usize,
        region: &Region,
    ) -> Result<Array2<f32>> {
        let bounds = region.clamped_bounds(self.rows(), self.cols())?;
        let image = self.image(element, projection)?;
        Ok(image
            .slice(s![bounds.row0..bounds.row1, bounds.col0..bounds.col1])
            .to_owned())
    }

    /// Remove one projection slice from the volume, shrinking the
    /// projection axis by one.
    pub fn remove_projection(&mut self, index: usize) -> Result<()> {
        if index >= self.num_projections() {
            return Err(XrfError::IndexOutOfRange {
                index,
                total: self.num_projections(),
            });
        }
        self.data.remove_index(Axis(1), index);
        Ok(())
    }

    fn check_indices(&self, element: usize, projection: usize) -> Result<()> {
        if element >= self.num_elements() {
            return Err(XrfError::ElementOutOfRange {
                index: element,
                total: self.num_elements(),
            });
        }
        if projection >= self.num_projections() {
            return Err(XrfError::IndexOutOfRange {
                index: projection,
                total: self.num_projections(),
            });
        }
        Ok(())
    }
}

/// A box selection: center position plus size, in image coordinates.
///
/// Positions are f32 because they come from pointer coordinates; bounds are
/// always resolved through [`Region::clamped_bounds`] before touching pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Center column.
    pub x: f32,
    /// Center row.
    pub y: f32,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(x: f32, y: f32, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Resolve to integer bounds clamped into `[0, rows) x [0, cols)`.
    ///
    /// A region that is zero-sized, or that falls entirely outside the
    /// image, is rejected rather than wrapped around.
    pub fn clamped_bounds(&self, rows: usize, cols: usize) -> Result<RegionBounds> {
        if self.width == 0 || self.height == 0 {
            return Err(XrfError::InvalidRegion(format!(
                "region size {}x{} must be nonzero",
                self.width, self.height
            )));
        }

        let cy = self.y.round() as i64;
        let cx = self.x.round() as i64;
        let r0 = cy - self.height as i64 / 2;
        let c0 = cx - self.width as i64 / 2;

        let row0 = r0.clamp(0, rows as i64) as usize;
        let row1 = (r0 + self.height as i64).clamp(0, rows as i64) as usize;
        let col0 = c0.clamp(0, cols as i64) as usize;
        let col1 = (c0 + self.width as i64).clamp(0, cols as i64) as usize;

        if row0 == row1 || col0 == col1 {
            return Err(XrfError::InvalidRegion(format!(
                "region centered at ({}, {}) lies outside the {}x{} image",
                self.x, self.y, rows, cols
            )));
        }

        Ok(RegionBounds {
            row0,
            row1,
            col0,
            col1,
        })
    }
}

/// Clamped half-open pixel bounds of a [`Region`] within an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionBounds {
    pub row0: usize,
    pub row1: usize,
    pub col0: usize,
    pub col1: usize,
}

impl RegionBounds {
    pub fn height(&self) -> usize {
        self.row1 - self.row0
    }

    pub fn width(&self) -> usize {
        self.col1 - self.col0
    }
}
