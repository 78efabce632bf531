pub mod events;

use ndarray::{Array2, ArrayView2};
use tracing::{debug, info};

use crate::consts::DEFAULT_BOUNDING_THRESHOLD;
use crate::dataset::Dataset;
use crate::error::{Result, XrfError};
use crate::process;
use crate::process::{BoundingBox, NoiseStats};
use crate::stack::Region;
use crate::stats::{self, IntensitySummary};

pub use events::{AlignmentObserver, NullObserver, ShiftDirection};

/// The current (element, projection) selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub element: usize,
    pub projection: usize,
}

/// Gaussian blur kernel size selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlurKernel {
    Gauss3,
    Gauss5,
}

/// Owner of the dataset bundle and the only mutation path into it.
///
/// Every operation validates its indices first, mutates the bundle as one
/// transaction, and then notifies the observer in the documented order.
/// Everything runs synchronously on the caller's thread; an operation's
/// notification cascade completes before the call returns.
pub struct AlignController<O: AlignmentObserver> {
    dataset: Option<Dataset>,
    cursor: Cursor,
    /// Single-slot background buffer, overwritten on each capture.
    background: Option<Array2<f32>>,
    observer: O,
}

impl<O: AlignmentObserver> AlignController<O> {
    pub fn new(observer: O) -> Self {
        Self {
            dataset: None,
            cursor: Cursor::default(),
            background: None,
            observer,
        }
    }

    /// Replace the loaded dataset wholesale and reset the cursor.
    pub fn load(&mut self, dataset: Dataset) {
        info!(
            elements = dataset.num_elements(),
            projections = dataset.num_projections(),
            "dataset loaded"
        );
        self.cursor = Cursor::default();
        self.background = None;
        let ds = self.dataset.insert(dataset);

        self.observer.on_data_changed(&ds.stack);
        self.observer.on_theta_changed(&ds.thetas);
        self.observer
            .on_slider_range_changed(self.cursor, &ds.stack, &ds.thetas);
        self.observer.on_file_names_changed(&ds.fnames, self.cursor);
        self.observer
            .on_alignment_changed(&ds.x_shifts, &ds.y_shifts, &ds.centers);
        self.observer
            .on_cursor_changed(self.cursor.element, self.cursor.projection);
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn background(&self) -> Option<&Array2<f32>> {
        self.background.as_ref()
    }

    /// View of the image under the cursor.
    pub fn current_image(&self) -> Result<ArrayView2<'_, f32>> {
        let ds = self.loaded()?;
        ds.stack.image(self.cursor.element, self.cursor.projection)
    }

    /// Rotation angle of the projection under the cursor (the LCD readout).
    pub fn current_theta(&self) -> Result<f64> {
        let ds = self.loaded()?;
        ds.thetas
            .get(self.cursor.projection)
            .copied()
            .ok_or(XrfError::IndexOutOfRange {
                index: self.cursor.projection,
                total: ds.thetas.len(),
            })
    }

    /// File name of the projection under the cursor.
    pub fn current_fname(&self) -> Result<&str> {
        let ds = self.loaded()?;
        ds.fnames
            .get(self.cursor.projection)
            .map(String::as_str)
            .ok_or(XrfError::IndexOutOfRange {
                index: self.cursor.projection,
                total: ds.fnames.len(),
            })
    }

    /// Slider moved: select projection `index`.
    pub fn select_projection(&mut self, index: usize) -> Result<()> {
        let ds = self.dataset.as_ref().ok_or(XrfError::EmptyDataset)?;
        check_projection(ds, index)?;
        self.cursor.projection = index;
        self.observer.on_file_names_changed(&ds.fnames, self.cursor);
        self.observer
            .on_cursor_changed(self.cursor.element, self.cursor.projection);
        Ok(())
    }

    /// Element combo changed: select element channel `index`.
    pub fn select_element(&mut self, index: usize) -> Result<()> {
        let ds = self.dataset.as_ref().ok_or(XrfError::EmptyDataset)?;
        if index >= ds.num_elements() {
            return Err(XrfError::ElementOutOfRange {
                index,
                total: ds.num_elements(),
            });
        }
        self.cursor.element = index;
        self.observer
            .on_cursor_changed(self.cursor.element, self.cursor.projection);
        Ok(())
    }

    /// A/D keys: step the projection cursor, clamping at the ends.
    pub fn step_projection(&mut self, delta: isize) -> Result<()> {
        let ds = self.dataset.as_ref().ok_or(XrfError::EmptyDataset)?;
        let n = ds.num_projections();
        if n == 0 {
            return Err(XrfError::IndexOutOfRange { index: 0, total: 0 });
        }
        let target = (self.cursor.projection as isize + delta).clamp(0, n as isize - 1) as usize;
        self.select_projection(target)
    }

    /// Shift one projection by one pixel in `direction` across every
    /// element channel, updating the recorded shift vector.
    pub fn shift_projection(&mut self, direction: ShiftDirection, index: usize) -> Result<()> {
        let ds = self.dataset.as_mut().ok_or(XrfError::EmptyDataset)?;
        check_projection(ds, index)?;

        let (dx_rec, dy_rec) = direction.deltas();
        ds.x_shifts[index] += dx_rec;
        ds.y_shifts[index] += dy_rec;
        process::shift_projection(&mut ds.stack, index, direction.dx(), direction.dy())?;
        debug!(?direction, index, "projection shifted");

        self.observer.on_data_changed(&ds.stack);
        self.observer
            .on_alignment_changed(&ds.x_shifts, &ds.y_shifts, &ds.centers);
        Ok(())
    }

    /// Shift the projection under the cursor.
    pub fn shift_current(&mut self, direction: ShiftDirection) -> Result<()> {
        self.shift_projection(direction, self.cursor.projection)
    }

    /// Shift every projection by one pixel in `direction`.
    ///
    /// Vertical moves are angle-weighted per projection (see
    /// `process::shift_stack_vertical`); the bookkeeping records the
    /// uniform ±1 step.
    pub fn shift_all(&mut self, direction: ShiftDirection) -> Result<()> {
        let ds = self.dataset.as_mut().ok_or(XrfError::EmptyDataset)?;

        let (dx_rec, dy_rec) = direction.deltas();
        for shift in ds.x_shifts.iter_mut() {
            *shift += dx_rec;
        }
        for shift in ds.y_shifts.iter_mut() {
            *shift += dy_rec;
        }
        match direction {
            ShiftDirection::Left | ShiftDirection::Right => {
                process::shift_stack_horizontal(&mut ds.stack, direction.dx())?;
            }
            ShiftDirection::Up | ShiftDirection::Down => {
                process::shift_stack_vertical(&mut ds.stack, &ds.thetas, direction.dy())?;
            }
        }
        debug!(?direction, "all projections shifted");

        self.observer.on_data_changed(&ds.stack);
        self.observer
            .on_alignment_changed(&ds.x_shifts, &ds.y_shifts, &ds.centers);
        Ok(())
    }

    /// Permanently remove projection `index` from the dataset.
    ///
    /// One transaction across all parallel sequences (volume, thetas, file
    /// names, both shift vectors, centers). The cursor lands on
    /// `max(0, min(index - 1, new_len - 1))` and the new slider range is
    /// announced before any cursor-dependent refresh.
    pub fn exclude_projection(&mut self, index: usize) -> Result<()> {
        let ds = self.dataset.as_mut().ok_or(XrfError::EmptyDataset)?;
        ds.remove_projection(index)?;

        let new_len = ds.num_projections();
        self.cursor.projection = if new_len == 0 {
            0
        } else {
            index.saturating_sub(1).min(new_len - 1)
        };
        info!(index, remaining = new_len, "projection excluded");

        self.observer.on_data_changed(&ds.stack);
        self.observer.on_theta_changed(&ds.thetas);
        self.observer
            .on_slider_range_changed(self.cursor, &ds.stack, &ds.thetas);
        self.observer.on_file_names_changed(&ds.fnames, self.cursor);
        self.observer
            .on_alignment_changed(&ds.x_shifts, &ds.y_shifts, &ds.centers);
        self.observer
            .on_cursor_changed(self.cursor.element, self.cursor.projection);
        Ok(())
    }

    /// The Delete-key path. The original tool removed the shift entries and
    /// then ran the exclude path; both halves are one transaction here, so
    /// this is exclusion by another name.
    pub fn delete_projection(&mut self, index: usize) -> Result<()> {
        self.exclude_projection(index)
    }

    /// Destructively crop the whole volume to `region`'s clamped bounds.
    pub fn crop(&mut self, region: &Region) -> Result<()> {
        let ds = self.dataset.as_mut().ok_or(XrfError::EmptyDataset)?;
        let bounds = region.clamped_bounds(ds.stack.rows(), ds.stack.cols())?;
        ds.stack = process::cut(&ds.stack, &bounds);
        info!(
            rows = bounds.height(),
            cols = bounds.width(),
            "volume cropped"
        );

        self.observer.on_data_changed(&ds.stack);
        Ok(())
    }

    /// Normalize every projection of one element channel in place.
    pub fn normalize_element(&mut self, element: usize) -> Result<()> {
        let ds = self.dataset.as_mut().ok_or(XrfError::EmptyDataset)?;
        process::normalize_element(&mut ds.stack, element)?;

        self.observer.on_data_changed(&ds.stack);
        Ok(())
    }

    /// Blur the image under the cursor.
    pub fn gaussian_blur(&mut self, kernel: BlurKernel) -> Result<()> {
        let Cursor {
            element,
            projection,
        } = self.cursor;
        let ds = self.dataset.as_mut().ok_or(XrfError::EmptyDataset)?;
        let blurred = {
            let image = ds.stack.image(element, projection)?;
            match kernel {
                BlurKernel::Gauss3 => process::gaussian_blur3(&image),
                BlurKernel::Gauss5 => process::gaussian_blur5(&image),
            }
        };
        ds.stack.image_mut(element, projection)?.assign(&blurred);

        self.observer.on_data_changed(&ds.stack);
        Ok(())
    }

    /// Capture `region` of the current image into the background slot,
    /// overwriting whatever was captured before.
    pub fn capture_background(&mut self, region: &Region) -> Result<()> {
        let Cursor {
            element,
            projection,
        } = self.cursor;
        let ds = self.dataset.as_ref().ok_or(XrfError::EmptyDataset)?;
        let bounds = region.clamped_bounds(ds.stack.rows(), ds.stack.cols())?;
        let image = ds.stack.image(element, projection)?;
        self.background = Some(process::capture_background(&image, &bounds));
        Ok(())
    }

    /// Paste the captured background into `region` of the given image.
    pub fn paste_background(
        &mut self,
        element: usize,
        projection: usize,
        region: &Region,
    ) -> Result<()> {
        let background = self.background.clone().ok_or(XrfError::NoBackground)?;
        self.patch(element, projection, region, &background.view())
    }

    /// Write `source` into `region` of one projection image (clamped
    /// overlap only).
    pub fn patch(
        &mut self,
        element: usize,
        projection: usize,
        region: &Region,
        source: &ArrayView2<'_, f32>,
    ) -> Result<()> {
        let ds = self.dataset.as_mut().ok_or(XrfError::EmptyDataset)?;
        let bounds = region.clamped_bounds(ds.stack.rows(), ds.stack.cols())?;
        let image = ds.stack.image_mut(element, projection)?;
        process::patch(image, source, &bounds);

        self.observer.on_data_changed(&ds.stack);
        Ok(())
    }

    /// Mean/stddev of `region` in the current image.
    pub fn noise_analysis(&self, region: &Region) -> Result<NoiseStats> {
        let ds = self.loaded()?;
        let patch = ds
            .stack
            .region(self.cursor.element, self.cursor.projection, region)?;
        Ok(process::noise_analysis(&patch.view()))
    }

    /// Bounding box of the signal in the current image.
    pub fn bounding_analysis(&self) -> Result<Option<BoundingBox>> {
        let image = self.current_image()?;
        Ok(process::bounding_analysis(&image, DEFAULT_BOUNDING_THRESHOLD))
    }

    /// Per-element intensity summary of the whole volume.
    pub fn intensity_summary(&self) -> Result<IntensitySummary> {
        let ds = self.loaded()?;
        Ok(stats::intensity_summary(&ds.stack))
    }

    fn loaded(&self) -> Result<&Dataset> {
        self.dataset.as_ref().ok_or(XrfError::EmptyDataset)
    }
}

fn check_projection(dataset: &Dataset, index: usize) -> Result<()> {
    let total = dataset.num_projections();
    if index >= total {
        return Err(XrfError::IndexOutOfRange { index, total });
    }
    Ok(())
}
