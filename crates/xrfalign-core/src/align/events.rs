use serde::{Deserialize, Serialize};

use crate::align::Cursor;
use crate::stack::ProjectionStack;

/// One pixel step of manual alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ShiftDirection {
    /// Column roll for this direction (positive = content right).
    pub(crate) fn dx(self) -> isize {
        match self {
            ShiftDirection::Left => -1,
            ShiftDirection::Right => 1,
            _ => 0,
        }
    }

    /// Row roll for this direction (positive = content down).
    pub(crate) fn dy(self) -> isize {
        match self {
            ShiftDirection::Up => -1,
            ShiftDirection::Down => 1,
            _ => 0,
        }
    }

    /// Bookkeeping delta for the shift vectors. Note the y convention:
    /// "up" increments the recorded y shift while moving content up.
    pub(crate) fn deltas(self) -> (i32, i32) {
        match self {
            ShiftDirection::Left => (-1, 0),
            ShiftDirection::Right => (1, 0),
            ShiftDirection::Up => (0, 1),
            ShiftDirection::Down => (0, -1),
        }
    }
}

/// Change notifications the alignment controller sends to its single
/// subscriber after each state transition.
///
/// All methods default to no-ops so a view only implements the channels it
/// renders. Emission order within one operation is fixed: data, theta,
/// slider range, file names, alignment, cursor. Slider range always
/// precedes any cursor-dependent display read.
pub trait AlignmentObserver {
    /// Stack content changed (shift, crop, blur, normalize, paste, exclude).
    fn on_data_changed(&mut self, _stack: &ProjectionStack) {}

    /// Projection count changed, so the theta sequence did too.
    fn on_theta_changed(&mut self, _thetas: &[f64]) {}

    /// Valid cursor range changed; emitted before any display refresh.
    fn on_slider_range_changed(
        &mut self,
        _cursor: Cursor,
        _stack: &ProjectionStack,
        _thetas: &[f64],
    ) {
    }

    /// File list or the selected file changed.
    fn on_file_names_changed(&mut self, _fnames: &[String], _cursor: Cursor) {}

    /// Shift vectors or centers changed.
    fn on_alignment_changed(&mut self, _x_shifts: &[i32], _y_shifts: &[i32], _centers: &[f64]) {}

    /// Cursor moved to a new (element, projection).
    fn on_cursor_changed(&mut self, _element: usize, _projection: usize) {}
}

/// Subscriber that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl AlignmentObserver for NullObserver {}
