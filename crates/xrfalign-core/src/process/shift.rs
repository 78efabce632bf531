use ndarray::{Array2, ArrayViewMut2};

use crate::error::Result;
use crate::stack::ProjectionStack;

/// Circularly shift rows by `shift` (positive moves content down).
///
/// The roll wraps around, so a shift followed by its opposite restores the
/// image bit-exactly.
pub fn roll_rows(mut image: ArrayViewMut2<'_, f32>, shift: isize) {
    let h = image.nrows() as isize;
    if h == 0 {
        return;
    }
    let s = shift.rem_euclid(h) as usize;
    if s == 0 {
        return;
    }
    let copy: Array2<f32> = image.to_owned();
    let h = h as usize;
    for row in 0..h {
        let src = (row + h - s) % h;
        image.row_mut(row).assign(&copy.row(src));
    }
}

/// Circularly shift columns by `shift` (positive moves content right).
pub fn roll_cols(mut image: ArrayViewMut2<'_, f32>, shift: isize) {
    let w = image.ncols() as isize;
    if w == 0 {
        return;
    }
    let s = shift.rem_euclid(w) as usize;
    if s == 0 {
        return;
    }
    let copy: Array2<f32> = image.to_owned();
    let w = w as usize;
    for col in 0..w {
        let src = (col + w - s) % w;
        image.column_mut(col).assign(&copy.column(src));
    }
}

/// Roll one projection by `(dx, dy)` pixels across every element channel.
///
/// `dx` positive moves content right, `dy` positive moves content down.
pub fn shift_projection(
    stack: &mut ProjectionStack,
    index: usize,
    dx: isize,
    dy: isize,
) -> Result<()> {
    for element in 0..stack.num_elements() {
        let mut image = stack.image_mut(element, index)?;
        if dx != 0 {
            roll_cols(image.view_mut(), dx);
        }
        if dy != 0 {
            roll_rows(image.view_mut(), dy);
        }
    }
    Ok(())
}

/// Roll every projection horizontally by `step` columns.
pub fn shift_stack_horizontal(stack: &mut ProjectionStack, step: isize) -> Result<()> {
    for index in 0..stack.num_projections() {
        shift_projection(stack, index, step, 0)?;
    }
    Ok(())
}

/// Roll every projection vertically, weighting the row count by the
/// projection's rotation angle.
///
/// A uniform vertical correction of the sample maps to fewer image rows as
/// the sample plane tilts away, so projection `i` moves by
/// `round(step * cos(thetas[i]))` rows (`step` positive = down). At
/// `theta = 0` this is exactly `step`.
pub fn shift_stack_vertical(
    stack: &mut ProjectionStack,
    thetas: &[f64],
    step: isize,
) -> Result<()> {
    for (index, theta) in thetas.iter().enumerate().take(stack.num_projections()) {
        let dy = (step as f64 * theta.to_radians().cos()).round() as isize;
        shift_projection(stack, index, 0, dy)?;
    }
    Ok(())
}
