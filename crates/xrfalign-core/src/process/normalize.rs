use crate::consts::EPSILON;
use crate::error::Result;
use crate::stack::ProjectionStack;

/// Rescale every projection of one element channel to `[0, 1]` by its own
/// peak value. All-zero projections are left untouched.
pub fn normalize_element(stack: &mut ProjectionStack, element: usize) -> Result<()> {
    for projection in 0..stack.num_projections() {
        let mut image = stack.image_mut(element, projection)?;
        let peak = image.fold(f32::MIN, |m, &v| m.max(v));
        if peak > EPSILON {
            image.mapv_inplace(|v| v / peak);
        }
    }
    Ok(())
}
