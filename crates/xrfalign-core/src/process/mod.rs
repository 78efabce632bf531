pub mod analysis;
pub mod blur;
pub mod normalize;
pub mod region;
pub mod shift;

pub use analysis::{bounding_analysis, noise_analysis, BoundingBox, NoiseStats};
pub use blur::{gaussian_blur3, gaussian_blur5};
pub use normalize::normalize_element;
pub use region::{capture_background, cut, patch};
pub use shift::{
    roll_cols, roll_rows, shift_projection, shift_stack_horizontal, shift_stack_vertical,
};
