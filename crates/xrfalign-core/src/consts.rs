/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f32 = 1e-10;

/// Binomial 1D kernel for the 3x3 Gaussian blur: [1, 2, 1] / 4.
pub const BLUR3_KERNEL: [f32; 3] = [0.25, 0.5, 0.25];

/// Binomial 1D kernel for the 5x5 Gaussian blur: [1, 4, 6, 4, 1] / 16.
pub const BLUR5_KERNEL: [f32; 5] = [1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0];

/// Default intensity threshold for bounding analysis (fraction of peak value).
pub const DEFAULT_BOUNDING_THRESHOLD: f32 = 0.1;
