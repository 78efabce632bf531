pub mod alignment;
pub mod npy;

pub use alignment::{load_alignment, save_alignment, AlignmentRecord};
pub use npy::{read_stack, write_stack};
