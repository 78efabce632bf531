pub mod align;
pub mod consts;
pub mod dataset;
pub mod error;
pub mod io;
pub mod process;
pub mod stack;
pub mod stats;
