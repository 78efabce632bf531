use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use ndarray::Array4;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};

use crate::error::Result;
use crate::stack::ProjectionStack;

/// Read a 4D `[element, projection, row, col]` volume from a `.npy` file.
pub fn read_stack(path: &Path) -> Result<ProjectionStack> {
    let file = File::open(path)?;
    let data = Array4::<f32>::read_npy(file)?;
    Ok(ProjectionStack::new(data))
}

/// Write a 4D volume to a `.npy` file.
pub fn write_stack(path: &Path, stack: &ProjectionStack) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);
    stack.data.write_npy(file)?;
    Ok(())
}
