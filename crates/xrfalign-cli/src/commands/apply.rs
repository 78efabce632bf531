use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use xrfalign_core::io::{load_alignment, read_stack, write_stack};
use xrfalign_core::process::shift_projection;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input volume (.npy, shape [element, projection, row, col])
    pub file: PathBuf,

    /// Alignment file produced by the interactive tool
    #[arg(long)]
    pub alignment: PathBuf,

    /// Output volume path
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let mut stack = read_stack(&args.file)?;
    let record = load_alignment(&args.alignment)?;

    if record.len() != stack.num_projections() {
        bail!(
            "alignment has {} records but the volume has {} projections",
            record.len(),
            stack.num_projections()
        );
    }

    let pb = ProgressBar::new(stack.num_projections() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Applying shifts");

    for index in 0..stack.num_projections() {
        let dx = record.x_shifts[index] as isize;
        // Positive recorded y means content moved up, i.e. a negative row roll.
        let dy = -(record.y_shifts[index] as isize);
        shift_projection(&mut stack, index, dx, dy)?;
        pb.set_position(index as u64 + 1);
    }
    pb.finish_with_message("Shifts applied");

    write_stack(&args.output, &stack)?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
