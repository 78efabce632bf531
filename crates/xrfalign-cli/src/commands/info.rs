use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use xrfalign_core::io::{load_alignment, read_stack};

#[derive(Args)]
pub struct InfoArgs {
    /// Input volume (.npy, shape [element, projection, row, col])
    pub file: PathBuf,

    /// Alignment file to summarize alongside the volume
    #[arg(long)]
    pub alignment: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let stack = read_stack(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Elements:    {}", stack.num_elements());
    println!("Projections: {}", stack.num_projections());
    println!("Image size:  {}x{}", stack.cols(), stack.rows());

    let total_mb = (stack.data.len() * std::mem::size_of::<f32>()) as f64 / (1024.0 * 1024.0);
    println!("Data size:   {:.1} MB", total_mb);

    if let Some(ref path) = args.alignment {
        let record = load_alignment(path)?;
        let max_x = record.x_shifts.iter().map(|s| s.abs()).max().unwrap_or(0);
        let max_y = record.y_shifts.iter().map(|s| s.abs()).max().unwrap_or(0);

        println!();
        println!("Alignment:   {}", path.display());
        println!("Records:     {}", record.len());
        println!("Max |x|:     {} px", max_x);
        println!("Max |y|:     {} px", max_y);

        if record.len() != stack.num_projections() {
            println!(
                "Warning: alignment has {} records but the volume has {} projections",
                record.len(),
                stack.num_projections()
            );
        }
    }

    Ok(())
}
