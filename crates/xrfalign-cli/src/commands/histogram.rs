use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::Style;
use xrfalign_core::io::read_stack;
use xrfalign_core::stats::intensity_summary;

#[derive(Args)]
pub struct HistogramArgs {
    /// Input volume (.npy, shape [element, projection, row, col])
    pub file: PathBuf,

    /// Print per-projection totals, not just per-element means
    #[arg(long)]
    pub full: bool,
}

pub fn run(args: &HistogramArgs) -> Result<()> {
    let stack = read_stack(&args.file)?;
    let summary = intensity_summary(&stack);

    let header = Style::new().cyan().bold();
    let label = Style::new().dim();

    println!("{}", header.apply_to("Per-element mean intensity"));
    println!("{:>8}  {:>14}", "Element", "Mean");
    println!("{}", "-".repeat(24));
    for (element, mean) in summary.means.iter().enumerate() {
        println!("{:>8}  {:>14.1}", element, mean);
    }

    if summary.means.len() > 1 {
        println!();
        println!("{}", header.apply_to("Element-to-element mean ratios"));
        for a in 0..summary.means.len() {
            for b in (a + 1)..summary.means.len() {
                match summary.ratio(a, b) {
                    Some(r) => println!("  {:>2} / {:<2} = {:.3}", a, b, r),
                    None => println!("  {:>2} / {:<2} = n/a", a, b),
                }
            }
        }
    }

    if args.full {
        println!();
        println!("{}", header.apply_to("Per-projection totals"));
        for element in 0..stack.num_elements() {
            println!("{}", label.apply_to(format!("element {}", element)));
            for projection in 0..stack.num_projections() {
                println!(
                    "  {:>5}  {:>14.1}",
                    projection,
                    summary.totals[[element, projection]]
                );
            }
        }
    }

    Ok(())
}
