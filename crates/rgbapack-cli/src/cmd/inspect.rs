use std::path::PathBuf;

use clap::Args;
use rgbapack_core::stats::Histogram;

use crate::io::plane_file;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .rgp path
    #[arg(long)]
    pub r#in: PathBuf,

    /// Histogram bins over [0,1)
    #[arg(long, default_value_t = 16)]
    pub bins: usize,

    /// Also print the per-bin counts
    #[arg(long, default_value_t = false)]
    pub counts: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    if args.bins == 0 {
        anyhow::bail!("--bins must be > 0");
    }

    let plane = plane_file::read_plane(&args.r#in)?;
    let layout = plane.layout();
    let seeds = plane.seeds();
    let (qw, qh) = layout.quadrant();

    println!("--- inspect ---");
    println!("file            = {}", args.r#in.display());
    println!("dims            = {}x{}", layout.width, layout.height);
    println!("quadrant        = {}x{}", qw, qh);
    println!("seeds           = {}", seeds.len());

    let xs: Vec<f64> = seeds.iter().map(|s| s.x).collect();
    let ys: Vec<f64> = seeds.iter().map(|s| s.y).collect();
    report_axis("x", &xs, args.bins, args.counts);
    report_axis("y", &ys, args.bins, args.counts);

    Ok(())
}

fn report_axis(name: &str, values: &[f64], bins: usize, counts: bool) {
    let (min, max, mean) = min_max_mean(values);
    let h = Histogram::from_values(values, bins);

    println!("--- {name} ---");
    println!("min             = {min:.9}");
    println!("max             = {max:.9}");
    println!("mean            = {mean:.9}");
    println!("bins            = {} (width {:.6})", bins, h.bin_width());
    println!("max_bin_dev     = {:.4}", h.max_deviation());

    if counts {
        for (i, c) in h.counts().iter().enumerate() {
            let lo = i as f64 * h.bin_width();
            println!("[{:.4}, {:.4}) {}", lo, lo + h.bin_width(), c);
        }
    }
}

fn min_max_mean(values: &[f64]) -> (f64, f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    (min, max, sum / values.len() as f64)
}
