use std::path::PathBuf;

use clap::Args;
use rgbapack_core::sample::SplitMix64;
use rgbapack_core::{SeedLayout, SeedPlane};

use crate::io::{plane_file, seed_arg};

#[derive(Args, Debug)]
pub struct SeedsArgs {
    /// Output .rgp path
    #[arg(long)]
    pub out: PathBuf,

    /// Plane width in pixels (even). X seeds fill the left half of the top rows.
    #[arg(long, default_value_t = 256)]
    pub width: u32,

    /// Plane height in pixels (even). Only the top half carries seeds.
    #[arg(long, default_value_t = 256)]
    pub height: u32,

    /// Sampler seed, decimal or 0x-prefixed hex
    #[arg(long, default_value = "0xD1CEBA5EF00DCAFE")]
    pub seed: String,
}

pub fn run(args: SeedsArgs) -> anyhow::Result<()> {
    let seed = seed_arg::parse_seed(&args.seed)?;
    let layout = SeedLayout {
        width: args.width,
        height: args.height,
    };

    let mut plane = SeedPlane::new(layout)?;
    plane.fill_with(&mut SplitMix64::new(seed));
    plane_file::write_plane(&args.out, &plane)?;

    tracing::info!(
        out = %args.out.display(),
        width = layout.width,
        height = layout.height,
        seeds = layout.capacity(),
        seed = %format!("0x{seed:016x}"),
        "seeds ok"
    );
    Ok(())
}
