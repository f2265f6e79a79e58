use clap::Args;
use rgbapack_core::codec::quantum;
use rgbapack_core::sample::SplitMix64;
use rgbapack_core::stats::RoundTripStats;
use rgbapack_core::{CodecParams, DEFAULT_EPSILON};

use crate::io::seed_arg;

#[derive(Args, Debug)]
pub struct RoundtripArgs {
    /// Number of uniform scalars to sample
    #[arg(long, default_value_t = 10_000)]
    pub samples: usize,

    /// Sampler seed, decimal or 0x-prefixed hex
    #[arg(long, default_value = "0")]
    pub seed: String,

    /// Clamping margin below 1.0
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Fail if the mean absolute error reaches this value
    #[arg(long, default_value_t = 1e-7)]
    pub max_mean_error: f64,
}

pub fn run(args: RoundtripArgs) -> anyhow::Result<()> {
    let params = CodecParams::new(args.epsilon)?;
    let seed = seed_arg::parse_seed(&args.seed)?;

    let values: Vec<f64> = SplitMix64::new(seed).take(args.samples).collect();
    let s = RoundTripStats::measure_with(&values, &params);

    println!("--- roundtrip ---");
    println!("samples         = {}", s.count);
    println!("epsilon         = {:e}", params.epsilon());
    println!("quantum         = {:e}", quantum());
    println!("mean_abs_error  = {:e}", s.mean_abs_error);
    println!("max_abs_error   = {:e}", s.max_abs_error);
    println!("decoded_range   = [{:.9}, {:.9}]", s.min_decoded, s.max_decoded);

    if s.count > 0 && s.mean_abs_error >= args.max_mean_error {
        anyhow::bail!(
            "mean abs error {:e} >= limit {:e}",
            s.mean_abs_error,
            args.max_mean_error
        );
    }
    tracing::info!(samples = s.count, seed, "roundtrip ok");
    Ok(())
}
