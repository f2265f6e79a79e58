use clap::{Args, ValueEnum};
use rgbapack_core::{encode_with, CodecParams, DEFAULT_EPSILON};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Fmt {
    /// `r g b a` per line
    Text,
    /// {"v":V,"rgba":[r,g,b,a]} per line (V is null for NaN/inf input)
    Jsonl,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Scalar(s) to encode. Out-of-range input saturates into [0, 1 - epsilon].
    #[arg(long = "value", required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Clamping margin below 1.0
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    #[arg(long, value_enum, default_value_t = Fmt::Text)]
    pub fmt: Fmt,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let params = CodecParams::new(args.epsilon)?;

    for &v in &args.values {
        let px = encode_with(v, &params);
        if !(0.0..params.upper_bound()).contains(&v) {
            tracing::debug!(value = v, "input saturated");
        }
        match args.fmt {
            Fmt::Text => println!("{px}"),
            Fmt::Jsonl => println!(
                "{{\"v\":{},\"rgba\":[{},{},{},{}]}}",
                json_number(v),
                px.r,
                px.g,
                px.b,
                px.a
            ),
        }
    }
    Ok(())
}

/// JSON has no NaN or infinities.
fn json_number(v: f64) -> String {
    if v.is_finite() {
        v.to_string()
    } else {
        "null".to_string()
    }
}
