use clap::Args;
use rgbapack_core::decode_channels;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Channel quadruple as r,g,b,a (each 0..=255). Repeatable.
    #[arg(long = "rgba", required = true, allow_hyphen_values = true)]
    pub quads: Vec<String>,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    for q in &args.quads {
        let [r, g, b, a] = parse_quad(q)?;
        let v = decode_channels(r, g, b, a)?;
        println!("{v}");
    }
    Ok(())
}

fn parse_quad(s: &str) -> anyhow::Result<[i64; 4]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        anyhow::bail!("expected r,g,b,a but got {} field(s): {s}", parts.len());
    }
    let mut out = [0i64; 4];
    for (slot, p) in out.iter_mut().zip(&parts) {
        *slot = p
            .parse::<i64>()
            .map_err(|e| anyhow::anyhow!("invalid channel value ({p}) in {s}: {e}"))?;
    }
    Ok(out)
}
