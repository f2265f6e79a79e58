// crates/rgbapack-cli/src/io/seed_arg.rs

/// Parse a sampler seed given as decimal or hex ("0x..." prefix).
pub fn parse_seed(s: &str) -> anyhow::Result<u64> {
    let t = s.trim();
    let v = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => t.parse::<u64>(),
    };
    v.map_err(|e| anyhow::anyhow!("invalid seed ({s}): {e}"))
}
