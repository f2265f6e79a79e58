use crate::codec::params::CodecParams;
use crate::error::{PackError, Result};
use crate::seeds::SeedLayout;

pub fn validate_params(p: &CodecParams) -> Result<()> {
    let epsilon = p.epsilon();
    if !epsilon.is_finite() {
        return Err(PackError::Validation("epsilon must be finite".into()));
    }
    // ε must be > 0 or 1.0 itself would be encodable and overflow the r digit.
    if epsilon <= 0.0 {
        return Err(PackError::Validation("epsilon must be > 0".into()));
    }
    // Anything wider than one r step would make (255, ..) unreachable.
    if epsilon >= 1.0 / 256.0 {
        return Err(PackError::Validation(format!(
            "epsilon must be < 1/256, got {epsilon}"
        )));
    }
    Ok(())
}

pub fn validate_layout(l: &SeedLayout) -> Result<()> {
    if l.width == 0 || l.height == 0 {
        return Err(PackError::Validation(format!(
            "seed layout must be non-empty, got {}x{}",
            l.width, l.height
        )));
    }
    // X and Y quadrants sit side by side in the top half.
    if l.width % 2 != 0 || l.height % 2 != 0 {
        return Err(PackError::Validation(format!(
            "seed layout dimensions must be even, got {}x{}",
            l.width, l.height
        )));
    }
    let bytes = (l.width as u128) * (l.height as u128) * 4;
    if bytes > usize::MAX as u128 {
        return Err(PackError::Validation("seed layout too large".into()));
    }
    Ok(())
}
