// crates/rgbapack-cli/src/cmd/mod.rs

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod roundtrip;
pub mod seeds;
