// crates/rgbapack-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "rgbapack-cli")]
#[command(about = "Pack normalized scalars into RGBA pixels and back", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode scalars into r g b a quadruples
    Encode(cmd::encode::EncodeArgs),

    /// Decode r,g,b,a quadruples back into scalars
    Decode(cmd::decode::DecodeArgs),

    /// Write a walker seed plane (.rgp)
    Seeds(cmd::seeds::SeedsArgs),

    /// Inspect a .rgp seed plane (dims, crc, decoded seed distribution)
    Inspect(cmd::inspect::InspectArgs),

    /// Measure round-trip error over sampled scalars
    Roundtrip(cmd::roundtrip::RoundtripArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Seeds(args) => cmd::seeds::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Roundtrip(args) => cmd::roundtrip::run(args),
    }
}
