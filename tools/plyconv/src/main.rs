mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{convert::ConvertArgs, inspect::InspectArgs};

#[derive(Parser)]
#[command(
    name = "plyconv",
    about = "Conform binary PLY point clouds to the schema of a reference file"
)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a PLY file with the vertex schema of a reference file
    Convert(ConvertArgs),
    /// Print format, vertex count and properties of PLY files
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match cli.command {
        Commands::Convert(args) => args.run(),
        Commands::Inspect(args) => args.run(),
    }
}
