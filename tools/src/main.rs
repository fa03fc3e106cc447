mod build_dataset;
mod decode;
mod planes;
mod sample_format;

use build_dataset::{build_dataset, BuildDatasetCommand};
use clap::{Parser, Subcommand};
use decode::{decode, DecodeCommand};
use planes::{planes, PlanesCommand};
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extracts the [%eval] annotated positions of a PGN file into a dataset of bitboards
    BuildDataset(BuildDatasetCommand),
    /// Prints the FEN, side and score of every sample in a binary dataset
    Decode(DecodeCommand),
    /// Displays the bitboards and 8x8 planes of a position
    Planes(PlanesCommand),
}

fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    match args.command {
        Commands::BuildDataset(cmd) => build_dataset(cmd),
        Commands::Decode(cmd) => decode(cmd),
        Commands::Planes(cmd) => planes(cmd),
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
