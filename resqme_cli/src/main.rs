use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use resqme_core::{
    exclusion::build_exclusion_polygons,
    hazards::{FileHazardSource, HazardSource},
    polyline::decode_geometry,
};

use crate::navigate::NavigateArgs;

mod navigate;
mod parsers;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a walking route that avoids the given hazards
    #[command(visible_alias = "n")]
    Navigate {
        #[command(flatten)]
        args: NavigateArgs,
    },
    /// Print the exclusion polygons built from a hazard file
    DangerZones {
        #[arg(long)]
        hazards: PathBuf,
    },
    /// Decode an encoded polyline into [longitude, latitude] pairs
    Decode { encoded: String },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Navigate { args } => navigate::run(args).await?,
        Commands::DangerZones { hazards } => {
            let hazards = FileHazardSource::new(hazards).fetch_hazards()?;
            let polygons = build_exclusion_polygons(&hazards);
            println!("{}", serde_json::to_string_pretty(&polygons)?);
        }
        Commands::Decode { encoded } => {
            let points = decode_geometry(&encoded)?;
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_navigate() {
        let cli = Cli::try_parse_from([
            "resqme",
            "navigate",
            "--start",
            "-120.2,38.5",
            "--target",
            "17.62067,50.69274",
            "--timeout",
            "5s",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Navigate { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_point() {
        assert!(
            Cli::try_parse_from(["resqme", "navigate", "--start", "1", "--target", "1,2"]).is_err()
        );
    }
}
