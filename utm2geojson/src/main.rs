//! Point d'entrée CLI pour utm2geojson

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;

/// Convertir des coordonnées UTM d'un tableur en GeoJSON WGS84
#[derive(Parser)]
#[command(name = "utm2geojson")]
#[command(author, version)]
#[command(about = "Convertir des coordonnées UTM (Easting/Northing) d'un tableur en GeoJSON WGS84")]
#[command(long_about = "Lit un classeur (xlsx, xls, ods) ou un CSV, reprojette chaque ligne UTM en longitude/latitude WGS84 et écrit une FeatureCollection GeoJSON.\n\nLes lignes sans coordonnées valides sont ignorées et listées dans le rapport.")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Columns { input, sheet } => {
            debug!(input = %input.display(), sheet = ?sheet, "Listing columns");
            cli::cmd_columns(&input, sheet).await?;
        }
        Commands::Convert(args) => {
            debug!(input = %args.input.display(), output = %args.output.display(), "Converting");
            cli::cmd_convert(args).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
