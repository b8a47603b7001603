//! Définition et implémentation des commandes CLI
//!
//! - `columns`: liste les colonnes d'un tableur
//! - `convert`: tableur UTM → GeoJSON WGS84

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use sheet_table::{Format, ReadOptions, Table};
use tracing::{debug, info, warn};

use utm2geojson::export::geojson::{self as geojson_export, DEFAULT_OUTPUT, PREVIEW_LEN};
use utm2geojson::{Config, ConversionEngine, ConversionRequest, EngineOptions, Hemisphere, SmartProjector};

#[derive(Subcommand)]
pub enum Commands {
    /// List the columns of a spreadsheet
    Columns {
        /// Path to the spreadsheet (xlsx, xls, ods, csv, tsv)
        #[arg(short, long)]
        input: PathBuf,

        /// Sheet name (défaut : première feuille)
        #[arg(long)]
        sheet: Option<String>,
    },

    /// Convert UTM rows to a GeoJSON FeatureCollection
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the spreadsheet (xlsx, xls, ods, csv, tsv)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Sheet name (défaut : première feuille)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Easting column (défaut : première colonne)
    #[arg(short, long)]
    pub easting: Option<String>,

    /// Northing column (défaut : deuxième colonne)
    #[arg(short, long)]
    pub northing: Option<String>,

    /// UTM zone, 1-60 (défaut : env UTM2GEOJSON_ZONE / 10)
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Southern hemisphere
    #[arg(long, conflicts_with = "north")]
    pub south: bool,

    /// Northern hemisphere (défaut)
    #[arg(long)]
    pub north: bool,

    /// JSON profile with zone, hemisphere, easting_column, northing_column
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output GeoJSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write the GeoJSON on a single line (défaut : indenté sur 2 espaces)
    #[arg(long)]
    pub compact: bool,

    /// Print the first characters of the result
    #[arg(long)]
    pub preview: bool,

    /// Write the conversion report as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Convert rows in parallel
    #[arg(long)]
    pub parallel: bool,

    /// CSV delimiter (défaut : détection automatique). "tab" ou "\t" pour une tabulation
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
}

impl ConvertArgs {
    /// Options passées en ligne de commande, prioritaires sur le profil et l'environnement
    fn overrides(&self) -> Config {
        let hemisphere = if self.south {
            Some(Hemisphere::South)
        } else if self.north {
            Some(Hemisphere::North)
        } else {
            None
        };

        Config {
            zone: self.zone.clone(),
            hemisphere,
            easting_column: self.easting.clone(),
            northing_column: self.northing.clone(),
        }
    }

    fn read_options(&self) -> ReadOptions {
        ReadOptions {
            sheet: self.sheet.clone(),
            delimiter: self.delimiter,
        }
    }
}

/// Exécute la commande columns
pub async fn cmd_columns(input: &Path, sheet: Option<String>) -> Result<()> {
    let options = ReadOptions {
        sheet,
        delimiter: None,
    };
    let (table, _) = load_table(input, options).await?;

    println!("Columns ({}):", table.headers.len());
    for (i, header) in table.headers.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, header);
    }
    println!("Data rows: {}", table.row_count());

    let defaults = Config::default().resolve(&table.headers);
    println!(
        "Defaults: easting = {}, northing = {}",
        defaults.easting_column, defaults.northing_column
    );

    Ok(())
}

/// Exécute la commande convert
pub async fn cmd_convert(args: ConvertArgs) -> Result<()> {
    let profile = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let env = Config::from_env()?;

    let (table, checksum) = load_table(&args.input, args.read_options()).await?;

    let settings = args.overrides().or(profile).or(env).resolve(&table.headers);
    let request = ConversionRequest::validate(
        settings.zone.as_str(),
        &settings.easting_column,
        &settings.northing_column,
        settings.hemisphere,
        &table.headers,
    )?;

    info!(
        easting = %request.easting_column,
        northing = %request.northing_column,
        zone = %request.zone,
        hemisphere = %request.hemisphere,
        rows = table.row_count(),
        "Converting"
    );

    let projector = SmartProjector::new();
    let definitions = request.definitions();
    debug!(
        backend = projector.description(&definitions.source, &definitions.target),
        "Projection backend"
    );

    let options = EngineOptions {
        parallel: args.parallel,
    };
    let mut conversion = tokio::task::spawn_blocking(move || {
        ConversionEngine::with_options(projector, options).convert(&table, &request)
    })
    .await
    .context("Conversion task failed")??;

    conversion
        .report
        .set_source(&source_name(&args.input), Some(checksum));

    geojson_export::write_to_file(&conversion.collection, &args.output, !args.compact)?;

    println!(
        "Successfully converted {} points to GeoJSON format!",
        conversion.feature_count()
    );
    println!("GeoJSON file has been created: {}", args.output.display());

    if conversion.report.rows_skipped > 0 {
        warn!("{}", conversion.report.summary());
        conversion.report.display();
    }

    if args.preview {
        let json = geojson_export::to_string(&conversion.collection, !args.compact)?;
        println!("\nPreview:\n{}", geojson_export::preview(&json, PREVIEW_LEN));
    }

    if let Some(report_path) = &args.report {
        conversion.report.save_to_file(report_path)?;
        info!(path = %report_path.display(), "Report saved");
    }

    Ok(())
}

/// Lit le fichier et calcule son checksum blake3, puis parse hors du runtime async
async fn load_table(input: &Path, options: ReadOptions) -> Result<(Table, String)> {
    let format = Format::from_path(input)?;
    let data = tokio::fs::read(input)
        .await
        .with_context(|| format!("Cannot open {}", input.display()))?;

    tokio::task::spawn_blocking(move || {
        let checksum = blake3::hash(&data).to_hex().to_string();
        let table = sheet_table::parse_bytes(&data, format, &options)?;
        Ok::<_, anyhow::Error>((table, checksum))
    })
    .await
    .context("Parse task failed")?
}

/// Nom du fichier source pour le rapport
fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Parse un délimiteur CSV (un seul caractère ASCII)
fn parse_delimiter(raw: &str) -> Result<u8, String> {
    if raw == "tab" || raw == "\\t" {
        return Ok(b'\t');
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!(
            "Invalid delimiter: '{}'. Expected a single ASCII character",
            raw
        )),
    }
}
