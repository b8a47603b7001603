//! # utm2geojson
//!
//! Conversion de points UTM (Easting/Northing) lus dans un tableur
//! vers une FeatureCollection GeoJSON en WGS84.
//!
//! ## Features
//!
//! - Lecture XLSX/XLS/ODS/CSV via `sheet-table`
//! - Reprojection UTM → WGS84 en Rust pur (`reproject_lite`), PROJ en option (feature `reproject`)
//! - Lignes invalides ignorées et comptées, jamais bloquantes
//! - Rapport de conversion (JSON ou console)
//! - CLI simple
//!
//! ## Usage CLI
//!
//! ```bash
//! # Lister les colonnes disponibles
//! utm2geojson columns --input ./points.xlsx
//!
//! # Convertir (zone 31 nord)
//! utm2geojson convert --input ./points.xlsx --easting X --northing Y --zone 31 --north
//! ```
//!
//! ## Usage bibliothèque
//!
//! ```rust,ignore
//! use utm2geojson::{create_geojson, Hemisphere};
//!
//! let table = sheet_table::read_table(std::path::Path::new("points.csv"))?;
//! let conversion = create_geojson(&table, "E", "N", "31", Hemisphere::North)?;
//! println!("{}", conversion.report.summary());
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod projection;
pub mod report;
pub mod reproject_lite;

pub use config::Config;
pub use convert::{create_geojson, Conversion, ConversionEngine, ConversionRequest, EngineOptions, SkipReason};
pub use error::ConversionError;
pub use projection::{Hemisphere, ProjectionDefinitions, ProjectionError, Projector, Zone};
pub use report::{ConversionReport, ConversionStatus};
pub use reproject_lite::{LiteProjector, SmartProjector};
