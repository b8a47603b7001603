//! Moteur de conversion : lignes UTM → FeatureCollection GeoJSON
//!
//! Une seule passe, déterministe. Chaque ligne produit un [`RowOutcome`] :
//! une ligne invalide est ignorée et comptée, elle n'interrompt jamais le lot.

use std::fmt;
use std::time::Instant;

use geo::Coord;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use rayon::prelude::*;
use serde::Serialize;
use sheet_table::{Cell, Table};
use tracing::{debug, info, warn};

use super::cell;
use super::request::ConversionRequest;
use crate::error::ConversionError;
use crate::projection::{ProjectionDefinitions, Projector};
use crate::report::ConversionReport;

/// Raison pour laquelle une ligne a été ignorée
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Easting ou Northing absent ou non numérique
    InvalidCoordinate,
    /// Le projecteur a échoué sur ce point
    ProjectionError(String),
}

impl SkipReason {
    /// Code stable, utilisé comme clé dans le rapport
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate => "invalid_coordinate",
            Self::ProjectionError(_) => "projection_error",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate => f.write_str("invalid coordinate"),
            Self::ProjectionError(e) => write!(f, "projection error: {}", e),
        }
    }
}

/// Résultat de la conversion d'une ligne
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Converted(Feature),
    Skipped(SkipReason),
}

/// Positions des colonnes Easting/Northing dans l'en-tête
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub easting: usize,
    pub northing: usize,
}

impl ColumnIndices {
    /// Résout les noms de colonnes (première occurrence dans l'en-tête)
    pub fn resolve(headers: &[String], request: &ConversionRequest) -> Result<Self, ConversionError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ConversionError::ColumnNotFound(name.to_string()))
        };

        Ok(Self {
            easting: find(&request.easting_column)?,
            northing: find(&request.northing_column)?,
        })
    }
}

/// Options du moteur
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Convertit les lignes en parallèle (rayon). L'ordre de sortie est conservé.
    pub parallel: bool,
}

/// Résultat d'une conversion réussie
#[derive(Debug, Clone)]
pub struct Conversion {
    pub collection: FeatureCollection,
    pub report: ConversionReport,
}

impl Conversion {
    pub fn feature_count(&self) -> usize {
        self.collection.features.len()
    }
}

/// Moteur de conversion, paramétré par le projecteur
pub struct ConversionEngine<P> {
    projector: P,
    options: EngineOptions,
}

impl<P: Projector + Sync> ConversionEngine<P> {
    pub fn new(projector: P) -> Self {
        Self::with_options(projector, EngineOptions::default())
    }

    pub fn with_options(projector: P, options: EngineOptions) -> Self {
        Self { projector, options }
    }

    /// Convertit toutes les lignes de la table.
    ///
    /// # Errors
    ///
    /// - `ColumnNotFound` si une colonne demandée n'est pas dans l'en-tête
    ///   (vérifié avant tout traitement)
    /// - `AllRowsFailed` si la table a des lignes mais qu'aucune n'a été convertie
    pub fn convert(
        &self,
        table: &Table,
        request: &ConversionRequest,
    ) -> Result<Conversion, ConversionError> {
        let start = Instant::now();
        let columns = ColumnIndices::resolve(&table.headers, request)?;
        let definitions = request.definitions();

        debug!(
            source = %definitions.source,
            target = %definitions.target,
            rows = table.row_count(),
            parallel = self.options.parallel,
            "Starting conversion"
        );

        let outcomes: Vec<RowOutcome> = if self.options.parallel {
            table
                .rows
                .par_iter()
                .map(|row| self.convert_row(&table.headers, row, columns, &definitions))
                .collect()
        } else {
            table
                .rows
                .iter()
                .map(|row| self.convert_row(&table.headers, row, columns, &definitions))
                .collect()
        };

        let mut report = ConversionReport::new(request.zone, request.hemisphere);
        let mut features = Vec::with_capacity(outcomes.len());

        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                RowOutcome::Converted(feature) => {
                    report.record_converted();
                    features.push(feature);
                }
                RowOutcome::Skipped(reason) => {
                    let row = table.row_number(index);
                    warn!(row, reason = %reason, "Skipping row");
                    report.record_skipped(row, reason);
                }
            }
        }

        report.set_duration(start.elapsed());
        report.finalize();

        if features.is_empty() && !table.rows.is_empty() {
            return Err(ConversionError::AllRowsFailed {
                rows: table.row_count(),
                invalid_coordinates: report.skipped_for("invalid_coordinate"),
                projection_errors: report.skipped_for("projection_error"),
            });
        }

        info!(
            converted = report.rows_converted,
            skipped = report.rows_skipped,
            "Conversion complete"
        );

        Ok(Conversion {
            collection: FeatureCollection {
                bbox: None,
                features,
                foreign_members: None,
            },
            report,
        })
    }

    /// Convertit une ligne : extraction, projection, construction de la Feature
    pub fn convert_row(
        &self,
        headers: &[String],
        row: &[Cell],
        columns: ColumnIndices,
        definitions: &ProjectionDefinitions,
    ) -> RowOutcome {
        let easting = cell::coordinate(row.get(columns.easting));
        let northing = cell::coordinate(row.get(columns.northing));

        let (Some(x), Some(y)) = (easting, northing) else {
            return RowOutcome::Skipped(SkipReason::InvalidCoordinate);
        };

        let projected = match self.projector.project(
            &definitions.source,
            &definitions.target,
            Coord { x, y },
        ) {
            Ok(p) if p.x.is_finite() && p.y.is_finite() => p,
            Ok(p) => {
                return RowOutcome::Skipped(SkipReason::ProjectionError(format!(
                    "non-finite result ({}, {})",
                    p.x, p.y
                )))
            }
            Err(e) => return RowOutcome::Skipped(SkipReason::ProjectionError(e.to_string())),
        };

        RowOutcome::Converted(build_feature(headers, row, projected))
    }
}

/// Construit une Feature Point [longitude, latitude] avec toute la ligne en propriétés
fn build_feature(headers: &[String], row: &[Cell], position: Coord) -> Feature {
    let properties: JsonObject = headers
        .iter()
        .enumerate()
        .map(|(i, header)| (header.clone(), cell::property(row.get(i))))
        .collect();

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![position.x, position.y]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
