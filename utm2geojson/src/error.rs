//! Erreurs de conversion

use thiserror::Error;

/// Erreurs pouvant interrompre une conversion
///
/// Les échecs ligne par ligne ne remontent pas ici : ils sont comptés dans le
/// rapport (voir [`crate::convert::SkipReason`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Zone UTM non entière ou hors de 1..=60
    #[error("UTM Zone must be a number between 1 and 60 (got '{0}').")]
    InvalidZone(String),

    /// Colonne Easting ou Northing non sélectionnée
    #[error("Please select columns for both Easting and Northing.")]
    MissingColumnSelection,

    /// Même colonne pour Easting et Northing
    #[error("Easting and Northing columns cannot be the same.")]
    DuplicateColumnSelection,

    /// Colonne absente de l'en-tête au moment de la conversion
    #[error("Selected Easting or Northing column not found: '{0}'.")]
    ColumnNotFound(String),

    /// Aucune ligne convertie alors que la table en contenait
    #[error(
        "Conversion failed for all {rows} rows ({invalid_coordinates} invalid coordinates, \
         {projection_errors} projection errors). Please check if the UTM zone and hemisphere \
         are correct and the coordinate columns contain valid numbers."
    )]
    AllRowsFailed {
        rows: usize,
        invalid_coordinates: usize,
        projection_errors: usize,
    },
}

impl ConversionError {
    /// Crée une erreur de zone invalide
    pub fn invalid_zone(raw: impl ToString) -> Self {
        Self::InvalidZone(raw.to_string())
    }
}
