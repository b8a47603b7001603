//! Validation de la demande de conversion
//!
//! Rejette une configuration invalide avant tout traitement de ligne.

use serde::Serialize;

use crate::error::ConversionError;
use crate::projection::{Hemisphere, ProjectionDefinitions, Zone};

/// Demande de conversion validée
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRequest {
    pub easting_column: String,
    pub northing_column: String,
    pub zone: Zone,
    pub hemisphere: Hemisphere,
}

impl ConversionRequest {
    /// Valide la configuration choisie par l'utilisateur.
    ///
    /// Ordre des vérifications : zone, colonnes sélectionnées, colonnes distinctes.
    /// Une colonne absente de `headers` compte comme non sélectionnée.
    ///
    /// # Errors
    ///
    /// `InvalidZone`, `MissingColumnSelection` ou `DuplicateColumnSelection`.
    pub fn validate<Z>(
        zone: Z,
        easting_column: &str,
        northing_column: &str,
        hemisphere: Hemisphere,
        headers: &[String],
    ) -> Result<Self, ConversionError>
    where
        Z: TryInto<Zone, Error = ConversionError>,
    {
        let zone = zone.try_into()?;

        let selected = |column: &str| {
            !column.trim().is_empty() && headers.iter().any(|h| h == column)
        };
        if !selected(easting_column) || !selected(northing_column) {
            return Err(ConversionError::MissingColumnSelection);
        }

        if easting_column == northing_column {
            return Err(ConversionError::DuplicateColumnSelection);
        }

        Ok(Self {
            easting_column: easting_column.to_string(),
            northing_column: northing_column.to_string(),
            zone,
            hemisphere,
        })
    }

    /// Définitions de projection source/cible pour cette demande
    pub fn definitions(&self) -> ProjectionDefinitions {
        ProjectionDefinitions::for_zone(self.zone, self.hemisphere)
    }
}
