//! Reprojection légère en Rust pur (sans dépendances externes)
//!
//! Supporte exactement les définitions produites par
//! [`ProjectionDefinitions`](crate::projection::ProjectionDefinitions) :
//! - Source : UTM zones 1 à 60, nord ou sud, datum WGS84
//! - Cible : longitude/latitude WGS84 (EPSG:4326)

mod ellipsoid;
mod smart;
mod utm;

pub use ellipsoid::WGS84;
pub use smart::SmartProjector;

use geo::Coord;

use crate::projection::{CrsDefinition, ProjectionError, Projector};

/// Point en coordonnées géographiques (radians)
#[derive(Debug, Clone, Copy)]
pub struct Geographic {
    /// Longitude en radians
    pub lon: f64,
    /// Latitude en radians
    pub lat: f64,
}

impl Geographic {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Convertit en degrés
    pub fn to_degrees(self) -> (f64, f64) {
        (self.lon.to_degrees(), self.lat.to_degrees())
    }
}

/// Projecteur pur Rust
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteProjector;

impl LiteProjector {
    pub fn new() -> Self {
        Self
    }

    /// Vérifie si la paire de définitions est supportée
    pub fn supports(source: &str, target: &str) -> bool {
        match (source.parse::<CrsDefinition>(), target.parse::<CrsDefinition>()) {
            (Ok(source), Ok(target)) => Self::supports_pair(source, target),
            _ => false,
        }
    }

    fn supports_pair(source: CrsDefinition, target: CrsDefinition) -> bool {
        matches!(
            (source, target),
            (CrsDefinition::Utm { .. } | CrsDefinition::LongLat, CrsDefinition::LongLat)
        )
    }

    /// Transforme un point (x, y) de la source vers la cible
    pub fn transform_point(
        &self,
        source: CrsDefinition,
        target: CrsDefinition,
        x: f64,
        y: f64,
    ) -> Result<(f64, f64), ProjectionError> {
        match (source, target) {
            (CrsDefinition::Utm { zone, hemisphere }, CrsDefinition::LongLat) => {
                Ok(utm::utm_to_geographic(x, y, zone, hemisphere)?.to_degrees())
            }
            (CrsDefinition::LongLat, CrsDefinition::LongLat) => Ok((x, y)),
            _ => Err(ProjectionError::Unsupported(format!(
                "{:?} -> {:?}",
                source, target
            ))),
        }
    }
}

impl Projector for LiteProjector {
    fn project(&self, source: &str, target: &str, point: Coord) -> Result<Coord, ProjectionError> {
        let source: CrsDefinition = source.parse()?;
        let target: CrsDefinition = target.parse()?;
        let (x, y) = self.transform_point(source, target, point.x, point.y)?;
        Ok(Coord { x, y })
    }
}
