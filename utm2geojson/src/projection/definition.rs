//! Définitions de projection au format PROJ
//!
//! Construction des chaînes source (UTM) et cible (longitude/latitude WGS84),
//! et lecture de ces mêmes chaînes par le backend pur Rust.

use std::str::FromStr;

use super::zone::{Hemisphere, Zone};
use super::ProjectionError;

/// Définition cible : longitude/latitude WGS84 (EPSG:4326)
pub const WGS84_LONGLAT: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Paire de définitions source/cible passée au projecteur
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionDefinitions {
    pub source: String,
    pub target: String,
}

impl ProjectionDefinitions {
    /// Construit les définitions pour une zone et un hémisphère
    pub fn for_zone(zone: Zone, hemisphere: Hemisphere) -> Self {
        let south = match hemisphere {
            Hemisphere::North => "",
            Hemisphere::South => " +south",
        };

        Self {
            source: format!(
                "+proj=utm +zone={}{} +datum=WGS84 +units=m +no_defs",
                zone, south
            ),
            target: WGS84_LONGLAT.to_string(),
        }
    }
}

/// Système de coordonnées compris par le backend pur Rust
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsDefinition {
    /// UTM sur WGS84
    Utm { zone: Zone, hemisphere: Hemisphere },
    /// Longitude/latitude WGS84, en degrés
    LongLat,
}

impl FromStr for CrsDefinition {
    type Err = ProjectionError;

    fn from_str(definition: &str) -> Result<Self, Self::Err> {
        let unsupported = || ProjectionError::Unsupported(definition.to_string());

        let mut proj = None;
        let mut zone = None;
        let mut hemisphere = Hemisphere::North;

        for token in definition.split_whitespace() {
            let token = token.strip_prefix('+').ok_or_else(unsupported)?;
            let (key, value) = match token.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (token, None),
            };

            match (key, value) {
                ("proj", Some(name)) => proj = Some(name),
                ("zone", Some(z)) => zone = Some(z.parse::<Zone>().map_err(|_| unsupported())?),
                ("south", None) => hemisphere = Hemisphere::South,
                ("north", None) => hemisphere = Hemisphere::North,
                ("datum" | "ellps", Some(d)) if d.eq_ignore_ascii_case("WGS84") => {}
                ("units", Some("m")) | ("no_defs", None) | ("type", Some("crs")) => {}
                _ => return Err(unsupported()),
            }
        }

        match (proj, zone) {
            (Some("utm"), Some(zone)) => Ok(Self::Utm { zone, hemisphere }),
            (Some("longlat" | "latlong" | "lonlat" | "latlon"), None)
                if hemisphere == Hemisphere::North =>
            {
                Ok(Self::LongLat)
            }
            _ => Err(unsupported()),
        }
    }
}
