//! Zone UTM et hémisphère

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Numéro de zone UTM validé (1 à 60)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Zone(u8);

impl Zone {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 60;

    /// Crée une zone, échoue hors de 1..=60
    pub fn new(zone: u8) -> Result<Self, ConversionError> {
        if (Self::MIN..=Self::MAX).contains(&zone) {
            Ok(Self(zone))
        } else {
            Err(ConversionError::invalid_zone(zone))
        }
    }

    /// Numéro de zone
    pub fn number(self) -> u8 {
        self.0
    }

    /// Méridien central de la zone, en degrés
    pub fn central_meridian(self) -> f64 {
        (self.0 as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> Self {
        zone.0
    }
}

impl FromStr for Zone {
    type Err = ConversionError;

    /// Entier strict : "3.5", "abc" ou "" sont refusés
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ConversionError::invalid_zone(s))?;
        Self::try_from(value).map_err(|_| ConversionError::invalid_zone(s))
    }
}

impl TryFrom<&str> for Zone {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&String> for Zone {
    type Error = ConversionError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<i64> for Zone {
    type Error = ConversionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ConversionError::invalid_zone(value))
            .and_then(Self::new)
    }
}

impl TryFrom<f64> for Zone {
    type Error = ConversionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ConversionError::invalid_zone(value));
        }
        Self::try_from(value as i64).map_err(|_| ConversionError::invalid_zone(value))
    }
}

/// Hémisphère de la zone UTM
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

impl Hemisphere {
    /// Depuis un booléen "hémisphère nord"
    pub fn from_north_flag(is_north: bool) -> Self {
        if is_north {
            Self::North
        } else {
            Self::South
        }
    }

    pub fn is_north(self) -> bool {
        self == Self::North
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => f.write_str("north"),
            Self::South => f.write_str("south"),
        }
    }
}

impl FromStr for Hemisphere {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" | "nord" => Ok(Self::North),
            "south" | "s" | "sud" => Ok(Self::South),
            _ => Err(format!("Invalid hemisphere: {}. Use: north, south", s)),
        }
    }
}
