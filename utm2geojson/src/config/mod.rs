//! Configuration de la conversion
//!
//! Priorité : options CLI > profil JSON > variables d'environnement > défauts.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::projection::Hemisphere;

/// Zone proposée par défaut
pub const DEFAULT_ZONE: &str = "10";

pub const ENV_ZONE: &str = "UTM2GEOJSON_ZONE";
pub const ENV_HEMISPHERE: &str = "UTM2GEOJSON_HEMISPHERE";
pub const ENV_EASTING: &str = "UTM2GEOJSON_EASTING";
pub const ENV_NORTHING: &str = "UTM2GEOJSON_NORTHING";

/// Profil de conversion (tous les champs optionnels)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Zone UTM, brute : validée au moment de la conversion
    pub zone: Option<String>,

    /// Hémisphère
    pub hemisphere: Option<Hemisphere>,

    /// Colonne des Easting
    pub easting_column: Option<String>,

    /// Colonne des Northing
    pub northing_column: Option<String>,
}

/// Paramètres effectifs, avant validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub zone: String,
    pub hemisphere: Hemisphere,
    pub easting_column: String,
    pub northing_column: String,
}

impl Config {
    /// Charge un profil depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Charge le profil depuis les variables d'environnement
    pub fn from_env() -> Result<Self> {
        let hemisphere = match std::env::var(ENV_HEMISPHERE) {
            Ok(raw) => Some(
                raw.parse::<Hemisphere>()
                    .map_err(anyhow::Error::msg)
                    .context(format!("Invalid {}", ENV_HEMISPHERE))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            zone: std::env::var(ENV_ZONE).ok(),
            hemisphere,
            easting_column: std::env::var(ENV_EASTING).ok(),
            northing_column: std::env::var(ENV_NORTHING).ok(),
        })
    }

    /// Complète les champs absents avec ceux d'un profil de priorité inférieure
    pub fn or(self, fallback: Config) -> Self {
        Self {
            zone: self.zone.or(fallback.zone),
            hemisphere: self.hemisphere.or(fallback.hemisphere),
            easting_column: self.easting_column.or(fallback.easting_column),
            northing_column: self.northing_column.or(fallback.northing_column),
        }
    }

    /// Paramètres effectifs : zone 10, nord, et les deux premières colonnes par défaut
    pub fn resolve(self, headers: &[String]) -> Settings {
        let column = |i: usize| headers.get(i).cloned().unwrap_or_default();

        Settings {
            zone: self.zone.unwrap_or_else(|| DEFAULT_ZONE.to_string()),
            hemisphere: self.hemisphere.unwrap_or_default(),
            easting_column: self.easting_column.unwrap_or_else(|| column(0)),
            northing_column: self.northing_column.unwrap_or_else(|| column(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["X".into(), "Y".into(), "Name".into()]
    }

    #[test]
    fn test_defaults() {
        let settings = Config::default().resolve(&headers());
        assert_eq!(
            settings,
            Settings {
                zone: "10".into(),
                hemisphere: Hemisphere::North,
                easting_column: "X".into(),
                northing_column: "Y".into(),
            }
        );
    }

    #[test]
    fn test_defaults_without_headers() {
        let settings = Config::default().resolve(&[]);
        assert_eq!(settings.easting_column, "");
        assert_eq!(settings.northing_column, "");
    }

    #[test]
    fn test_precedence() {
        let cli = Config {
            zone: Some("31".into()),
            ..Default::default()
        };
        let file = Config {
            zone: Some("20".into()),
            hemisphere: Some(Hemisphere::South),
            ..Default::default()
        };
        let env = Config {
            hemisphere: Some(Hemisphere::North),
            northing_column: Some("Name".into()),
            ..Default::default()
        };

        let settings = cli.or(file).or(env).resolve(&headers());
        assert_eq!(settings.zone, "31");
        assert_eq!(settings.hemisphere, Hemisphere::South);
        assert_eq!(settings.easting_column, "X");
        assert_eq!(settings.northing_column, "Name");
    }

    #[test]
    fn test_load() {
        let path = std::env::temp_dir().join(format!("utm2geojson_config_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"zone": "40", "hemisphere": "south", "easting_column": "E"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.zone.as_deref(), Some("40"));
        assert_eq!(config.hemisphere, Some(Hemisphere::South));
        assert_eq!(config.easting_column.as_deref(), Some("E"));
        assert_eq!(config.northing_column, None);
    }

    #[test]
    fn test_load_unknown_field() {
        let path = std::env::temp_dir().join(format!("utm2geojson_bad_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"srid": 4326}"#).unwrap();

        let result = Config::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
