//! Reprojection intelligente : reproject_lite en priorité, fallback sur proj
//!
//! Utilise automatiquement la meilleure option disponible pour chaque paire de définitions.

use geo::Coord;

use super::LiteProjector;
use crate::projection::{ProjectionError, Projector};

/// Projecteur par défaut
///
/// Essaie d'abord reproject_lite (pure Rust), puis PROJ si la feature `reproject` est activée.
#[derive(Debug, Default)]
pub struct SmartProjector {
    lite: LiteProjector,
    #[cfg(feature = "reproject")]
    proj: crate::export::reproject::ProjProjector,
}

impl SmartProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Description du backend utilisé pour une paire de définitions
    pub fn description(&self, source: &str, target: &str) -> &'static str {
        if LiteProjector::supports(source, target) {
            return "reproject_lite (pure Rust)";
        }

        #[cfg(feature = "reproject")]
        return "proj (PROJ library)";

        #[cfg(not(feature = "reproject"))]
        "none (unsupported without the 'reproject' feature)"
    }
}

impl Projector for SmartProjector {
    fn project(&self, source: &str, target: &str, point: Coord) -> Result<Coord, ProjectionError> {
        if LiteProjector::supports(source, target) {
            return self.lite.project(source, target, point);
        }

        #[cfg(feature = "reproject")]
        return self.proj.project(source, target, point);

        #[cfg(not(feature = "reproject"))]
        Err(ProjectionError::Unsupported(format!(
            "{} -> {} (build with --features reproject for PROJ support)",
            source, target
        )))
    }
}
