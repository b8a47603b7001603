//! Capacité de projection
//!
//! Le moteur de conversion ne connaît qu'une fonction : point projeté +
//! définitions source/cible → point géographique, faillible. Les backends
//! (pur Rust, PROJ) et les stubs de test implémentent [`Projector`].

pub mod definition;
pub mod zone;

pub use definition::{CrsDefinition, ProjectionDefinitions, WGS84_LONGLAT};
pub use zone::{Hemisphere, Zone};

use geo::Coord;
use thiserror::Error;

/// Erreurs de projection d'un point
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Définition non comprise par le backend
    #[error("Unsupported projection definition: {0}")]
    Unsupported(String),

    /// Coordonnées hors du domaine de la projection
    #[error("Coordinates out of projection domain: ({x}, {y})")]
    OutOfDomain { x: f64, y: f64 },

    /// Échec du backend
    #[error("Projection failed: {0}")]
    Failed(String),
}

impl ProjectionError {
    pub fn out_of_domain(point: Coord) -> Self {
        Self::OutOfDomain {
            x: point.x,
            y: point.y,
        }
    }
}

/// Projette un point d'un système vers un autre
///
/// `point.x`/`point.y` sont l'easting/northing en entrée, la longitude/latitude
/// en sortie quand la cible est géographique.
pub trait Projector {
    fn project(&self, source: &str, target: &str, point: Coord) -> Result<Coord, ProjectionError>;
}

impl<P: Projector + ?Sized> Projector for &P {
    fn project(&self, source: &str, target: &str, point: Coord) -> Result<Coord, ProjectionError> {
        (**self).project(source, target, point)
    }
}

impl<P: Projector + ?Sized> Projector for Box<P> {
    fn project(&self, source: &str, target: &str, point: Coord) -> Result<Coord, ProjectionError> {
        (**self).project(source, target, point)
    }
}
