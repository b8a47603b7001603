//! Reprojection de points avec PROJ
//!
//! Ce module est disponible uniquement avec le feature `reproject`.

use std::cell::RefCell;
use std::collections::HashMap;

use geo::Coord;
use proj::Proj;

use crate::projection::{ProjectionError, Projector};

thread_local! {
    /// Transformations compilées, par paire (source, cible) et par thread
    static TRANSFORMS: RefCell<HashMap<(String, String), Proj>> = RefCell::new(HashMap::new());
}

/// Projecteur adossé à la bibliothèque PROJ
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjProjector;

impl ProjProjector {
    pub fn new() -> Self {
        Self
    }
}

impl Projector for ProjProjector {
    fn project(&self, source: &str, target: &str, point: Coord) -> Result<Coord, ProjectionError> {
        TRANSFORMS.with(|transforms| {
            let mut transforms = transforms.borrow_mut();
            let key = (source.to_string(), target.to_string());

            if !transforms.contains_key(&key) {
                let proj = Proj::new_known_crs(source, target, None).map_err(|e| {
                    ProjectionError::Unsupported(format!("{} -> {}: {}", source, target, e))
                })?;
                transforms.insert(key.clone(), proj);
            }

            let proj = transforms
                .get(&key)
                .ok_or_else(|| ProjectionError::Failed("transformation cache miss".into()))?;

            let (x, y) = proj
                .convert((point.x, point.y))
                .map_err(|e| ProjectionError::Failed(e.to_string()))?;

            if !x.is_finite() || !y.is_finite() {
                return Err(ProjectionError::out_of_domain(point));
            }

            Ok(Coord { x, y })
        })
    }
}
