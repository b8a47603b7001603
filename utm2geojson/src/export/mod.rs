//! Modules d'export (GeoJSON) et backend de reprojection PROJ

pub mod geojson;
#[cfg(feature = "reproject")]
pub mod reproject;

#[cfg(feature = "reproject")]
pub use reproject::ProjProjector;
