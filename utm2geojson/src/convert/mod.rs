//! Pipeline de conversion : validation → définitions de projection → transformation ligne par ligne

pub mod cell;
pub mod engine;
pub mod request;

pub use engine::{ColumnIndices, Conversion, ConversionEngine, EngineOptions, RowOutcome, SkipReason};
pub use request::ConversionRequest;

use sheet_table::Table;

use crate::error::ConversionError;
use crate::projection::{Hemisphere, Zone};
use crate::reproject_lite::SmartProjector;

/// Valide la configuration puis convertit la table avec le projecteur par défaut
pub fn create_geojson<Z>(
    table: &Table,
    easting_column: &str,
    northing_column: &str,
    zone: Z,
    hemisphere: Hemisphere,
) -> Result<Conversion, ConversionError>
where
    Z: TryInto<Zone, Error = ConversionError>,
{
    let request = ConversionRequest::validate(
        zone,
        easting_column,
        northing_column,
        hemisphere,
        &table.headers,
    )?;

    ConversionEngine::new(SmartProjector::new()).convert(table, &request)
}
