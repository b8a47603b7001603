//! Parser pour les classeurs (xlsx, xlsm, xlsb, xls, ods) via calamine

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use tracing::debug;

use crate::types::{Cell, NumberedRow};
use crate::TableError;

/// Parse une feuille d'un classeur en lignes numérotées
///
/// Sans nom de feuille, la première feuille du classeur est lue. La plage de
/// calamine commence à la première cellule utilisée : les numéros de ligne
/// sont recalés sur la feuille.
pub fn parse(data: &[u8], sheet: Option<&str>) -> Result<Vec<NumberedRow>, TableError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(data)).map_err(TableError::workbook)?;

    let names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) if names.iter().any(|n| n == name) => name.to_string(),
        Some(name) => return Err(TableError::sheet_not_found(name, &names)),
        None => names.first().cloned().ok_or(TableError::EmptyTable)?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(TableError::workbook)?;

    let start_row = first_row(range.start());

    debug!(
        sheet = %sheet_name,
        start_row,
        rows = range.height(),
        columns = range.width(),
        "Read worksheet"
    );

    Ok(range
        .rows()
        .enumerate()
        .map(|(i, row)| (start_row + i, row.iter().map(to_cell).collect()))
        .collect())
}

/// Numéro de ligne (1 = première ligne de la feuille) du début de la plage
fn first_row(start: Option<(u32, u32)>) -> usize {
    start.map_or(1, |(row, _)| row as usize + 1)
}

/// Convertit une cellule calamine en cellule brute
///
/// Les dates restent des numéros de série, comme les renvoie un export brut du classeur.
fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Integer(*i),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
