//! # sheet-table
//!
//! Lecture de tableurs (XLSX, XLS, ODS, CSV) vers une table normalisée :
//! une ligne d'en-tête et des lignes de cellules brutes.
//!
//! ## Features
//!
//! - Classeurs via `calamine` (première feuille par défaut)
//! - CSV via `csv`, avec détection du délimiteur et de l'encodage (UTF-8 / Windows-1252)
//! - Rejet des fichiers vides, sans ligne de données ou à une seule colonne
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! let table = sheet_table::read_table(Path::new("points.xlsx"))?;
//! println!("Colonnes: {:?}", table.headers);
//! println!("Lignes: {}", table.row_count());
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::TableError;
pub use types::{Cell, Format, NumberedRow, ReadOptions, Table};

use std::path::Path;

use tracing::debug;

/// Lit un fichier tableur (format déduit de l'extension)
pub fn read_table(path: &Path) -> Result<Table, TableError> {
    read_table_with(path, &ReadOptions::default())
}

/// Lit un fichier tableur avec des options (feuille, délimiteur)
pub fn read_table_with(path: &Path, options: &ReadOptions) -> Result<Table, TableError> {
    let format = Format::from_path(path)?;
    let data = std::fs::read(path)?;
    parse_bytes(&data, format, options)
}

/// Parse un tableur déjà chargé en mémoire.
///
/// # Errors
///
/// Retourne `TableError` si le contenu est illisible, si la feuille demandée
/// n'existe pas, ou si la table n'a pas d'en-tête suivi d'au moins une ligne.
pub fn parse_bytes(data: &[u8], format: Format, options: &ReadOptions) -> Result<Table, TableError> {
    let grid = match format {
        Format::Workbook => parser::workbook::parse(data, options.sheet.as_deref())?,
        Format::Delimited { delimiter } => {
            parser::delimited::parse(data, options.delimiter.or(delimiter))?
        }
    };

    let table = Table::from_numbered_rows(grid)?;
    debug!(
        columns = table.headers.len(),
        rows = table.row_count(),
        "Table loaded"
    );

    Ok(table)
}
