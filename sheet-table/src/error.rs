//! Types d'erreurs pour le crate sheet-table

use thiserror::Error;

/// Erreurs pouvant survenir lors de la lecture d'un tableur
#[derive(Debug, Error)]
pub enum TableError {
    /// Erreur d'I/O lors de la lecture du fichier
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Extension de fichier non reconnue
    #[error("Unsupported file format: {0}. Use XLSX, XLS, ODS or CSV")]
    UnsupportedFormat(String),

    /// Classeur illisible (xlsx, xls, ods...)
    #[error("Failed to parse the Excel file. Please ensure it's a valid format. ({0})")]
    Workbook(String),

    /// Feuille demandée absente du classeur
    #[error("Sheet not found: {name} (available: {available})")]
    SheetNotFound { name: String, available: String },

    /// Erreur du lecteur CSV
    #[error("Failed to parse the CSV file: {0}")]
    Csv(#[from] csv::Error),

    /// Moins d'une ligne de données sous l'en-tête
    #[error("Excel file is empty or has only a header row.")]
    EmptyTable,

    /// Moins de deux colonnes dans l'en-tête
    #[error("The Excel file must contain at least two columns for Easting and Northing.")]
    TooFewColumns,
}

impl TableError {
    /// Crée une erreur de classeur avec contexte
    pub fn workbook(reason: impl ToString) -> Self {
        Self::Workbook(reason.to_string())
    }

    /// Crée une erreur de feuille introuvable
    pub fn sheet_not_found(name: impl Into<String>, available: &[String]) -> Self {
        Self::SheetNotFound {
            name: name.into(),
            available: available.join(", "),
        }
    }
}
