//! Types de données pour le crate sheet-table

use std::fmt;
use std::path::Path;

use crate::TableError;

/// Valeur brute d'une cellule, telle que fournie par le tableur
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Cellule vide (ou en erreur dans le classeur)
    Empty,
    /// Texte
    Text(String),
    /// Entier
    Integer(i64),
    /// Nombre flottant (les dates Excel arrivent ici sous forme de numéro de série)
    Number(f64),
    /// Booléen
    Bool(bool),
}

impl Cell {
    /// Vrai si la cellule est vide ou ne contient que des espaces
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

/// Ligne brute numérotée : (numéro de ligne dans la feuille, 1 = première, cellules)
pub type NumberedRow = (usize, Vec<Cell>);

/// Table normalisée : une ligne d'en-tête et des lignes de données
///
/// Les lignes peuvent être plus courtes que l'en-tête (lignes "ragged"),
/// une cellule absente se lit comme `None` via [`Table::cell`].
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Noms de colonnes, dans l'ordre du fichier (unicité non garantie)
    pub headers: Vec<String>,

    /// Lignes de données, dans l'ordre du fichier
    pub rows: Vec<Vec<Cell>>,

    /// Numéro de ligne dans la feuille de chaque ligne de données
    pub row_numbers: Vec<usize>,
}

impl Table {
    /// Table sans lignes vides : l'en-tête est la ligne 1, les données suivent
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let row_numbers = (2..rows.len() + 2).collect();
        Self {
            headers,
            rows,
            row_numbers,
        }
    }

    /// Construit une table depuis une grille brute (en-tête en première ligne, ligne 1)
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        Self::from_numbered_rows(grid.into_iter().enumerate().map(|(i, row)| (i + 1, row)))
    }

    /// Construit une table depuis des lignes numérotées par le parser
    ///
    /// Les lignes entièrement vides sont ignorées mais gardent leur place dans la
    /// numérotation. Échoue si la grille n'a pas au moins un en-tête et une ligne
    /// de données, ou moins de deux colonnes.
    pub fn from_numbered_rows<I>(grid: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = NumberedRow>,
    {
        let mut rows = grid
            .into_iter()
            .filter(|(_, row)| !row.iter().all(Cell::is_blank));

        let (_, header_row) = rows.next().ok_or(TableError::EmptyTable)?;
        let (row_numbers, rows): (Vec<usize>, Vec<Vec<Cell>>) = rows.unzip();

        if rows.is_empty() {
            return Err(TableError::EmptyTable);
        }

        let headers: Vec<String> = header_row.iter().map(|c| c.to_string()).collect();
        if headers.len() < 2 {
            return Err(TableError::TooFewColumns);
        }

        Ok(Self {
            headers,
            rows,
            row_numbers,
        })
    }

    /// Numéro de ligne dans la feuille de la ligne de données `index`
    pub fn row_number(&self, index: usize) -> usize {
        self.row_numbers.get(index).copied().unwrap_or(index + 2)
    }

    /// Index de la première colonne portant ce nom
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cellule (ligne, colonne), `None` si la ligne est trop courte
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Nombre de lignes de données (hors en-tête)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Format du fichier source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Classeur (xlsx, xlsm, xlsb, xls, ods) lu avec calamine
    Workbook,
    /// Texte délimité ; délimiteur détecté si `None`
    Delimited { delimiter: Option<u8> },
}

impl Format {
    /// Détermine le format depuis l'extension du fichier
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Format::Workbook),
            "csv" | "txt" => Ok(Format::Delimited { delimiter: None }),
            "tsv" => Ok(Format::Delimited {
                delimiter: Some(b'\t'),
            }),
            _ => Err(TableError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Options de lecture
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Feuille à lire (défaut : la première du classeur)
    pub sheet: Option<String>,

    /// Délimiteur CSV forcé (défaut : détection automatique)
    pub delimiter: Option<u8>,
}
