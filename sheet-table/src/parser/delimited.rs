//! Parser pour les fichiers texte délimités (CSV, TSV)
//!
//! Les exports CSV d'Excel sont souvent en Windows-1252 avec `;` comme
//! séparateur (locales européennes) : on détecte les deux. Les champs
//! numériques sont typés comme le ferait un tableur à l'ouverture du fichier.

use std::borrow::Cow;

use csv::ReaderBuilder;
use tracing::debug;

use crate::types::{Cell, NumberedRow};
use crate::TableError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Délimiteurs candidats, par ordre de préférence en cas d'égalité
const CANDIDATES: [u8; 3] = [b',', b';', b'\t'];

/// Parse un fichier délimité en lignes numérotées (numéro de ligne du fichier)
pub fn parse(data: &[u8], delimiter: Option<u8>) -> Result<Vec<NumberedRow>, TableError> {
    let text = decode(data);
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(text.as_bytes()));

    debug!(delimiter = %(delimiter as char).escape_default(), "Parsing delimited text");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Les lignes vides sont sautées par le reader mais comptées dans la position
        let line = record
            .position()
            .map_or(grid.len() + 1, |p| p.line() as usize);
        grid.push((line, record.iter().map(to_cell).collect()));
    }

    Ok(grid)
}

/// Décode en UTF-8 (BOM retiré), ou en Windows-1252 si les octets ne sont pas de l'UTF-8
pub fn decode(data: &[u8]) -> Cow<'_, str> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    match simdutf8::basic::from_utf8(data) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!("Input is not UTF-8, decoding as Windows-1252");
            let (decoded, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(data);
            decoded
        }
    }
}

/// Détecte le délimiteur le plus fréquent sur la première ligne
pub fn sniff_delimiter(data: &[u8]) -> u8 {
    let first_line = match memchr::memchr(b'\n', data) {
        Some(end) => &data[..end],
        None => data,
    };

    let mut best = CANDIDATES[0];
    let mut best_count = 0;
    for &candidate in &CANDIDATES {
        let count = memchr::memchr_iter(candidate, first_line).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    best
}

/// Champ vide → `Empty`, entier → `Integer`, nombre fini → `Number`, sinon `Text`
fn to_cell(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Cell::Integer(i);
    }

    match fast_float::parse::<f64, _>(trimmed) {
        Ok(n) if n.is_finite() => Cell::Number(n),
        _ => Cell::Text(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter(b"ID,E,N\n1,2,3"), b',');
        assert_eq!(sniff_delimiter(b"ID;E;N\r\n1;2,5;3,5"), b';');
        assert_eq!(sniff_delimiter(b"ID\tE\tN"), b'\t');
        assert_eq!(sniff_delimiter(b"single"), b',');
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        assert_eq!(decode(b"\xEF\xBB\xBFNord"), "Nord");
    }

    #[test]
    fn test_decode_windows_1252() {
        // é en latin-1
        assert_eq!(decode(b"Sommet \xe9"), "Sommet é");
    }

    #[test]
    fn test_parse_semicolon() {
        let grid = parse(b"ID;E;N\nA1;500000;4649776.5\n", None).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[1].1[0], Cell::Text("A1".into()));
        assert_eq!(grid[1].1[1], Cell::Integer(500000));
        assert_eq!(grid[1].1[2], Cell::Number(4649776.5));
    }

    #[test]
    fn test_parse_ragged_and_blank() {
        let grid = parse(b"E,N,Note\n1,2\n3,,x\n", Some(b',')).unwrap();
        assert_eq!(grid[1].1.len(), 2);
        assert_eq!(grid[2].1[1], Cell::Empty);
        assert_eq!(grid[2].1[2], Cell::Text("x".into()));
    }

    #[test]
    fn test_parse_quoted_delimiter() {
        let grid = parse(b"Name,E,N\n\"Point, nord\",1,2\n", None).unwrap();
        assert_eq!(grid[1].1[0], Cell::Text("Point, nord".into()));
    }

    #[test]
    fn test_line_numbers_count_empty_lines() {
        let grid = parse(b"E,N\n1,2\n\n,\n3,4\n", None).unwrap();
        let lines: Vec<usize> = grid.iter().map(|(line, _)| *line).collect();
        assert_eq!(lines, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_to_cell_typing() {
        assert_eq!(to_cell(" 500000 "), Cell::Integer(500000));
        assert_eq!(to_cell("-12"), Cell::Integer(-12));
        assert_eq!(to_cell("4649776.25"), Cell::Number(4649776.25));
        assert_eq!(to_cell("1e3"), Cell::Number(1000.0));
        assert_eq!(to_cell("   "), Cell::Empty);
        for text in ["A1", "12,5", "500000 m", "inf", "NaN"] {
            assert_eq!(to_cell(text), Cell::Text(text.into()), "'{}'", text);
        }
    }
}
