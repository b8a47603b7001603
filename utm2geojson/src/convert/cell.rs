//! Lecture des cellules brutes : coordonnées et propriétés GeoJSON

use serde_json::{Number, Value};
use sheet_table::Cell;

/// Plus grand entier représentable exactement en f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Lit une coordonnée : nombre fini, ou texte commençant par un nombre
///
/// Pour un texte, seul le préfixe numérique compte ("500000 m" → 500000).
/// Une cellule absente, vide, booléenne, un texte sans préfixe numérique
/// ou un résultat non fini ("inf", "NaN") donne `None`.
pub fn coordinate(cell: Option<&Cell>) -> Option<f64> {
    let value = match cell? {
        Cell::Integer(i) => *i as f64,
        Cell::Number(n) => *n,
        Cell::Text(s) => fast_float::parse_partial::<f64, _>(s.trim()).ok()?.0,
        Cell::Empty | Cell::Bool(_) => return None,
    };

    value.is_finite().then_some(value)
}

/// Valeur de propriété GeoJSON pour une cellule
///
/// Une cellule absente (ligne courte) ou vide devient la chaîne vide. Les flottants
/// entiers sont écrits comme des entiers (`500000` et non `500000.0`).
pub fn property(cell: Option<&Cell>) -> Value {
    match cell {
        None | Some(Cell::Empty) => Value::String(String::new()),
        Some(Cell::Text(s)) => Value::String(s.clone()),
        Some(Cell::Integer(i)) => Value::Number((*i).into()),
        Some(Cell::Number(n)) => number(*n),
        Some(Cell::Bool(b)) => Value::Bool(*b),
    }
}

fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Value::Number((n as i64).into());
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}
