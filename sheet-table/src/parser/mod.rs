//! Parsers des formats de tableur supportés

pub mod delimited;
pub mod workbook;
