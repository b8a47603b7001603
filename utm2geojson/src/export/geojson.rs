//! Export de la FeatureCollection en GeoJSON

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geojson::FeatureCollection;

/// Nom de fichier par défaut du résultat
pub const DEFAULT_OUTPUT: &str = "converted_data.geojson";

/// Longueur de l'aperçu affiché
pub const PREVIEW_LEN: usize = 1000;

/// Sérialise la collection (compacte, ou indentée sur 2 espaces)
pub fn to_string(collection: &FeatureCollection, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(collection)
    } else {
        serde_json::to_string(collection)
    };
    json.context("Failed to serialize FeatureCollection")
}

/// Écrit la collection dans un fichier
pub fn write_to_file(collection: &FeatureCollection, output_path: &Path, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, collection)?;
    } else {
        serde_json::to_writer(&mut writer, collection)?;
    }
    writer.flush()?;

    Ok(())
}

/// Aperçu : les `limit` premiers caractères, suivis de "..." si tronqué
pub fn preview(json: &str, limit: usize) -> String {
    match json.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &json[..end]),
        None => json.to_string(),
    }
}
