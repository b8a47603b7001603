//! Rapport de conversion avec graceful degradation
//!
//! Ce module collecte les lignes converties et ignorées d'une conversion,
//! pour pouvoir annoncer "N lignes ignorées" et les détailler.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::convert::SkipReason;
use crate::projection::{Hemisphere, Zone};

/// Statut global de la conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConversionStatus {
    /// Toutes les lignes converties
    Success,
    /// Conversion réussie avec des lignes ignorées
    PartialSuccess,
    /// Aucune ligne convertie
    Failed,
}

/// Ligne ignorée avec sa raison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    /// Numéro de ligne dans le tableur (en-tête = ligne 1)
    pub row: usize,
    /// Raison
    pub reason: SkipReason,
}

/// Rapport complet de conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Fichier source (optionnel)
    pub source: Option<String>,
    /// Checksum blake3 du fichier source (optionnel)
    pub source_checksum: Option<String>,
    /// Zone UTM utilisée
    pub zone: Option<Zone>,
    /// Hémisphère utilisé
    pub hemisphere: Option<Hemisphere>,
    /// Durée de la conversion
    pub duration_secs: f64,
    /// Statut global
    pub status: ConversionStatus,

    /// Nombre de lignes de données lues
    pub rows_total: usize,
    /// Nombre de lignes converties
    pub rows_converted: usize,
    /// Nombre de lignes ignorées
    pub rows_skipped: usize,

    /// Lignes ignorées par raison ("invalid_coordinate", "projection_error")
    pub by_reason: BTreeMap<&'static str, usize>,

    /// Détail des lignes ignorées
    pub skipped: Vec<SkippedRow>,
}

impl Default for ConversionReport {
    fn default() -> Self {
        Self {
            source: None,
            source_checksum: None,
            zone: None,
            hemisphere: None,
            duration_secs: 0.0,
            status: ConversionStatus::Success,
            rows_total: 0,
            rows_converted: 0,
            rows_skipped: 0,
            by_reason: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }
}

impl ConversionReport {
    /// Crée un rapport pour une zone et un hémisphère
    pub fn new(zone: Zone, hemisphere: Hemisphere) -> Self {
        Self {
            zone: Some(zone),
            hemisphere: Some(hemisphere),
            ..Default::default()
        }
    }

    /// Enregistre une ligne convertie
    pub fn record_converted(&mut self) {
        self.rows_total += 1;
        self.rows_converted += 1;
    }

    /// Enregistre une ligne ignorée (`row` = numéro de ligne du tableur)
    pub fn record_skipped(&mut self, row: usize, reason: SkipReason) {
        self.rows_total += 1;
        self.rows_skipped += 1;
        *self.by_reason.entry(reason.code()).or_default() += 1;
        self.skipped.push(SkippedRow { row, reason });
    }

    /// Nombre de lignes ignorées pour une raison donnée
    pub fn skipped_for(&self, code: &str) -> usize {
        self.by_reason.get(code).copied().unwrap_or(0)
    }

    /// Renseigne le fichier source
    pub fn set_source(&mut self, name: &str, checksum: Option<String>) {
        self.source = Some(name.to_string());
        self.source_checksum = checksum;
    }

    /// Définit la durée de la conversion
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Détermine le statut final
    pub fn finalize(&mut self) {
        self.status = if self.rows_total > 0 && self.rows_converted == 0 {
            ConversionStatus::Failed
        } else if self.rows_skipped > 0 {
            ConversionStatus::PartialSuccess
        } else {
            ConversionStatus::Success
        };
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("CONVERSION REPORT");
        println!("{}", "=".repeat(60));

        if let Some(ref source) = self.source {
            println!("\nSource: {}", source);
        }
        if let Some(ref checksum) = self.source_checksum {
            println!("Checksum (blake3): {}", checksum);
        }
        if let (Some(zone), Some(hemisphere)) = (self.zone, self.hemisphere) {
            println!("UTM zone: {} {}", zone, hemisphere);
        }

        println!("\nStatus: {:?}", self.status);
        println!("Duration: {:.3}s", self.duration_secs);

        println!("\n--- SUMMARY ---");
        println!(
            "Rows: {} read, {} converted, {} skipped",
            self.rows_total, self.rows_converted, self.rows_skipped
        );

        if !self.by_reason.is_empty() {
            println!("\n--- SKIPPED BY REASON ---");
            for (reason, count) in &self.by_reason {
                println!("  {}: {}", reason, count);
            }
        }

        if !self.skipped.is_empty() {
            println!("\n--- SKIPPED ROWS ({}) ---", self.skipped.len());
            for s in self.skipped.iter().take(20) {
                println!("  row {}: {}", s.row, s.reason);
            }
            if self.skipped.len() > 20 {
                println!("  ... and {} more", self.skipped.len() - 20);
            }
        }

        println!("\n{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "{} of {} rows converted, {} rows were skipped",
            self.rows_converted, self.rows_total, self.rows_skipped
        )
    }
}
