//! Zentrale Konfiguration der Spline-Engine.
//!
//! `SplineOptions` enthält alle zur Laufzeit änderbaren Toleranzen.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::error::SplineError;
use serde::{Deserialize, Serialize};

// ── Arc-Length ──────────────────────────────────────────────────────

/// Sehnen-Toleranz, mit der die Arc-Length-Tabelle einmalig gerendert wird.
pub const ARC_LENGTH_TOLERANCE: f32 = 0.01;

// ── Rendering ───────────────────────────────────────────────────────

/// Maximale Sehnenlänge beim Zeichnen einer bestätigten Kurve.
pub const RENDER_TOLERANCE: f32 = 0.05;
/// Maximale Sehnenlänge für die Live-Vorschau (gröber, läuft bei jeder Mausbewegung).
pub const PREVIEW_RENDER_TOLERANCE: f32 = 0.1;

// ── Timeline ────────────────────────────────────────────────────────

/// Abstand der Distanz-Marker auf der Scrub-Timeline.
pub const DISTANCE_MARKER_STEP: f32 = 0.25;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Spline-Optionen.
/// Fehlende Felder in TOML-Dateien fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SplineOptions {
    /// Sehnen-Toleranz für den Aufbau der Arc-Length-Tabelle
    pub arc_length_tolerance: f32,
    /// Sehnen-Toleranz für das Zeichnen
    pub render_tolerance: f32,
    /// Sehnen-Toleranz für die Live-Vorschau
    pub preview_render_tolerance: f32,
    /// Abstand der Timeline-Distanz-Marker
    pub distance_marker_step: f32,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            arc_length_tolerance: ARC_LENGTH_TOLERANCE,
            render_tolerance: RENDER_TOLERANCE,
            preview_render_tolerance: PREVIEW_RENDER_TOLERANCE,
            distance_marker_step: DISTANCE_MARKER_STEP,
        }
    }
}

impl SplineOptions {
    /// Prüft, dass alle Toleranzen endlich und positiv sind.
    pub fn validate(&self) -> Result<(), SplineError> {
        SplineError::check_tolerance(self.arc_length_tolerance)?;
        SplineError::check_tolerance(self.render_tolerance)?;
        SplineError::check_tolerance(self.preview_render_tolerance)?;
        SplineError::check_tolerance(self.distance_marker_step)
    }

    /// Liest Optionen aus TOML-Text und validiert sie.
    pub fn from_toml_str(content: &str) -> Result<Self, SplineError> {
        let opts: Self =
            toml::from_str(content).map_err(|e| SplineError::InvalidData(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Spline-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!(
                        "Spline-Optionen fehlerhaft, verwende Standardwerte: {}",
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Spline-Optionen gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Spline-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
