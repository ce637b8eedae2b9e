//! Fehlertypen der Spline-Engine.
//!
//! Alle Varianten sind Vertragsverletzungen des Aufrufers (falscher Index,
//! Parameter außerhalb des Wertebereichs) oder Hinweise auf defekte Daten.
//! Sie werden nie intern wiederholt, sondern sofort an den Aufrufer gereicht.

use thiserror::Error;

/// Fehler bei Auswertung, Rendering oder Bearbeitung einer Kurve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Parameter `t` oder Distanz liegt außerhalb des gültigen Bereichs.
    #[error("Wert {value} liegt außerhalb des Bereichs [{min}, {max}]")]
    Domain {
        /// Angefragter Wert
        value: f32,
        /// Untere Grenze (inklusive)
        min: f32,
        /// Obere Grenze (inklusive)
        max: f32,
    },

    /// Ein Kontrollsegment hat nicht genau `degree + 1` Punkte.
    #[error("Kontrollsegment {index} hat {actual} Punkte, erwartet {expected}")]
    SegmentShape {
        /// Index des fehlerhaften Segments
        index: usize,
        /// Erwartete Punktanzahl (`degree + 1`)
        expected: usize,
        /// Tatsächliche Punktanzahl
        actual: usize,
    },

    /// Unbekannter Kurventyp-Diskriminator.
    #[error("Unbekannter Spline-Typ: {0}")]
    UnrecognizedVariant(String),

    /// Editor-Punkt- oder Handle-Index außerhalb von `0..len`.
    #[error("Index {index} außerhalb des Bereichs (Länge {len})")]
    IndexOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Anzahl gültiger Einträge
        len: usize,
    },

    /// Toleranz bzw. Schrittweite ist nicht endlich oder nicht positiv.
    #[error("Ungültige Toleranz: {0}")]
    InvalidTolerance(f32),

    /// Serialisierte Kurvendaten passen nicht zum Schema.
    #[error("Ungültige Kurvendaten: {0}")]
    InvalidData(String),
}

impl SplineError {
    /// Prüft einen Index gegen `0..len`.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), SplineError> {
        if index < len {
            Ok(())
        } else {
            Err(SplineError::IndexOutOfRange { index, len })
        }
    }

    /// Prüft eine Chord- bzw. Schrittweiten-Toleranz (endlich, > 0).
    pub(crate) fn check_tolerance(tolerance: f32) -> Result<(), SplineError> {
        if tolerance.is_finite() && tolerance > 0.0 {
            Ok(())
        } else {
            Err(SplineError::InvalidTolerance(tolerance))
        }
    }
}
