//! Unveränderliche Kurvendaten-Records, wie sie der Editor-State speichert.
//!
//! Jede Bearbeitung erzeugt einen neuen Record; bestehende Werte werden nie
//! an Ort und Stelle verändert.

use crate::error::SplineError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Startrichtung eines frisch gesetzten Bézier-Ankers.
pub const BEZIER_INITIAL_DIRECTION: Vec2 = Vec2::new(0.0, 1.0);

/// Diskriminator der Kurvenfamilie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveKind {
    /// Geklemmte uniforme kubische B-Spline
    #[default]
    #[serde(rename = "b-spline")]
    BSpline,
    /// Stückweise kubische Bézier-Kurve mit Tangenten-Handles
    #[serde(rename = "bezier")]
    Bezier,
}

impl CurveKind {
    /// Alle unterstützten Kurvenfamilien (Reihenfolge = Auswahl im Editor).
    pub const ALL: [CurveKind; 2] = [CurveKind::BSpline, CurveKind::Bezier];

    /// Serialisierter Tag (`kind`-Feld).
    pub fn tag(self) -> &'static str {
        match self {
            CurveKind::BSpline => "b-spline",
            CurveKind::Bezier => "bezier",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CurveKind {
    type Err = SplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| SplineError::UnrecognizedVariant(s.to_string()))
    }
}

/// Anker-Folge einer B-Spline (Reihenfolge = Benutzer-Reihenfolge).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BSplineData {
    /// Anker in Einfügereihenfolge
    pub points: Vec<Vec2>,
}

/// Ein Bézier-Anker mit gemeinsamem Tangenten-Offset.
///
/// `direction` ist am Start der ausgehende, am Ende der eingehende Offset;
/// innere Anker nutzen denselben Offset für beide Seiten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierPoint {
    /// Position des Ankers
    pub anchor: Vec2,
    /// Tangenten-Offset relativ zum Anker (darf Länge 0 haben)
    pub direction: Vec2,
}

impl BezierPoint {
    /// Erstellt einen Anker mit Tangenten-Offset.
    pub fn new(anchor: Vec2, direction: Vec2) -> Self {
        Self { anchor, direction }
    }
}

/// Anker-Folge einer Bézier-Kurve.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BezierData {
    /// Anker mit Tangenten-Offsets in Einfügereihenfolge
    pub points: Vec<BezierPoint>,
}

/// Kurvendaten als Tagged Union, diskriminiert über das Feld `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CurveData {
    /// B-Spline-Record (`kind = "b-spline"`)
    #[serde(rename = "b-spline")]
    BSpline(BSplineData),
    /// Bézier-Record (`kind = "bezier"`)
    #[serde(rename = "bezier")]
    Bezier(BezierData),
}

impl CurveData {
    /// Neuer Record mit genau einem Anker (erster Klick im Zeichenmodus).
    pub fn with_initial_point(kind: CurveKind, point: Vec2) -> Self {
        match kind {
            CurveKind::BSpline => CurveData::BSpline(BSplineData {
                points: vec![point],
            }),
            CurveKind::Bezier => CurveData::Bezier(BezierData {
                points: vec![BezierPoint::new(point, BEZIER_INITIAL_DIRECTION)],
            }),
        }
    }

    /// Diskriminator dieses Records.
    pub fn kind(&self) -> CurveKind {
        match self {
            CurveData::BSpline(_) => CurveKind::BSpline,
            CurveData::Bezier(_) => CurveKind::Bezier,
        }
    }

    /// Anzahl der Anker.
    pub fn anchor_count(&self) -> usize {
        match self {
            CurveData::BSpline(data) => data.points.len(),
            CurveData::Bezier(data) => data.points.len(),
        }
    }

    /// Liest einen Record aus JSON-Text.
    pub fn from_json(json: &str) -> Result<Self, SplineError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| SplineError::InvalidData(e.to_string()))?;
        Self::from_value(value)
    }

    /// Liest einen Record aus einem JSON-Wert.
    ///
    /// Der `kind`-Tag wird vor dem Schema geprüft, damit ein unbekannter Typ als
    /// [`SplineError::UnrecognizedVariant`] und nicht als Schemafehler gemeldet wird.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SplineError> {
        let tag = value
            .get("kind")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| SplineError::InvalidData("Feld `kind` fehlt".to_string()))?;

        if let Err(e) = tag.parse::<CurveKind>() {
            log::warn!("Kurvendaten mit unbekanntem Typ verworfen: {}", tag);
            return Err(e);
        }

        serde_json::from_value(value).map_err(|e| SplineError::InvalidData(e.to_string()))
    }

    /// Serialisiert den Record als JSON-Text.
    pub fn to_json(&self) -> Result<String, SplineError> {
        serde_json::to_string(self).map_err(|e| SplineError::InvalidData(e.to_string()))
    }
}

impl From<BSplineData> for CurveData {
    fn from(data: BSplineData) -> Self {
        CurveData::BSpline(data)
    }
}

impl From<BezierData> for CurveData {
    fn from(data: BezierData) -> Self {
        CurveData::Bezier(data)
    }
}
