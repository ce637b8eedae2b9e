//! Kurvenfamilien und Editor-Controller.
//!
//! Jede Familie implementiert [`CurveVariant`] direkt auf ihrem Daten-Record.
//! [`CurveData`] implementiert den Trait per erschöpfendem `match` und ist damit
//! die Factory: neue Familien bekommen eine neue Enum-Variante und einen Arm.
//!
//! Aufgeteilt in:
//! - `b_spline`      — geklemmte uniforme kubische B-Spline
//! - `bezier`        — stückweise kubische Bézier-Kurve mit Handles
//! - `arc_length`    — Tabelle Parameter ↔ Bogenlänge
//! - `editor_spline` — transienter Controller über einem Daten-Record
//! - `cache`         — explizit invalidierter Cache für Arc-Length-Tabellen

mod arc_length;
mod b_spline;
mod bezier;
mod cache;
mod editor_spline;

pub use arc_length::{ArcLengthEntry, ArcLengthTable};
pub use cache::ArcLengthCache;
pub use editor_spline::{DistanceMarker, EditorSpline};

use crate::core::{CharacteristicMatrix, CurveData, CurveKind};
use crate::error::SplineError;
use crate::shared::spline_geometry::ControlSegment;
use glam::Vec2;

/// Fähigkeiten einer Kurvenfamilie über ihrem eigenen Daten-Record.
///
/// Alle Bearbeitungen sind rein funktional: sie liefern einen neuen Record
/// und lassen `self` unverändert.
pub trait CurveVariant: Sized {
    /// Diskriminator der Familie.
    fn kind(&self) -> CurveKind;

    /// Konstante Basis-Matrix der Familie.
    fn characteristic_matrix(&self) -> CharacteristicMatrix;

    /// Geordnete Kontrollsegmente für den Evaluator.
    ///
    /// `preview` wird als virtueller letzter Anker angehängt (Live-Vorschau
    /// beim Zeichnen), ohne die gespeicherten Daten zu verändern.
    fn control_segments(&self, preview: Option<Vec2>) -> Vec<ControlSegment>;

    /// Sichtbare Anker-Positionen.
    fn editor_points(&self) -> Vec<Vec2>;

    /// Fügt einen Anker bei `index` ein (`0..=len`).
    fn add_editor_point(&self, index: usize, position: Vec2) -> Result<Self, SplineError>;

    /// Verschiebt den Anker `index` (`0..len`).
    fn update_editor_point(&self, index: usize, position: Vec2) -> Result<Self, SplineError>;

    /// Entfernt den Anker `index` (`0..len`).
    fn remove_editor_point(&self, index: usize) -> Result<Self, SplineError>;

    /// Sekundäre Handles des Ankers `index` in absoluten Koordinaten.
    fn editor_point_handles(&self, index: usize) -> Result<Vec<Vec2>, SplineError>;

    /// Setzt Handle `handle_index` des Ankers `anchor_index` auf `position`.
    fn update_editor_point_handle(
        &self,
        anchor_index: usize,
        handle_index: usize,
        position: Vec2,
    ) -> Result<Self, SplineError>;

    /// `true` wenn die Kurve exakt durch alle Anker läuft.
    fn is_interpolated(&self) -> bool;

    /// `true` wenn Anker Tangenten-Handles besitzen.
    fn has_editor_point_handles(&self) -> bool;
}

impl CurveVariant for CurveData {
    fn kind(&self) -> CurveKind {
        CurveData::kind(self)
    }

    fn characteristic_matrix(&self) -> CharacteristicMatrix {
        match self {
            CurveData::BSpline(data) => data.characteristic_matrix(),
            CurveData::Bezier(data) => data.characteristic_matrix(),
        }
    }

    fn control_segments(&self, preview: Option<Vec2>) -> Vec<ControlSegment> {
        match self {
            CurveData::BSpline(data) => data.control_segments(preview),
            CurveData::Bezier(data) => data.control_segments(preview),
        }
    }

    fn editor_points(&self) -> Vec<Vec2> {
        match self {
            CurveData::BSpline(data) => data.editor_points(),
            CurveData::Bezier(data) => data.editor_points(),
        }
    }

    fn add_editor_point(&self, index: usize, position: Vec2) -> Result<Self, SplineError> {
        match self {
            CurveData::BSpline(data) => data.add_editor_point(index, position).map(Self::from),
            CurveData::Bezier(data) => data.add_editor_point(index, position).map(Self::from),
        }
    }

    fn update_editor_point(&self, index: usize, position: Vec2) -> Result<Self, SplineError> {
        match self {
            CurveData::BSpline(data) => data.update_editor_point(index, position).map(Self::from),
            CurveData::Bezier(data) => data.update_editor_point(index, position).map(Self::from),
        }
    }

    fn remove_editor_point(&self, index: usize) -> Result<Self, SplineError> {
        match self {
            CurveData::BSpline(data) => data.remove_editor_point(index).map(Self::from),
            CurveData::Bezier(data) => data.remove_editor_point(index).map(Self::from),
        }
    }

    fn editor_point_handles(&self, index: usize) -> Result<Vec<Vec2>, SplineError> {
        match self {
            CurveData::BSpline(data) => data.editor_point_handles(index),
            CurveData::Bezier(data) => data.editor_point_handles(index),
        }
    }

    fn update_editor_point_handle(
        &self,
        anchor_index: usize,
        handle_index: usize,
        position: Vec2,
    ) -> Result<Self, SplineError> {
        match self {
            CurveData::BSpline(data) => data
                .update_editor_point_handle(anchor_index, handle_index, position)
                .map(Self::from),
            CurveData::Bezier(data) => data
                .update_editor_point_handle(anchor_index, handle_index, position)
                .map(Self::from),
        }
    }

    fn is_interpolated(&self) -> bool {
        match self {
            CurveData::BSpline(data) => data.is_interpolated(),
            CurveData::Bezier(data) => data.is_interpolated(),
        }
    }

    fn has_editor_point_handles(&self) -> bool {
        match self {
            CurveData::BSpline(data) => data.has_editor_point_handles(),
            CurveData::Bezier(data) => data.has_editor_point_handles(),
        }
    }
}

/// Erstellt den Controller für einen Kurven-Record (Standard-Optionen).
pub fn spline_controller(data: &CurveData) -> Result<EditorSpline<'_, CurveData>, SplineError> {
    EditorSpline::new(data)
}
