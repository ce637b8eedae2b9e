//! Transienter Controller über einem unveränderlichen Kurven-Record.
//!
//! Je Datenversion wird ein neuer Controller gebaut; er selbst wird nie
//! verändert. Einziger abgeleiteter Zustand ist die Arc-Length-Tabelle.

use super::{ArcLengthTable, CurveVariant};
use crate::core::{CharacteristicMatrix, CurveKind};
use crate::error::SplineError;
use crate::shared::options::SplineOptions;
use crate::shared::spline_geometry::{self, AdaptiveSamples, ControlSegment, DOMAIN_EPSILON};
use glam::Vec2;
use std::sync::Arc;

/// Distanz-Marker auf der Scrub-Timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMarker {
    /// Bogenlänge ab Kurvenanfang
    pub distance: f32,
    /// Zugehöriger Kurvenparameter
    pub t: f32,
    /// Position auf der Kurve
    pub position: Vec2,
}

/// Controller für eine Kurve: Abfragen, Rendering und funktionale Bearbeitung.
#[derive(Debug, Clone)]
pub struct EditorSpline<'a, T> {
    data: &'a T,
    matrix: CharacteristicMatrix,
    segments: Vec<ControlSegment>,
    table: Arc<ArcLengthTable>,
}

impl<'a, T: CurveVariant> EditorSpline<'a, T> {
    /// Baut den Controller mit Standard-Optionen.
    pub fn new(data: &'a T) -> Result<Self, SplineError> {
        Self::with_options(data, &SplineOptions::default())
    }

    /// Baut den Controller und rendert die Arc-Length-Tabelle mit `options.arc_length_tolerance`.
    pub fn with_options(data: &'a T, options: &SplineOptions) -> Result<Self, SplineError> {
        options.validate()?;
        let table = ArcLengthTable::build(data, options.arc_length_tolerance)?;
        Ok(Self::with_table(data, Arc::new(table)))
    }

    /// Baut den Controller über einer bereits berechneten Tabelle.
    ///
    /// Der Aufrufer garantiert, dass `table` zu genau diesen Daten gehört
    /// (siehe [`super::ArcLengthCache`]).
    pub fn with_table(data: &'a T, table: Arc<ArcLengthTable>) -> Self {
        Self {
            data,
            matrix: data.characteristic_matrix(),
            segments: data.control_segments(None),
            table,
        }
    }

    /// Zugrunde liegender Daten-Record.
    pub fn data(&self) -> &'a T {
        self.data
    }

    /// Geteilte Arc-Length-Tabelle.
    pub fn table(&self) -> &Arc<ArcLengthTable> {
        &self.table
    }

    pub fn kind(&self) -> CurveKind {
        self.data.kind()
    }

    pub fn is_interpolated(&self) -> bool {
        self.data.is_interpolated()
    }

    pub fn has_editor_point_handles(&self) -> bool {
        self.data.has_editor_point_handles()
    }

    pub fn characteristic_matrix(&self) -> CharacteristicMatrix {
        self.matrix
    }

    /// Kontrollsegmente, optional mit Live-Vorschau-Punkt.
    pub fn control_segments(&self, preview: Option<Vec2>) -> Vec<ControlSegment> {
        match preview {
            Some(_) => self.data.control_segments(preview),
            None => self.segments.clone(),
        }
    }

    /// Position am Parameter `t`; `None` wenn die Kurve keine Segmente hat.
    pub fn evaluate(&self, t: f32) -> Result<Option<Vec2>, SplineError> {
        if self.segments.is_empty() {
            return Ok(None);
        }
        spline_geometry::evaluate(&self.matrix, &self.segments, t).map(Some)
    }

    /// Lazy adaptive Samples (Parameter + Position) mit maximaler Sehnenlänge.
    pub fn samples(&self, max_chord_length: f32) -> Result<AdaptiveSamples<'_>, SplineError> {
        spline_geometry::render(&self.matrix, &self.segments, max_chord_length)
    }

    /// Polylinie der gespeicherten Kurve.
    pub fn render(&self, max_chord_length: f32) -> Result<Vec<Vec2>, SplineError> {
        Ok(self
            .samples(max_chord_length)?
            .map(|sample| sample.position)
            .collect())
    }

    /// Polylinie inklusive Live-Vorschau-Punkt; die Tabelle bleibt unberührt.
    pub fn render_preview(
        &self,
        preview: Vec2,
        max_chord_length: f32,
    ) -> Result<Vec<Vec2>, SplineError> {
        let segments = self.data.control_segments(Some(preview));
        Ok(
            spline_geometry::render(&self.matrix, &segments, max_chord_length)?
                .map(|sample| sample.position)
                .collect(),
        )
    }

    /// Gesamtlänge der Kurve.
    pub fn length(&self) -> f32 {
        self.table.length()
    }

    /// Bogenlänge bis zum Parameter `t`.
    pub fn length_at(&self, t: f32) -> Result<f32, SplineError> {
        self.table.length_at(t)
    }

    /// Parameter zur Bogenlänge `distance`.
    pub fn t_at(&self, distance: f32) -> Result<f32, SplineError> {
        self.table.t_at(distance)
    }

    /// Position nach `distance` Metern entlang der Kurve (Scrub-Cursor).
    pub fn position_at_distance(&self, distance: f32) -> Result<Option<Vec2>, SplineError> {
        let t = self.t_at(distance)?;
        self.evaluate(t)
    }

    /// Timeline-Marker bei `0, step, 2·step, …` bis zur Gesamtlänge.
    pub fn distance_markers(&self, step: f32) -> Result<Vec<DistanceMarker>, SplineError> {
        SplineError::check_tolerance(step)?;
        if self.table.is_empty() {
            return Ok(Vec::new());
        }

        // Länge knapp unter einem Vielfachen von `step` behält den letzten Marker
        let count = ((self.length() + DOMAIN_EPSILON) / step).floor() as usize;
        let mut markers = Vec::with_capacity(count + 1);
        for i in 0..=count {
            let distance = i as f32 * step;
            let t = self.t_at(distance)?;
            if let Some(position) = self.evaluate(t)? {
                markers.push(DistanceMarker {
                    distance,
                    t,
                    position,
                });
            }
        }
        Ok(markers)
    }

    // ── Bearbeitung (liefert neue Records) ───────────────────────────

    pub fn editor_points(&self) -> Vec<Vec2> {
        self.data.editor_points()
    }

    pub fn editor_point_handles(&self, index: usize) -> Result<Vec<Vec2>, SplineError> {
        self.data.editor_point_handles(index)
    }

    pub fn add_editor_point(&self, index: usize, position: Vec2) -> Result<T, SplineError> {
        self.data.add_editor_point(index, position)
    }

    pub fn update_editor_point(&self, index: usize, position: Vec2) -> Result<T, SplineError> {
        self.data.update_editor_point(index, position)
    }

    pub fn remove_editor_point(&self, index: usize) -> Result<T, SplineError> {
        self.data.remove_editor_point(index)
    }

    pub fn update_editor_point_handle(
        &self,
        anchor_index: usize,
        handle_index: usize,
        position: Vec2,
    ) -> Result<T, SplineError> {
        self.data
            .update_editor_point_handle(anchor_index, handle_index, position)
    }
}
