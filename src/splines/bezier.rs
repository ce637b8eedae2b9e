//! Stückweise kubische Bézier-Kurve mit einem gemeinsamen Tangenten-Offset je Anker.
//!
//! Segment `i` ist `[a(i-1), a(i-1) + d(i-1), a(i) − d(i), a(i)]`; jedes Segment
//! läuft exakt durch beide Anker.

use super::CurveVariant;
use crate::core::{BezierData, BezierPoint, CharacteristicMatrix, CurveKind};
use crate::error::SplineError;
use crate::shared::spline_geometry::ControlSegment;
use glam::Vec2;

impl BezierData {
    /// Einheitsvektor vom letzten Handle (Anker + Offset) zu `position`.
    ///
    /// Gibt `Vec2::ZERO` für leere Kurven oder zusammenfallende Punkte.
    pub fn direction_to_last(&self, position: Vec2) -> Vec2 {
        match self.points.last() {
            Some(last) => (position - (last.anchor + last.direction)).normalize_or_zero(),
            None => Vec2::ZERO,
        }
    }
}

impl CurveVariant for BezierData {
    fn kind(&self) -> CurveKind {
        CurveKind::Bezier
    }

    fn characteristic_matrix(&self) -> CharacteristicMatrix {
        CharacteristicMatrix::BEZIER
    }

    fn control_segments(&self, preview: Option<Vec2>) -> Vec<ControlSegment> {
        let mut points = self.points.clone();
        if let Some(preview) = preview {
            // Kurve verlässt den letzten Anker weich in Richtung Cursor
            points.push(BezierPoint::new(preview, self.direction_to_last(preview)));
        }

        points
            .windows(2)
            .map(|pair| {
                let (prev, next) = (pair[0], pair[1]);
                vec![
                    prev.anchor,
                    prev.anchor + prev.direction,
                    next.anchor - next.direction,
                    next.anchor,
                ]
            })
            .collect()
    }

    fn editor_points(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.anchor).collect()
    }

    fn add_editor_point(&self, index: usize, position: Vec2) -> Result<Self, SplineError> {
        SplineError::check_index(index, self.points.len() + 1)?;
        let direction = self.direction_to_last(position);
        let mut points = self.points.clone();
        points.insert(index, BezierPoint::new(position, direction));
        Ok(Self { points })
    }

    /// Verschiebt nur den Anker; der Tangenten-Offset bleibt erhalten.
    fn update_editor_point(&self, index: usize, position: Vec2) -> Result<Self, SplineError> {
        SplineError::check_index(index, self.points.len())?;
        let mut points = self.points.clone();
        points[index].anchor = position;
        Ok(Self { points })
    }

    fn remove_editor_point(&self, index: usize) -> Result<Self, SplineError> {
        SplineError::check_index(index, self.points.len())?;
        let mut points = self.points.clone();
        points.remove(index);
        Ok(Self { points })
    }

    /// Start: `[a + d]`, Ende: `[a − d]`, innen: `[a − d, a + d]`.
    fn editor_point_handles(&self, index: usize) -> Result<Vec<Vec2>, SplineError> {
        SplineError::check_index(index, self.points.len())?;
        let BezierPoint { anchor, direction } = self.points[index];

        let handles = if index == 0 {
            vec![anchor + direction]
        } else if index == self.points.len() - 1 {
            vec![anchor - direction]
        } else {
            vec![anchor - direction, anchor + direction]
        };
        Ok(handles)
    }

    /// Berechnet den Offset aus der neuen Handle-Position.
    ///
    /// Das eingehende Handle (`handle_index == 0` an jedem Anker außer dem ersten)
    /// liegt bei `a − d`, daher wird der Offset dort negiert gespeichert.
    fn update_editor_point_handle(
        &self,
        anchor_index: usize,
        handle_index: usize,
        position: Vec2,
    ) -> Result<Self, SplineError> {
        let handle_count = self.editor_point_handles(anchor_index)?.len();
        SplineError::check_index(handle_index, handle_count)?;

        let mut points = self.points.clone();
        let point = &mut points[anchor_index];
        let offset = position - point.anchor;
        point.direction = if handle_index == 0 && anchor_index != 0 {
            -offset
        } else {
            offset
        };
        Ok(Self { points })
    }

    fn is_interpolated(&self) -> bool {
        true
    }

    fn has_editor_point_handles(&self) -> bool {
        true
    }
}
