//! Geklemmte uniforme kubische B-Spline.
//!
//! Erster und letzter Anker werden je zweimal dupliziert, damit die Kurve exakt
//! dort beginnt und endet. Innere Anker werden nur angenähert, nicht getroffen.

use super::CurveVariant;
use crate::core::{BSplineData, CharacteristicMatrix, CurveKind};
use crate::error::SplineError;
use crate::shared::spline_geometry::ControlSegment;
use glam::Vec2;

impl CurveVariant for BSplineData {
    fn kind(&self) -> CurveKind {
        CurveKind::BSpline
    }

    fn characteristic_matrix(&self) -> CharacteristicMatrix {
        CharacteristicMatrix::B_SPLINE
    }

    fn control_segments(&self, preview: Option<Vec2>) -> Vec<ControlSegment> {
        let mut anchors = self.points.clone();
        anchors.extend(preview);

        let (Some(&first), Some(&last)) = (anchors.first(), anchors.last()) else {
            return Vec::new();
        };
        if anchors.len() < 2 {
            return Vec::new();
        }

        // [p0, p0, p0 … pn, pn, pn]
        let mut clamped = Vec::with_capacity(anchors.len() + 4);
        clamped.extend([first, first]);
        clamped.extend(anchors);
        clamped.extend([last, last]);

        clamped.windows(4).map(<[Vec2]>::to_vec).collect()
    }

    fn editor_points(&self) -> Vec<Vec2> {
        self.points.clone()
    }

    fn add_editor_point(&self, index: usize, position: Vec2) -> Result<Self, SplineError> {
        SplineError::check_index(index, self.points.len() + 1)?;
        let mut points = self.points.clone();
        points.insert(index, position);
        Ok(Self { points })
    }

    fn update_editor_point(&self, index: usize, position: Vec2) -> Result<Self, SplineError> {
        SplineError::check_index(index, self.points.len())?;
        let mut points = self.points.clone();
        points[index] = position;
        Ok(Self { points })
    }

    fn remove_editor_point(&self, index: usize) -> Result<Self, SplineError> {
        SplineError::check_index(index, self.points.len())?;
        let mut points = self.points.clone();
        points.remove(index);
        Ok(Self { points })
    }

    fn editor_point_handles(&self, index: usize) -> Result<Vec<Vec2>, SplineError> {
        SplineError::check_index(index, self.points.len())?;
        Ok(Vec::new())
    }

    /// B-Splines haben keine Handles: der Record bleibt unverändert.
    fn update_editor_point_handle(
        &self,
        anchor_index: usize,
        _handle_index: usize,
        _position: Vec2,
    ) -> Result<Self, SplineError> {
        SplineError::check_index(anchor_index, self.points.len())?;
        Ok(self.clone())
    }

    fn is_interpolated(&self) -> bool {
        false
    }

    fn has_editor_point_handles(&self) -> bool {
        false
    }
}
