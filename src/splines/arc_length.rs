//! Arc-Length-Parametrisierung: Tabelle Kurvenparameter ↔ Bogenlänge.
//!
//! Wird einmal je Controller mit feiner Sehnen-Toleranz gerendert und erlaubt
//! danach distanzbasiertes Scrubbing entlang der Kurve.

use super::CurveVariant;
use crate::error::SplineError;
use crate::shared::spline_geometry::{render, DOMAIN_EPSILON};

/// Ein Tabelleneintrag: Parameter `t` und kumulierte Bogenlänge bis dorthin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLengthEntry {
    /// Globaler Kurvenparameter
    pub t: f32,
    /// Kumulierte Sehnenlänge ab Kurvenanfang
    pub distance: f32,
}

/// Monoton steigende Tabelle `(t, Distanz)`; erster Eintrag ist immer `(0, 0)`.
///
/// Leer für Kurven mit weniger als zwei Ankern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArcLengthTable {
    entries: Vec<ArcLengthEntry>,
    tolerance: f32,
}

impl ArcLengthTable {
    /// Rendert die Kurve mit `tolerance` und kumuliert die Sehnenlängen.
    pub fn build<V: CurveVariant>(variant: &V, tolerance: f32) -> Result<Self, SplineError> {
        let matrix = variant.characteristic_matrix();
        let segments = variant.control_segments(None);

        let mut entries = Vec::new();
        let mut previous = None;
        let mut cumulative = 0.0f32;
        for sample in render(&matrix, &segments, tolerance)? {
            if let Some(prev) = previous {
                cumulative += sample.position.distance(prev);
            }
            entries.push(ArcLengthEntry {
                t: sample.t,
                distance: cumulative,
            });
            previous = Some(sample.position);
        }

        Ok(Self { entries, tolerance })
    }

    /// Alle Einträge in steigender Reihenfolge.
    pub fn entries(&self) -> &[ArcLengthEntry] {
        &self.entries
    }

    /// Sehnen-Toleranz, mit der die Tabelle gebaut wurde.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// `true` wenn die Kurve keine Geometrie hat.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gesamtlänge der Kurve (0 für leere Tabellen).
    pub fn length(&self) -> f32 {
        self.entries.last().map_or(0.0, |e| e.distance)
    }

    /// Bogenlänge vom Kurvenanfang bis zum Parameter `t`.
    ///
    /// Linear interpoliert zwischen den umgebenden Einträgen.
    pub fn length_at(&self, t: f32) -> Result<f32, SplineError> {
        let (first, last) = self.bounds(t, |e| e.t)?;
        let t = t.clamp(first.t, last.t);

        let idx = self.entries.partition_point(|e| e.t < t);
        if idx == 0 {
            return Ok(first.distance);
        }
        let after = self.entries[idx];
        if after.t == t {
            return Ok(after.distance);
        }
        let before = self.entries[idx - 1];

        let frac = (t - before.t) / (after.t - before.t);
        Ok(before.distance + frac * (after.distance - before.distance))
    }

    /// Kurvenparameter zur Bogenlänge `distance` (Umkehrung von [`Self::length_at`]).
    pub fn t_at(&self, distance: f32) -> Result<f32, SplineError> {
        if distance == 0.0 {
            return Ok(0.0);
        }
        let (first, last) = self.bounds(distance, |e| e.distance)?;
        let distance = distance.clamp(first.distance, last.distance);

        let idx = self.entries.partition_point(|e| e.distance < distance);
        if idx == 0 {
            return Ok(first.t);
        }
        let after = self.entries[idx];
        if after.distance == distance {
            return Ok(after.t);
        }
        let before = self.entries[idx - 1];

        let span = after.distance - before.distance;
        let frac = if span > f32::EPSILON {
            (distance - before.distance) / span
        } else {
            0.0
        };
        Ok(before.t + frac * (after.t - before.t))
    }

    /// Erster/letzter Eintrag, sofern `value` (± Toleranz) im Bereich von `key` liegt.
    fn bounds(
        &self,
        value: f32,
        key: impl Fn(&ArcLengthEntry) -> f32,
    ) -> Result<(ArcLengthEntry, ArcLengthEntry), SplineError> {
        let (Some(&first), Some(&last)) = (self.entries.first(), self.entries.last()) else {
            return Err(SplineError::Domain {
                value,
                min: 0.0,
                max: 0.0,
            });
        };

        let (min, max) = (key(&first), key(&last));
        if value >= min - DOMAIN_EPSILON && value <= max + DOMAIN_EPSILON {
            Ok((first, last))
        } else {
            Err(SplineError::Domain { value, min, max })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BSplineData, BezierData, BezierPoint};
    use approx::assert_abs_diff_eq;
    use glam::Vec2;

    fn straight_bezier(length: f32) -> BezierData {
        // Handles auf der Sehne bei 1/3 und 2/3 → gleichförmige Parametrisierung
        let d = Vec2::new(length / 3.0, 0.0);
        BezierData {
            points: vec![
                BezierPoint::new(Vec2::ZERO, d),
                BezierPoint::new(Vec2::new(length, 0.0), d),
            ],
        }
    }

    #[test]
    fn test_straight_line_length() {
        let table = ArcLengthTable::build(&straight_bezier(10.0), 0.01).unwrap();
        assert_abs_diff_eq!(table.length(), 10.0, epsilon = 1e-3);
        assert_eq!(table.entries()[0], ArcLengthEntry { t: 0.0, distance: 0.0 });
        assert_eq!(table.tolerance(), 0.01);
    }

    #[test]
    fn test_uniform_line_is_linear_in_t() {
        let table = ArcLengthTable::build(&straight_bezier(10.0), 0.01).unwrap();
        assert_abs_diff_eq!(table.length_at(0.5).unwrap(), 5.0, epsilon = 1e-3);
        assert_abs_diff_eq!(table.t_at(2.5).unwrap(), 0.25, epsilon = 1e-3);
        assert_abs_diff_eq!(table.length_at(1.0).unwrap(), table.length(), epsilon = 1e-6);
    }

    #[test]
    fn test_entries_are_monotonic() {
        let curve = BSplineData {
            points: vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 2.0),
                Vec2::new(3.0, -1.0),
                Vec2::new(4.0, 0.0),
            ],
        };
        let table = ArcLengthTable::build(&curve, 0.01).unwrap();
        for pair in table.entries().windows(2) {
            assert!(pair[0].t < pair[1].t);
            assert!(pair[0].distance <= pair[1].distance);
        }
        assert_eq!(table.entries().last().unwrap().t, 5.0);
    }

    #[test]
    fn test_empty_table() {
        let table = ArcLengthTable::build(&BSplineData::default(), 0.01).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.length(), 0.0);
        assert_eq!(table.t_at(0.0), Ok(0.0));
        assert!(matches!(table.length_at(0.0), Err(SplineError::Domain { .. })));
        assert!(matches!(table.t_at(1.0), Err(SplineError::Domain { .. })));
    }

    #[test]
    fn test_out_of_range_queries() {
        let table = ArcLengthTable::build(&straight_bezier(2.0), 0.01).unwrap();
        assert_eq!(
            table.length_at(1.5),
            Err(SplineError::Domain {
                value: 1.5,
                min: 0.0,
                max: 1.0
            })
        );
        assert!(table.length_at(-0.1).is_err());
        assert!(table.t_at(2.5).is_err());
        assert!(table.t_at(-1.0).is_err());
        // Leichte Überschreitung innerhalb der Toleranz wird geklemmt
        assert_abs_diff_eq!(table.t_at(table.length() + 5e-5).unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_width_bracket_returns_lower_t() {
        let table = ArcLengthTable {
            entries: vec![
                ArcLengthEntry { t: 0.0, distance: 0.0 },
                ArcLengthEntry { t: 0.5, distance: 1.0 },
                ArcLengthEntry { t: 1.0, distance: 1.0 },
                ArcLengthEntry { t: 1.5, distance: 2.0 },
            ],
            tolerance: 0.01,
        };
        assert_eq!(table.t_at(1.0), Ok(0.5));
        assert_eq!(table.length_at(0.75), Ok(1.0));
        assert_eq!(table.t_at(1.5), Ok(1.25));
    }

    #[test]
    fn test_invalid_tolerance() {
        assert_eq!(
            ArcLengthTable::build(&straight_bezier(1.0), 0.0),
            Err(SplineError::InvalidTolerance(0.0))
        );
    }
}
