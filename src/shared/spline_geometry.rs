//! Reine Geometrie-Funktionen für stückweise kubische Kurven.
//!
//! Layer-neutral: Auswertung über charakteristische Matrix + Kontrollsegmente
//! und adaptives Polylinien-Rendering mit garantierter maximaler Sehnenlänge.
//! Kennt weder Kurvenfamilien noch Editor-Daten.

use crate::core::CharacteristicMatrix;
use crate::error::SplineError;
use glam::Vec2;

/// Toleranz, um die `t` über den Definitionsbereich `[0, Segmentanzahl]` hinausragen darf.
pub const DOMAIN_EPSILON: f32 = 1e-4;

/// Ein Kontrollsegment: genau `degree + 1` Punkte für einen Kurvenabschnitt.
pub type ControlSegment = Vec<Vec2>;

/// Ein gerenderter Kurvenpunkt mit seinem globalen Parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSample {
    /// Globaler Kurvenparameter in `[0, Segmentanzahl]`
    pub t: f32,
    /// Position auf der Kurve
    pub position: Vec2,
}

/// Prüft, dass jedes Segment genau `degree + 1` Punkte hat.
pub fn check_segment_shapes(
    matrix: &CharacteristicMatrix,
    segments: &[ControlSegment],
) -> Result<(), SplineError> {
    let expected = matrix.degree() + 1;
    match segments
        .iter()
        .enumerate()
        .find(|(_, segment)| segment.len() != expected)
    {
        Some((index, segment)) => Err(SplineError::SegmentShape {
            index,
            expected,
            actual: segment.len(),
        }),
        None => Ok(()),
    }
}

/// Wählt das Segment für `t` und liefert `(knot_index, u)`.
///
/// `knot_index = clamp(ceil(t - 1), 0, n - 1)`: ein ganzzahliger Knoten gehört
/// zum dort endenden Segment, `u = t - knot_index`. Nur für `segment_count >= 1`.
fn locate(t: f32, segment_count: usize) -> (usize, f32) {
    // Clamp fängt Fließkomma-Fehler an den Rändern ab
    let knot_index = ((t - 1.0).ceil().max(0.0) as usize).min(segment_count - 1);
    (knot_index, t - knot_index as f32)
}

/// Wertet ein einzelnes Segment am lokalen Parameter `u` aus.
///
/// Erwartet ein bereits geprüftes Segment (siehe [`check_segment_shapes`]).
pub fn evaluate_segment(matrix: &CharacteristicMatrix, segment: &[Vec2], u: f32) -> Vec2 {
    let weights = matrix.blend(u).to_array();
    segment
        .iter()
        .zip(weights)
        .fold(Vec2::ZERO, |acc, (&p, w)| acc + p * w)
}

/// Wertet die Kurve am globalen Parameter `t ∈ [0, segments.len()]` aus.
///
/// Außerhalb des Bereichs (± [`DOMAIN_EPSILON`]) wird nicht extrapoliert,
/// sondern [`SplineError::Domain`] geliefert; Segmente mit falscher Punktanzahl
/// ergeben [`SplineError::SegmentShape`].
pub fn evaluate(
    matrix: &CharacteristicMatrix,
    segments: &[ControlSegment],
    t: f32,
) -> Result<Vec2, SplineError> {
    let max = segments.len() as f32;
    let in_range = t >= -DOMAIN_EPSILON && t <= max + DOMAIN_EPSILON;
    if segments.is_empty() || !in_range {
        return Err(SplineError::Domain {
            value: t,
            min: 0.0,
            max,
        });
    }

    check_segment_shapes(matrix, segments)?;

    let (knot_index, u) = locate(t, segments.len());
    Ok(evaluate_segment(matrix, &segments[knot_index], u))
}

/// Rendert die Kurve adaptiv als Polylinie.
///
/// Kein Paar aufeinanderfolgender Punkte ist weiter als `max_chord_length`
/// voneinander entfernt. Startwerte: ein Sample je Kontrollpunkt (gleichmäßig in
/// `t`), danach wird jede zu lange Sehne am Parameter-Mittelpunkt halbiert.
///
/// Das Ergebnis ist ein lazy Iterator; jeder Aufruf startet eine frische Berechnung.
pub fn render<'a>(
    matrix: &CharacteristicMatrix,
    segments: &'a [ControlSegment],
    max_chord_length: f32,
) -> Result<AdaptiveSamples<'a>, SplineError> {
    SplineError::check_tolerance(max_chord_length)?;
    check_segment_shapes(matrix, segments)?;
    Ok(AdaptiveSamples::new(*matrix, segments, max_chord_length))
}

/// Lazy Iterator über adaptiv verfeinerte Kurven-Samples (siehe [`render`]).
///
/// Statt Punkte in eine Liste einzufügen, liegen noch nicht ausgegebene rechte
/// Intervall-Enden auf einem Stack. Die Ausgabereihenfolge entspricht exakt dem
/// „Mittelpunkt einfügen und dieselbe Stelle erneut prüfen“-Verfahren.
#[derive(Debug, Clone)]
pub struct AdaptiveSamples<'a> {
    matrix: CharacteristicMatrix,
    segments: &'a [ControlSegment],
    max_chord_length: f32,
    /// Anzahl der Start-Samples (= Summe aller Kontrollpunkte)
    seed_count: usize,
    /// Index des nächsten noch nicht erzeugten Start-Samples
    next_seed: usize,
    /// Nächstes auszugebendes Sample
    current: Option<RenderSample>,
    /// Bereits erzeugte, noch nicht ausgegebene Samples (oben = als nächstes)
    pending: Vec<RenderSample>,
}

impl<'a> AdaptiveSamples<'a> {
    fn new(matrix: CharacteristicMatrix, segments: &'a [ControlSegment], max_chord_length: f32) -> Self {
        let seed_count = segments.iter().map(Vec::len).sum();
        let mut samples = Self {
            matrix,
            segments,
            max_chord_length,
            seed_count,
            next_seed: 0,
            current: None,
            pending: Vec::new(),
        };
        samples.current = samples.take_seed();
        samples
    }

    /// Parameterwert des `i`-ten Start-Samples.
    pub fn seed_t(&self, i: usize) -> f32 {
        if self.seed_count < 2 {
            return 0.0;
        }
        self.segments.len() as f32 * i as f32 / (self.seed_count - 1) as f32
    }

    fn sample(&self, t: f32) -> RenderSample {
        let t = t.clamp(0.0, self.segments.len() as f32);
        let (knot_index, u) = locate(t, self.segments.len());
        RenderSample {
            t,
            position: evaluate_segment(&self.matrix, &self.segments[knot_index], u),
        }
    }

    fn take_seed(&mut self) -> Option<RenderSample> {
        if self.segments.is_empty() || self.next_seed >= self.seed_count {
            return None;
        }
        let t = self.seed_t(self.next_seed);
        self.next_seed += 1;
        Some(self.sample(t))
    }
}

impl Iterator for AdaptiveSamples<'_> {
    type Item = RenderSample;

    fn next(&mut self) -> Option<RenderSample> {
        let current = self.current.take()?;

        let following = match self.pending.pop() {
            Some(sample) => Some(sample),
            None => self.take_seed(),
        };

        if let Some(mut right) = following {
            while current.position.distance(right.position) > self.max_chord_length {
                let mid_t = 0.5 * (current.t + right.t);
                // Kein darstellbarer Mittelpunkt mehr (f32-Auflösung erschöpft)
                if mid_t <= current.t || mid_t >= right.t {
                    break;
                }
                self.pending.push(right);
                right = self.sample(mid_t);
            }
            self.current = Some(right);
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = usize::from(self.current.is_some())
            + self.pending.len()
            + (self.seed_count - self.next_seed.min(self.seed_count));
        (lower, None)
    }
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
