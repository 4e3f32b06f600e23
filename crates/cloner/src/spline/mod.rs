//! Curve evaluation for the spline distribution mode.
//!
//! A [`Spline`] interpolates an ordered set of control points as a piecewise
//! linear chain, a Catmull-Rom (cardinal) spline, or a composite Bezier, and
//! samples both position and tangent at a normalized parameter.
//! [`ArcLengthTable`] remaps that parameter so equal steps travel equal
//! distance along the curve.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::safe_normalize;

pub mod arc_length;

pub use arc_length::ArcLengthTable;

/// Interpolation scheme through the control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SplineType {
    Linear,
    #[default]
    CatmullRom,
    Bezier,
}

/// An evaluated curve over `>= 2` control points.
///
/// A curve with fewer than two usable points is degenerate; callers check
/// [`Spline::is_degenerate`] and produce zero instances instead of sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    points: Vec<Vec3>,
    kind: SplineType,
    tension: f32,
}

impl Spline {
    /// Build a spline. Non-finite control points are dropped; `tension`
    /// (Catmull-Rom only) is clamped to `[0, 1]`.
    pub fn new(points: Vec<Vec3>, kind: SplineType, tension: f32) -> Self {
        let points: Vec<Vec3> = points.into_iter().filter(|p| p.is_finite()).collect();
        let tension = if tension.is_finite() {
            tension.clamp(0.0, 1.0)
        } else {
            0.5
        };
        Self {
            points,
            kind,
            tension,
        }
    }

    /// Build from `mint` vectors, for callers on other math libraries.
    pub fn from_mint(points: Vec<mint::Vector3<f32>>, kind: SplineType, tension: f32) -> Self {
        Self::new(points.into_iter().map(Vec3::from).collect(), kind, tension)
    }

    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Sample position and unit tangent at `t` in `[0, 1]` (clamped).
    ///
    /// Degenerate curves return the single point (or origin) with a +X
    /// tangent rather than panicking.
    pub fn sample(&self, t: f32) -> (Vec3, Vec3) {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self.points.len() {
            0 => (Vec3::ZERO, Vec3::X),
            1 => (self.points[0], Vec3::X),
            _ => match self.kind {
                SplineType::Linear => self.sample_linear(t),
                SplineType::CatmullRom => self.sample_catmullrom(t),
                SplineType::Bezier => self.sample_bezier(t),
            },
        }
    }

    fn sample_linear(&self, t: f32) -> (Vec3, Vec3) {
        let segments = self.points.len() - 1;
        let (i, local) = segment_for(t, segments);
        let a = self.points[i];
        let b = self.points[i + 1];
        (a + (b - a) * local, safe_normalize(b - a))
    }

    fn sample_catmullrom(&self, t: f32) -> (Vec3, Vec3) {
        let n = self.points.len();
        let segments = n - 1;
        let (i, u) = segment_for(t, segments);

        // End segments duplicate the nearest control point as the missing
        // neighbor, so the curve never extrapolates past its endpoints.
        let p0 = self.points[i.saturating_sub(1)];
        let p1 = self.points[i];
        let p2 = self.points[i + 1];
        let p3 = self.points[(i + 2).min(n - 1)];

        let m1 = (p2 - p0) * self.tension;
        let m2 = (p3 - p1) * self.tension;

        let u2 = u * u;
        let u3 = u2 * u;

        let point = p1 * (2.0 * u3 - 3.0 * u2 + 1.0)
            + m1 * (u3 - 2.0 * u2 + u)
            + p2 * (-2.0 * u3 + 3.0 * u2)
            + m2 * (u3 - u2);

        let derivative = p1 * (6.0 * u2 - 6.0 * u)
            + m1 * (3.0 * u2 - 4.0 * u + 1.0)
            + p2 * (-6.0 * u2 + 6.0 * u)
            + m2 * (3.0 * u2 - 2.0 * u);

        let tangent = if derivative.length_squared() > f32::EPSILON {
            safe_normalize(derivative)
        } else {
            safe_normalize(p2 - p1)
        };

        (point, tangent)
    }

    fn sample_bezier(&self, t: f32) -> (Vec3, Vec3) {
        let segments = bezier_segments(&self.points);
        let (i, u) = segment_for(t, segments.len());
        segments[i].sample(u)
    }
}

/// Map global `t` to `(segment index, local parameter)`.
fn segment_for(t: f32, segments: usize) -> (usize, f32) {
    debug_assert!(segments > 0);
    let s = t * segments as f32;
    let i = (s.floor() as usize).min(segments - 1);
    (i, s - i as f32)
}

/// One piece of a composite Bezier.
#[derive(Debug, Clone, Copy)]
enum BezierSegment {
    Cubic([Vec3; 4]),
    Quadratic([Vec3; 3]),
    Line([Vec3; 2]),
}

impl BezierSegment {
    fn sample(&self, u: f32) -> (Vec3, Vec3) {
        match *self {
            BezierSegment::Cubic([p0, p1, p2, p3]) => {
                let v = 1.0 - u;
                let point = p0 * (v * v * v)
                    + p1 * (3.0 * v * v * u)
                    + p2 * (3.0 * v * u * u)
                    + p3 * (u * u * u);
                let derivative =
                    (p1 - p0) * (3.0 * v * v) + (p2 - p1) * (6.0 * v * u) + (p3 - p2) * (3.0 * u * u);
                let tangent = if derivative.length_squared() > f32::EPSILON {
                    safe_normalize(derivative)
                } else {
                    safe_normalize(p3 - p0)
                };
                (point, tangent)
            }
            BezierSegment::Quadratic([p0, p1, p2]) => {
                let v = 1.0 - u;
                let point = p0 * (v * v) + p1 * (2.0 * v * u) + p2 * (u * u);
                let derivative = (p1 - p0) * (2.0 * v) + (p2 - p1) * (2.0 * u);
                let tangent = if derivative.length_squared() > f32::EPSILON {
                    safe_normalize(derivative)
                } else {
                    safe_normalize(p2 - p0)
                };
                (point, tangent)
            }
            BezierSegment::Line([p0, p1]) => (p0 + (p1 - p0) * u, safe_normalize(p1 - p0)),
        }
    }
}

/// Split control points into composite Bezier segments with stride 3.
///
/// Trailing-point policy: after the last full cubic, two remaining points
/// (anchor plus one) form a line, three form a quadratic. A bare trailing
/// anchor simply ends the curve.
fn bezier_segments(points: &[Vec3]) -> Vec<BezierSegment> {
    let mut segments = Vec::new();
    let mut i = 0;
    while i + 3 < points.len() {
        segments.push(BezierSegment::Cubic([
            points[i],
            points[i + 1],
            points[i + 2],
            points[i + 3],
        ]));
        i += 3;
    }
    match points.len() - i {
        3 => segments.push(BezierSegment::Quadratic([
            points[i],
            points[i + 1],
            points[i + 2],
        ])),
        2 => segments.push(BezierSegment::Line([points[i], points[i + 1]])),
        _ => {}
    }
    segments
}
