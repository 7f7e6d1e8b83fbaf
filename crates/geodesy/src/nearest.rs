use geo::{Coord, MultiPolygon};

use crate::{ellipsoid, sample::{sample_boundary, SampleDensity}, Sector};

/// How a sampled shape was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// Boundary samples of a (multi-)polygon.
    Polygon,
    /// A fixed set of points standing in for a territory.
    Points,
}

/// Candidate points representing one side of a nearest-pair search.
///
/// Polygon boundaries are sampled once at construction, so a shape can be
/// reused against many partners without resampling.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledShape {
    kind: ShapeKind,
    points: Vec<Coord<f64>>,
}

impl SampledShape {
    /// Sample the boundary of `shape` at `density`.
    pub fn polygon(shape: &MultiPolygon<f64>, density: SampleDensity) -> Self {
        Self { kind: ShapeKind::Polygon, points: sample_boundary(shape, density) }
    }

    /// Use `points` as-is.
    pub fn points(points: impl Into<Vec<Coord<f64>>>) -> Self {
        Self { kind: ShapeKind::Points, points: points.into() }
    }

    #[inline] pub fn kind(&self) -> ShapeKind { self.kind }

    #[inline] pub fn candidates(&self) -> &[Coord<f64>] { &self.points }

    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// The closest pair found between two shapes, `from` on the first shape and
/// `to` on the second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub from: Coord<f64>,
    pub to: Coord<f64>,
    /// Geodesic distance between `from` and `to`, in meters.
    pub distance_m: f64,
}

impl ClosestPair {
    /// Sector of `to` as seen from `from`.
    pub fn sector(&self) -> Sector {
        Sector::from_azimuth(ellipsoid::forward_azimuth(self.from, self.to))
    }
}

/// Exhaustive minimum-distance search over all `|a| x |b|` cross pairs.
///
/// Covers every combination of shape kinds (polygon/polygon, polygon/points,
/// points/polygon, points/points): polygons contribute their boundary
/// samples, point sets their points. Returns `None` if either side has no
/// candidates. On exactly equal distances the first pair found wins, with
/// `a` iterated in the outer loop.
pub fn nearest_pair(a: &SampledShape, b: &SampledShape) -> Option<ClosestPair> {
    let mut best: Option<ClosestPair> = None;
    for &from in a.candidates() {
        for &to in b.candidates() {
            let distance_m = ellipsoid::distance_m(from, to);
            if best.is_none_or(|pair| distance_m < pair.distance_m) {
                best = Some(ClosestPair { from, to, distance_m });
            }
        }
    }
    best
}
