use std::{fmt, num::NonZeroU32};

use geo::{Coord, Line, LineString, MultiPolygon};
use serde::{Deserialize, Serialize};

use crate::GeodesyError;

/// Number of arc-length intervals a boundary is divided into.
///
/// A density of `n` yields `n + 1` sample points (both ends of the
/// boundary included).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SampleDensity(NonZeroU32);

impl SampleDensity {
    pub fn new(n: u32) -> Result<Self, GeodesyError> {
        NonZeroU32::new(n).map(Self).ok_or(GeodesyError::ZeroSampleDensity)
    }

    /// Like [`SampleDensity::new`], but maps 0 to 1.
    pub const fn saturating(n: u32) -> Self {
        match NonZeroU32::new(n) {
            Some(n) => Self(n),
            None => Self(NonZeroU32::MIN),
        }
    }

    #[inline] pub fn get(self) -> u32 { self.0.get() }

    /// Scale the density by `factor`, never dropping below 1.
    pub fn scaled(self, factor: f64) -> Self {
        Self::saturating((self.get() as f64 * factor).round().clamp(1.0, u32::MAX as f64) as u32)
    }
}

impl TryFrom<u32> for SampleDensity {
    type Error = GeodesyError;
    fn try_from(n: u32) -> Result<Self, Self::Error> { Self::new(n) }
}

impl From<SampleDensity> for u32 {
    fn from(d: SampleDensity) -> Self { d.get() }
}

impl fmt::Display for SampleDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Every ring of `shape`: each polygon's exterior followed by its holes.
fn rings(shape: &MultiPolygon<f64>) -> impl Iterator<Item = &LineString<f64>> {
    shape.0.iter().flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
}

#[inline]
fn segment_length(line: &Line<f64>) -> f64 { line.dx().hypot(line.dy()) }

/// Sample `density + 1` points evenly spaced by arc length along the
/// boundary of `shape`.
///
/// The rings are walked as one concatenated path, so sample `0` is the first
/// vertex of the first exterior ring and sample `density` the last vertex of
/// the last ring. Arc length is measured in the lon/lat plane; only the
/// spacing depends on it, every distance taken from the samples is geodesic.
/// Returns an empty vector when the shape has no boundary segments.
pub fn sample_boundary(shape: &MultiPolygon<f64>, density: SampleDensity) -> Vec<Coord<f64>> {
    let segments: Vec<Line<f64>> = rings(shape).flat_map(|ring| ring.lines()).collect();
    if segments.is_empty() {
        return Vec::new();
    }
    let lengths: Vec<f64> = segments.iter().map(segment_length).collect();
    let total: f64 = lengths.iter().sum();

    let n = density.get() as usize;
    let mut samples = Vec::with_capacity(n + 1);
    let (mut seg, mut walked) = (0, 0.0);

    for i in 0..=n {
        let target = if i == n { total } else { total * i as f64 / n as f64 };
        while seg + 1 < segments.len() && walked + lengths[seg] < target {
            walked += lengths[seg];
            seg += 1;
        }
        let line = segments[seg];
        let t = if lengths[seg] > 0.0 { ((target - walked) / lengths[seg]).clamp(0.0, 1.0) } else { 0.0 };
        samples.push(line.start + (line.end - line.start) * t);
    }
    samples
}
