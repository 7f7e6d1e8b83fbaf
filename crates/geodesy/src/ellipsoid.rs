use std::sync::LazyLock;

use geo::{Coord, LineString, Polygon};
use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

use crate::coord::in_range;

/// WGS84 ellipsoid, built once per process.
static WGS84: LazyLock<Geodesic> = LazyLock::new(Geodesic::wgs84);

/// Wrap an azimuth in degrees into `[0, 360)`.
#[inline]
pub fn normalize_azimuth(azimuth: f64) -> f64 {
    let a = azimuth.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if a >= 360.0 { 0.0 } else { a }
}

/// Solve the inverse geodesic problem from `a` to `b` (lon/lat degrees).
///
/// Returns `(distance_m, forward_azimuth_deg)`, the azimuth wrapped into `[0, 360)`.
#[inline]
pub fn inverse(a: Coord<f64>, b: Coord<f64>) -> (f64, f64) {
    debug_assert!(in_range(a) && in_range(b), "coordinate out of range: {a:?} -> {b:?}");
    let (s12, azi1, _azi2, _a12): (f64, f64, f64, f64) = WGS84.inverse(a.y, a.x, b.y, b.x);
    (s12, normalize_azimuth(azi1))
}

/// Geodesic distance between `a` and `b` in meters.
#[inline]
pub fn distance_m(a: Coord<f64>, b: Coord<f64>) -> f64 {
    debug_assert!(in_range(a) && in_range(b), "coordinate out of range: {a:?} -> {b:?}");
    WGS84.inverse(a.y, a.x, b.y, b.x)
}

/// Geodesic distance between `a` and `b` in kilometers.
#[inline]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    distance_m(a, b) / 1000.0
}

/// Initial bearing from `a` towards `b` along the geodesic, in `[0, 360)`.
#[inline]
pub fn forward_azimuth(a: Coord<f64>, b: Coord<f64>) -> f64 {
    inverse(a, b).1
}

/// Point reached by travelling `distance_m` meters from `origin` along the
/// geodesic with initial bearing `azimuth` degrees.
pub fn destination(origin: Coord<f64>, azimuth: f64, distance_m: f64) -> Coord<f64> {
    debug_assert!(in_range(origin), "coordinate out of range: {origin:?}");
    let (lat, lon): (f64, f64) = WGS84.direct(origin.y, origin.x, azimuth, distance_m);
    Coord { x: lon, y: lat }
}

/// Closed polygon approximating the geodesic circle of `radius_m` meters
/// around `center`, with `vertices` evenly spaced bearings (minimum 3).
pub fn geodesic_circle(center: Coord<f64>, radius_m: f64, vertices: usize) -> Polygon<f64> {
    let vertices = vertices.max(3);
    let step = 360.0 / vertices as f64;
    let mut ring: Vec<Coord<f64>> = (0..vertices)
        .map(|k| destination(center, k as f64 * step, radius_m))
        .collect();
    ring.push(ring[0]);
    Polygon::new(LineString(ring), vec![])
}
