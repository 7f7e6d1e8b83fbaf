use geo::{BooleanOps, Centroid, Coord, MultiPolygon, Polygon};
use geodesy::geodesic_circle;

use super::LonLatBox;

/// Radius of the discs patched onto a shape to fill known geometry gaps.
pub const PATCH_RADIUS_M: f64 = 5_500.0;

const PATCH_VERTICES: usize = 64;
const RADIUS_VERTICES: usize = 360;

/// Country-specific shape corrections.
///
/// Each variant receives the parts sorted by decreasing area and returns the
/// parts to keep. An empty input always yields an empty output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Correction {
    /// Drop parts whose centroid lies in any of the boxes (exclaves), keep the rest.
    DropRegions(&'static [LonLatBox]),
    /// Keep only parts whose centroid lies in one of the boxes.
    KeepRegions(&'static [LonLatBox]),
    /// Clip every part to the geodesic circle of `km` around `center` (lon, lat).
    WithinRadius { center: (f64, f64), km: f64 },
    /// Drop parts whose centroid is south of `lat`, keep the `count` largest
    /// of the rest and add a patch disc at each of `patches`.
    NorthOf { lat: f64, count: usize, patches: &'static [(f64, f64)] },
    /// Union the largest part with a patch disc at each of the points.
    Patched(&'static [(f64, f64)]),
}

fn centroid(part: &Polygon<f64>) -> Option<Coord<f64>> {
    part.centroid().map(|p| p.0)
}

fn patch(&(x, y): &(f64, f64)) -> Polygon<f64> {
    geodesic_circle(Coord { x, y }, PATCH_RADIUS_M, PATCH_VERTICES)
}

/// Union `main` with `extras`, returning the resulting parts.
fn merge(main: &Polygon<f64>, extras: impl IntoIterator<Item = Polygon<f64>>) -> Vec<Polygon<f64>> {
    extras.into_iter()
        .fold(MultiPolygon(vec![main.clone()]), |acc, extra| acc.union(&extra))
        .0
}

impl Correction {
    pub(super) fn apply(&self, parts: Vec<Polygon<f64>>) -> Vec<Polygon<f64>> {
        match *self {
            Correction::DropRegions(boxes) => parts.into_iter()
                .filter(|part| centroid(part).is_none_or(|c| !boxes.iter().any(|b| b.contains(c))))
                .collect(),
            Correction::KeepRegions(boxes) => parts.into_iter()
                .filter(|part| centroid(part).is_some_and(|c| boxes.iter().any(|b| b.contains(c))))
                .collect(),
            Correction::WithinRadius { center: (x, y), km } => {
                if parts.is_empty() {
                    return parts;
                }
                let circle = geodesic_circle(Coord { x, y }, km * 1000.0, RADIUS_VERTICES);
                parts.iter()
                    .flat_map(|part| part.intersection(&circle).0)
                    .collect()
            }
            Correction::NorthOf { lat, count, patches } => {
                let mut kept: Vec<Polygon<f64>> = parts.into_iter()
                    .filter(|part| centroid(part).is_some_and(|c| c.y >= lat))
                    .take(count)
                    .collect();
                if !kept.is_empty() {
                    kept.extend(patches.iter().map(patch));
                }
                kept
            }
            Correction::Patched(points) => match parts.first() {
                Some(main) => merge(main, points.iter().map(patch)),
                None => parts,
            },
        }
    }
}
