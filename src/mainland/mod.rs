//! Reduction of a country's raw multi-part geometry to the shape used for
//! distance and bearing measurement.
mod correction;
mod rules;

use geo::{Centroid, Coord, MultiPolygon, Polygon};
use geodesy::distance_km;

use crate::{common::parts_by_area, roster::CountryId};

pub use correction::{Correction, PATCH_RADIUS_M};
pub use rules::rule_for;

/// Axis-aligned lon/lat box, bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LonLatBox {
    pub lon: (f64, f64),
    pub lat: (f64, f64),
}

impl LonLatBox {
    pub const fn new(lon: (f64, f64), lat: (f64, f64)) -> Self { Self { lon, lat } }

    #[inline]
    pub fn contains(&self, c: Coord<f64>) -> bool {
        (self.lon.0..=self.lon.1).contains(&c.x) && (self.lat.0..=self.lat.1).contains(&c.y)
    }
}

/// How the parts of a country's raw geometry are filtered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    /// Keep the `k` largest parts by planar area.
    Largest(usize),
    /// Keep every part.
    All,
    /// Keep the largest part and every part whose centroid lies within `km`
    /// kilometers (geodesic) of the largest part's centroid.
    NearMainland { km: f64 },
    /// A country-specific correction.
    Custom(Correction),
}

impl Rule {
    /// Rule for countries without a table entry.
    pub const DEFAULT: Rule = Rule::Largest(1);

    /// Apply the rule to `parts`, which must be sorted by decreasing area.
    fn apply(&self, parts: Vec<Polygon<f64>>) -> Vec<Polygon<f64>> {
        match *self {
            Rule::Largest(k) => parts.into_iter().take(k).collect(),
            Rule::All => parts,
            Rule::NearMainland { km } => {
                let Some(main) = parts.first().and_then(|p| p.centroid()) else { return Vec::new() };
                parts.into_iter().enumerate()
                    .filter(|(i, part)| *i == 0 || part.centroid()
                        .is_some_and(|c| distance_km(main.0, c.0) <= km))
                    .map(|(_, part)| part)
                    .collect()
            }
            Rule::Custom(correction) => correction.apply(parts),
        }
    }
}

/// Resolve the effective geometry of `country` from its raw geometry.
///
/// Returns `None` when nothing usable is left after filtering. The result
/// depends only on the inputs.
pub fn select(country: CountryId, raw: &MultiPolygon<f64>) -> Option<MultiPolygon<f64>> {
    select_with(rule_for(country), raw)
}

/// Like [`select`], with an explicit rule.
pub fn select_with(rule: Rule, raw: &MultiPolygon<f64>) -> Option<MultiPolygon<f64>> {
    let kept: Vec<Polygon<f64>> = rule.apply(parts_by_area(raw)).into_iter()
        .filter(|part| !part.exterior().0.is_empty())
        .collect();
    (!kept.is_empty()).then(|| MultiPolygon(kept))
}
