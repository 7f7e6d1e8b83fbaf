use std::collections::BTreeMap;

use anyhow::Result;
use geo::Coord;
use geodesy::check_coord;

use crate::roster::{id, CountryId};

/// Representative coordinates (lon, lat) for micro-states whose polygons are
/// missing or too small to sample reliably.
static MICROSTATES: &[(&str, &[(f64, f64)])] = &[
    ("andorra", &[(1.6016, 42.5424)]),
    ("antigua and barbuda", &[(-61.8456, 17.0747)]),
    ("bahrain", &[(50.5577, 26.0667)]),
    ("barbados", &[(-59.5432, 13.1939)]),
    ("cape verde", &[(-23.5087, 14.9300)]),
    ("comoros", &[(43.3333, -11.6455)]),
    ("dominica", &[(-61.3710, 15.4239)]),
    ("grenada", &[(-61.6792, 12.1165)]),
    ("kiribati", &[(173.0314, 1.3382)]),
    ("liechtenstein", &[(9.5537, 47.1660)]),
    ("maldives", &[(73.5093, 4.1755), (73.5, 3.2)]),
    ("malta", &[(14.3754, 35.9375)]),
    ("marshall islands", &[(171.1854, 7.1315)]),
    ("mauritius", &[(57.5522, -20.3484)]),
    ("micronesia", &[(158.2239, 6.9248)]),
    ("monaco", &[(7.4128, 43.7306)]),
    ("nauru", &[(166.9315, -0.5338)]),
    ("palau", &[(134.4795, 7.3419)]),
    ("saint kitts and nevis", &[(-62.7830, 17.3578)]),
    ("saint lucia", &[(-60.9789, 13.9094)]),
    ("saint vincent and the grenadines", &[(-61.2872, 13.2528)]),
    ("samoa", &[(-172.1046, -13.7590)]),
    ("san marino", &[(12.4578, 43.9424)]),
    ("sao tome and principe", &[(6.7273, 0.3302)]),
    ("seychelles", &[(55.4915, -4.6796)]),
    ("singapore", &[(103.8198, 1.3521)]),
    ("tonga", &[(-175.1982, -21.1789)]),
    ("tuvalu", &[(179.2168, -8.5199)]),
    ("vatican city", &[(12.4534, 41.9029)]),
];

/// Point sets used for countries without resolved geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FallbackTable {
    points: BTreeMap<CountryId, Vec<Coord<f64>>>,
}

impl FallbackTable {
    /// The built-in micro-state table.
    pub fn builtin() -> Self {
        Self {
            points: MICROSTATES.iter()
                .map(|&(name, pts)| (id(name), pts.iter().map(|&(x, y)| Coord { x, y }).collect()))
                .collect(),
        }
    }

    /// A table with no entries.
    pub fn empty() -> Self { Self::default() }

    /// Add or replace the point set of `country`.
    ///
    /// Empty point sets are not stored; coordinates are range-checked.
    pub fn insert(&mut self, country: CountryId, points: Vec<Coord<f64>>) -> Result<()> {
        for &c in &points {
            check_coord(c)?;
        }
        if points.is_empty() {
            self.points.remove(&country);
        } else {
            self.points.insert(country, points);
        }
        Ok(())
    }

    /// The point set for `country`, if it has one.
    pub fn get(&self, country: CountryId) -> Option<&[Coord<f64>]> {
        self.points.get(&country).map(Vec::as_slice)
    }

    #[inline] pub fn len(&self) -> usize { self.points.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }
}
