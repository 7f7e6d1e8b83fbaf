use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower (closed) band edges of NE through NW, then of N.
const LOWER_EDGES: [f64; 8] = [22.5, 67.5, 112.5, 157.5, 202.5, 247.5, 292.5, 337.5];

/// One of the eight 45° compass sectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector { N, NE, E, SE, S, SW, W, NW }

impl Sector {
    /// All sectors, clockwise from north.
    pub const ALL: [Sector; 8] = [
        Sector::N, Sector::NE, Sector::E, Sector::SE,
        Sector::S, Sector::SW, Sector::W, Sector::NW,
    ];

    /// Bucket an azimuth (degrees) into its sector.
    ///
    /// Bands are 45° wide and centered on each direction, lower edge closed
    /// and upper edge open: `N = [337.5, 360) ∪ [0, 22.5)`, `NE = [22.5, 67.5)`,
    /// and so on clockwise. Azimuths outside `[0, 360)` are wrapped first.
    pub fn from_azimuth(azimuth: f64) -> Self {
        let a = crate::ellipsoid::normalize_azimuth(azimuth);
        // Edges are compared exactly.
        let band = LOWER_EDGES.iter().take_while(|&&edge| a >= edge).count();
        Self::ALL[band % 8]
    }

    /// The sector pointing the opposite way (N <-> S, NE <-> SW, ...).
    #[inline]
    pub fn antipode(self) -> Self {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// Position clockwise from north (N = 0, NW = 7).
    #[inline]
    pub fn index(self) -> usize { self as usize }

    /// Azimuth at the center of the band.
    #[inline]
    pub fn center_azimuth(self) -> f64 { self.index() as f64 * 45.0 }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Sector::N => "N",
            Sector::NE => "NE",
            Sector::E => "E",
            Sector::SE => "SE",
            Sector::S => "S",
            Sector::SW => "SW",
            Sector::W => "W",
            Sector::NW => "NW",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_lower_closed() {
        assert_eq!(Sector::from_azimuth(0.0), Sector::N);
        assert_eq!(Sector::from_azimuth(22.4999), Sector::N);
        assert_eq!(Sector::from_azimuth(22.5), Sector::NE);
        assert_eq!(Sector::from_azimuth(67.5), Sector::E);
        assert_eq!(Sector::from_azimuth(112.5), Sector::SE);
        assert_eq!(Sector::from_azimuth(157.5), Sector::S);
        assert_eq!(Sector::from_azimuth(202.5), Sector::SW);
        assert_eq!(Sector::from_azimuth(247.5), Sector::W);
        assert_eq!(Sector::from_azimuth(292.5), Sector::NW);
        assert_eq!(Sector::from_azimuth(337.4999), Sector::NW);
        assert_eq!(Sector::from_azimuth(337.5), Sector::N);
        assert_eq!(Sector::from_azimuth(359.999), Sector::N);
    }

    #[test]
    fn wraps_out_of_range_azimuths() {
        assert_eq!(Sector::from_azimuth(360.0), Sector::N);
        assert_eq!(Sector::from_azimuth(-90.0), Sector::W);
        assert_eq!(Sector::from_azimuth(450.0), Sector::E);
    }

    #[test]
    fn antipodes() {
        assert_eq!(Sector::N.antipode(), Sector::S);
        assert_eq!(Sector::E.antipode(), Sector::W);
        assert_eq!(Sector::NE.antipode(), Sector::SW);
        assert_eq!(Sector::SE.antipode(), Sector::NW);
        for s in Sector::ALL {
            assert_eq!(s.antipode().antipode(), s);
            assert_ne!(s.antipode(), s);
        }
    }

    #[test]
    fn centers_bucket_to_themselves() {
        for s in Sector::ALL {
            assert_eq!(Sector::from_azimuth(s.center_azimuth()), s);
        }
    }

    #[test]
    fn display_matches_as_str() {
        for s in Sector::ALL {
            assert_eq!(s.to_string(), s.as_str());
        }
    }

    #[test]
    fn one_ulp_below_each_edge_stays_in_the_lower_band() {
        for (k, &edge) in LOWER_EDGES.iter().enumerate() {
            let below = f64::from_bits(edge.to_bits() - 1);
            assert!(below < edge);
            assert_eq!(Sector::from_azimuth(below), Sector::ALL[k], "{below}");
            assert_eq!(Sector::from_azimuth(edge), Sector::ALL[(k + 1) % 8], "{edge}");
        }
    }
}
