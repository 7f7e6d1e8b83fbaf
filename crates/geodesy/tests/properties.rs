// Property tests for the geodesic primitives and sector bucketing.

use geo::Coord;
use geodesy::{distance_km, forward_azimuth, nearest_pair, SampledShape, Sector};
use proptest::prelude::*;

fn lon_lat() -> impl Strategy<Value = Coord<f64>> {
    // Stay clear of the poles and of near-antipodal pairs, which this data never has.
    (-179.0..179.0f64, -80.0..80.0f64).prop_map(|(x, y)| Coord { x, y })
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in lon_lat(), b in lon_lat()) {
        let (ab, ba) = (distance_km(a, b), distance_km(b, a));
        prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0));
    }

    #[test]
    fn distance_is_non_negative_and_bounded(a in lon_lat(), b in lon_lat()) {
        let d = distance_km(a, b);
        // Half a meridian is just over 20,003 km.
        prop_assert!((0.0..20_004.0).contains(&d));
    }

    #[test]
    fn azimuth_is_in_range(a in lon_lat(), b in lon_lat()) {
        let az = forward_azimuth(a, b);
        prop_assert!((0.0..360.0).contains(&az));
    }

    #[test]
    fn every_azimuth_lands_in_its_band(az in -720.0..720.0f64) {
        let sector = Sector::from_azimuth(az);
        let wrapped = az.rem_euclid(360.0);
        // Angular offset from the band center, folded into [-180, 180).
        let offset = (wrapped - sector.center_azimuth() + 540.0).rem_euclid(360.0) - 180.0;
        prop_assert!((-22.5..=22.5).contains(&offset), "{az} -> {sector} ({offset})");
    }

    #[test]
    fn antipode_is_an_involution(i in 0usize..8) {
        let s = Sector::ALL[i];
        prop_assert_eq!(s.antipode().antipode(), s);
        prop_assert_eq!(s.antipode().index(), (i + 4) % 8);
    }

    #[test]
    fn nearest_pair_distance_is_symmetric(
        a in prop::collection::vec(lon_lat(), 1..6),
        b in prop::collection::vec(lon_lat(), 1..6),
    ) {
        let ab = nearest_pair(&SampledShape::points(a.clone()), &SampledShape::points(b.clone())).unwrap();
        let ba = nearest_pair(&SampledShape::points(b), &SampledShape::points(a)).unwrap();
        prop_assert!((ab.distance_m - ba.distance_m).abs() <= 1e-6 * ab.distance_m.max(1.0));
    }
}
