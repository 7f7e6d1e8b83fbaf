use geo::{Coord, MultiPolygon};

use crate::GeodesyError;

/// Returns `true` if `c` is a finite lon/lat pair inside the valid range.
#[inline]
pub fn in_range(c: Coord<f64>) -> bool {
    c.x.is_finite() && c.y.is_finite()
        && (-180.0..=180.0).contains(&c.x)
        && (-90.0..=90.0).contains(&c.y)
}

/// Validate a single lon/lat coordinate.
pub fn check_coord(c: Coord<f64>) -> Result<Coord<f64>, GeodesyError> {
    if in_range(c) { Ok(c) } else { Err(GeodesyError::CoordinateOutOfRange { lon: c.x, lat: c.y }) }
}

/// Validate every vertex of every ring of `mp`.
///
/// This is the ingestion-time check; the primitives in [`crate::ellipsoid`]
/// assume their inputs already passed it.
pub fn check_multipolygon(mp: &MultiPolygon<f64>) -> Result<(), GeodesyError> {
    mp.0.iter()
        .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
        .flat_map(|ring| ring.coords())
        .try_for_each(|&c| check_coord(c).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use geo::{coord, polygon};

    use super::*;

    #[test]
    fn accepts_corners_of_the_range() {
        assert!(check_coord(coord! { x: -180.0, y: -90.0 }).is_ok());
        assert!(check_coord(coord! { x: 180.0, y: 90.0 }).is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert_eq!(
            check_coord(coord! { x: 181.0, y: 0.0 }),
            Err(GeodesyError::CoordinateOutOfRange { lon: 181.0, lat: 0.0 })
        );
        assert!(check_coord(coord! { x: 0.0, y: -90.5 }).is_err());
        assert!(check_coord(coord! { x: f64::NAN, y: 0.0 }).is_err());
    }

    #[test]
    fn multipolygon_check_reaches_holes() {
        let ok = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)];
        let bad = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 95.0)]],
        );
        assert!(check_multipolygon(&MultiPolygon(vec![ok.clone()])).is_ok());
        assert!(check_multipolygon(&MultiPolygon(vec![ok, bad])).is_err());
    }
}
