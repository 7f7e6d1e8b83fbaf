use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use shapefile as shp;

/// Convert shapefile::Polygon to geo::MultiPolygon<f64>
pub(crate) fn shp_to_geo(p: &shp::Polygon) -> MultiPolygon<f64> {
    /// Ensure first and last are the same for geo::LineString coords
    fn ensure_closed(coords: &mut Vec<Coord<f64>>) {
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last {
                coords.push(first)
            }
        }
    }

    // Shapefile stores each outer ring followed by its holes.
    let mut polys: Vec<Polygon<f64>> = Vec::new();
    let mut current_exterior: Option<LineString<f64>> = None;
    let mut current_holes: Vec<LineString<f64>> = Vec::new();

    for ring in p.rings() {
        let mut coords: Vec<Coord<f64>> = ring.points().iter().map(|pt| Coord { x: pt.x, y: pt.y }).collect();
        ensure_closed(&mut coords);
        let ls = LineString(coords);

        match ring {
            shp::PolygonRing::Outer(_) => {
                if let Some(ext) = current_exterior.replace(ls) {
                    polys.push(Polygon::new(ext, std::mem::take(&mut current_holes)));
                }
            }
            shp::PolygonRing::Inner(_) => current_holes.push(ls),
        }
    }
    if let Some(ext) = current_exterior {
        polys.push(Polygon::new(ext, current_holes));
    }

    MultiPolygon(polys)
}

/// Non-empty parts of `shape`, largest planar area first.
///
/// Ties keep their input order, so the ranking is deterministic.
pub(crate) fn parts_by_area(shape: &MultiPolygon<f64>) -> Vec<Polygon<f64>> {
    let mut parts: Vec<(f64, Polygon<f64>)> = shape.0.iter()
        .filter(|part| !part.exterior().0.is_empty())
        .map(|part| (part.unsigned_area(), part.clone()))
        .collect();
    parts.sort_by(|a, b| b.0.total_cmp(&a.0));
    parts.into_iter().map(|(_, part)| part).collect()
}

/// Union of all `shapes`; `None` if there are none.
pub(crate) fn union_all(shapes: impl IntoIterator<Item = MultiPolygon<f64>>) -> Option<MultiPolygon<f64>> {
    shapes.into_iter().reduce(|a, b| a.union(&b))
}
