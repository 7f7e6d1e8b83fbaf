use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{Map, Value};

use super::{RawRecord, NAME_COLUMNS};

/// Read raw records from a GeoJSON FeatureCollection file.
pub fn read_geojson(path: &Path) -> Result<Vec<RawRecord>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    let records = read_geojson_bytes(&bytes)
        .with_context(|| format!("Invalid GeoJSON file: {}", path.display()))?;
    tracing::info!(path = %path.display(), records = records.len(), "read GeoJSON");
    Ok(records)
}

/// Read raw records from GeoJSON bytes.
///
/// Polygon and MultiPolygon features become records; features with a null
/// geometry become records with empty geometry; other geometry types are
/// skipped.
pub fn read_geojson_bytes(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("expected a FeatureCollection with a \"features\" array"))?;

    let mut records = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let labels = feature["properties"].as_object().map(labels).unwrap_or_default();
        let geometry = match &feature["geometry"] {
            Value::Null => MultiPolygon(vec![]),
            geometry => match parse_geometry(geometry).with_context(|| format!("feature {idx}"))? {
                Some(mp) => mp,
                None => {
                    tracing::debug!(idx, "skipping non-polygonal feature");
                    continue;
                }
            },
        };
        records.push(RawRecord { labels, geometry });
    }
    Ok(records)
}

/// Name labels of a feature, in column priority order.
/// Each column is looked up as written, then in lowercase.
fn labels(properties: &Map<String, Value>) -> Vec<String> {
    NAME_COLUMNS.iter()
        .filter_map(|&column| properties.get(column)
            .or_else(|| properties.get(&column.to_ascii_lowercase()))
            .and_then(Value::as_str))
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a GeoJSON geometry object; `None` for non-polygonal types.
fn parse_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    let coords = || geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("Invalid geometry: missing coordinates"));

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(Some(MultiPolygon(vec![parse_polygon_coords(coords()?)?]))),
        Some("MultiPolygon") => Ok(Some(MultiPolygon(
            coords()?.iter()
                .map(|polygon| polygon.as_array()
                    .ok_or_else(|| anyhow!("Invalid MultiPolygon: polygon must be an array"))
                    .and_then(|rings| parse_polygon_coords(rings)))
                .collect::<Result<Vec<_>>>()?,
        ))),
        Some(_) => Ok(None),
        None => bail!("Invalid geometry: missing type"),
    }
}

/// Parse GeoJSON Polygon coordinates: `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| ring.as_array()
        .ok_or_else(|| anyhow!("Invalid Polygon: ring must be an array"))
        .and_then(|ring| parse_ring_coords(ring)));

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring (exterior or interior) from GeoJSON coordinates.
/// Format: [[x, y], [x, y], ...]
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for coord_pair in coords {
        let pair = coord_pair.as_array()
            .filter(|pair| pair.len() >= 2)
            .ok_or_else(|| anyhow!("Invalid coordinate: expected [x, y]"))?;
        let x = pair[0].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
        let y = pair[1].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
        points.push(Coord { x, y });
    }

    // Ensure ring is closed (first point == last point)
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            points.push(first);
        }
    }

    Ok(LineString(points))
}

#[cfg(test)]
mod tests {
    use geo::Area;

    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "ADMIN": "Republic of Serbia", "ISO_A3": "SRB" },
                "geometry": { "type": "Polygon", "coordinates": [[[20, 43], [22, 43], [22, 45], [20, 45]]] }
            },
            {
                "type": "Feature",
                "properties": { "admin": "Fiji", "name": "Fiji" },
                "geometry": { "type": "MultiPolygon", "coordinates": [
                    [[[177, -18], [178, -18], [178, -17], [177, -17], [177, -18]]],
                    [[[179, -17], [180, -17], [180, -16], [179, -16], [179, -17]],
                     [[179.2, -16.8], [179.4, -16.8], [179.4, -16.6], [179.2, -16.8]]]
                ] }
            },
            { "type": "Feature", "properties": { "NAME": "Null Island" }, "geometry": null },
            { "type": "Feature", "properties": {}, "geometry": { "type": "Point", "coordinates": [0, 0] } }
        ]
    }"#;

    #[test]
    fn reads_polygons_and_labels() {
        let records = read_geojson_bytes(COLLECTION.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].labels, vec!["Republic of Serbia", "SRB"]);
        assert_eq!(records[0].geometry.0[0].exterior().0.len(), 5);
        assert_eq!(records[0].geometry.unsigned_area(), 4.0);

        assert_eq!(records[1].labels, vec!["Fiji", "Fiji"]);
        assert_eq!(records[1].geometry.0.len(), 2);
        assert_eq!(records[1].geometry.0[1].interiors().len(), 1);

        assert!(records[2].geometry.0.is_empty());
    }

    #[test]
    fn labels_resolve_to_countries() {
        let records = read_geojson_bytes(COLLECTION.as_bytes()).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.country().map(|c| c.name())).collect();
        assert_eq!(names, vec![Some("serbia"), Some("fiji"), None]);
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(read_geojson_bytes(b"{}").is_err());
        assert!(read_geojson_bytes(b"not json").is_err());
        let bad = r#"{ "features": [ { "geometry": { "type": "Polygon", "coordinates": [[[0, "a"]]] } } ] }"#;
        assert!(read_geojson_bytes(bad.as_bytes()).is_err());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.geojson");
        fs::write(&path, COLLECTION).unwrap();
        assert_eq!(read_geojson(&path).unwrap().len(), 3);
        assert!(read_geojson(&dir.path().join("missing.geojson")).is_err());
    }
}
