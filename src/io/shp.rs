use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use geo::MultiPolygon;
use shapefile::{dbase::{FieldValue, Record}, Reader, Shape};

use crate::common::shp_to_geo;

use super::{RawRecord, NAME_COLUMNS};

/// Reads every shape + attribute record from a `.shp` file in lon/lat degrees.
pub fn read_shapefile(path: &Path) -> Result<Vec<RawRecord>> {
    ensure_geographic(path)?;

    /// Coerce a generic shape into an owned multipolygon, raising error if different shape
    fn shape_to_multipolygon(shape: Shape) -> Result<MultiPolygon<f64>> {
        match shape {
            Shape::Polygon(polygon) => Ok(shp_to_geo(&polygon)),
            Shape::NullShape => Ok(MultiPolygon(vec![])),
            other => bail!("found non-Polygon shape: {:?}", other.shapetype()),
        }
    }

    /// Get the name labels of a record, in column priority order
    fn labels(record: &Record) -> Vec<String> {
        NAME_COLUMNS.iter()
            .filter_map(|&field| match record.get(field) {
                Some(FieldValue::Character(Some(s))) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
            .collect()
    }

    let mut reader = Reader::from_path(path)
        .with_context(|| format!("Failed to open shapefile: {}", path.display()))?;

    let mut records = Vec::with_capacity(reader.shape_count()?);
    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result.context("Error reading shape+record")?;
        records.push(RawRecord {
            labels: labels(&record),
            geometry: shape_to_multipolygon(shape)
                .with_context(|| format!("Error converting shapes in shapefile: {}", path.display()))?,
        });
    }
    tracing::info!(path = %path.display(), records = records.len(), "read shapefile");
    Ok(records)
}

/// Reject shapefiles whose `.prj` sidecar declares a projected system.
///
/// A missing `.prj` is taken to mean lon/lat degrees.
fn ensure_geographic(path: &Path) -> Result<()> {
    let prj = path.with_extension("prj");
    if !prj.exists() {
        tracing::debug!(path = %prj.display(), "no projection file, assuming lon/lat");
        return Ok(());
    }
    let wkt = fs::read_to_string(&prj)
        .with_context(|| format!("Failed to read projection file: {}", prj.display()))?;
    let wkt = wkt.trim_start().to_ascii_uppercase();
    if wkt.starts_with("PROJCS") || wkt.starts_with("PROJCRS") {
        bail!("{} is projected; reproject to geographic lon/lat (EPSG:4326) first", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WGS84: &str = r#"GEOGCS["GCS_WGS_1984",DATUM["D_WGS_1984",SPHEROID["WGS_1984",6378137.0,298.257223563]],PRIMEM["Greenwich",0.0],UNIT["Degree",0.0174532925199433]]"#;
    const MERCATOR: &str = r#"PROJCS["WGS_1984_Web_Mercator_Auxiliary_Sphere",GEOGCS["GCS_WGS_1984"],PROJECTION["Mercator_Auxiliary_Sphere"]]"#;

    #[test]
    fn projection_sidecar_is_checked() {
        let dir = tempfile::tempdir().unwrap();
        let shp = dir.path().join("countries.shp");
        assert!(ensure_geographic(&shp).is_ok());

        fs::write(dir.path().join("countries.prj"), WGS84).unwrap();
        assert!(ensure_geographic(&shp).is_ok());

        fs::write(dir.path().join("countries.prj"), MERCATOR).unwrap();
        assert!(ensure_geographic(&shp).is_err());
        assert!(read_shapefile(&shp).is_err());
    }

    #[test]
    fn missing_shapefile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_shapefile(&dir.path().join("missing.shp")).is_err());
    }
}
