mod geojson;
mod json;
mod shp;

use std::path::Path;

use anyhow::{bail, Result};
use geo::MultiPolygon;

use crate::{normalize::normalize, roster::CountryId};

pub use geojson::{read_geojson, read_geojson_bytes};
pub use json::{matrix_to_json_bytes, write_matrix_json};
pub use shp::read_shapefile;

/// Attribute columns tried, in order, when naming a source record.
pub const NAME_COLUMNS: [&str; 10] = [
    "ADMIN", "NAME", "NAME_LONG", "SOVEREIGNT", "BRK_NAME", "FORMAL_EN", "GEOUNIT", "GU_A3", "ISO_A3", "ISO_A2",
];

/// One feature of a geometry source: its name labels (in [`NAME_COLUMNS`]
/// order, missing columns omitted) and its lon/lat geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRecord {
    pub labels: Vec<String>,
    pub geometry: MultiPolygon<f64>,
}

impl RawRecord {
    /// The first label that normalizes to a roster country.
    pub fn country(&self) -> Option<CountryId> {
        self.labels.iter().find_map(|label| normalize(label))
    }
}

/// Read raw records from a shapefile (`.shp`) or GeoJSON (`.geojson`, `.json`).
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("shp") => read_shapefile(path),
        Some("geojson" | "json") => read_geojson(path),
        _ => bail!("unsupported geometry file (expected .shp or .geojson): {}", path.display()),
    }
}
