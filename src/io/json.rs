use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use crate::matrix::DirectionMatrix;

/// Write `matrix` to `path` as pretty-printed JSON.
pub fn write_matrix_json(path: &Path, matrix: &DirectionMatrix) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, matrix)
        .with_context(|| format!("Failed to write matrix to {}", path.display()))?;
    writer.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    tracing::info!(path = %path.display(), countries = matrix.len(), "wrote direction matrix");
    Ok(())
}

/// Serialize `matrix` to pretty-printed JSON bytes.
pub fn matrix_to_json_bytes(matrix: &DirectionMatrix) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(matrix).context("Failed to serialize direction matrix")
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{atlas::Atlas, config::Settings, fallback::FallbackTable, roster::ROSTER_LEN};

    #[test]
    fn written_file_matches_bytes() {
        let matrix = DirectionMatrix::compute(&Atlas::new(FallbackTable::empty()), &Settings::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("country_directions.json");
        write_matrix_json(&path, &matrix).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, matrix_to_json_bytes(&matrix).unwrap());

        let value: Value = serde_json::from_slice(&bytes).unwrap();
        let rows = value.as_object().unwrap();
        assert_eq!(rows.len(), ROSTER_LEN);
        assert_eq!(rows["chad"]["chad"], Value::Null);
        assert_eq!(rows["chad"]["peru"], "unknown");
        assert_eq!(rows["chad"].as_object().unwrap().len(), ROSTER_LEN);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let matrix = DirectionMatrix::compute(&Atlas::default(), &Settings::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        assert!(write_matrix_json(&dir.path().join("missing").join("out.json"), &matrix).is_err());
    }
}
