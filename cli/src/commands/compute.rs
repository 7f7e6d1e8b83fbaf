use anyhow::{ensure, Result};
use country_bearings::{read_records, write_matrix_json, Atlas, DirectionMatrix, FallbackTable, Settings};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ComputeArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./country_directions.json".into());
    ensure!(
        args.density_scale.is_finite() && args.density_scale > 0.0,
        "--density-scale must be a positive number, got {}", args.density_scale
    );
    ensure!(args.threads != Some(0), "--threads must be at least 1");

    let mut settings = Settings::default();
    if let Some(path) = &args.densities {
        settings = settings.with_overrides_json(path)?;
    }
    let settings = settings.with_scale(args.density_scale).with_threads(args.threads);

    let fallback = if args.no_fallback { FallbackTable::empty() } else { FallbackTable::builtin() };
    let atlas = Atlas::from_records(read_records(&args.input)?, fallback);

    let matrix = DirectionMatrix::compute(&atlas, &settings)?;
    write_matrix_json(out_path, &matrix)?;

    let summary = matrix.summary();
    tracing::info!(
        resolved = atlas.num_resolved(),
        unknown = summary.unknown,
        output = %out_path.display(),
        "done"
    );
    Ok(())
}
