use anyhow::Result;
use country_bearings::{read_records, rule_for, Atlas, CountryId, FallbackTable, Representation};

/// Print one line per roster country: how it is represented and by which rule.
pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ResolveArgs) -> Result<()> {
    let atlas = Atlas::from_records(read_records(&args.input)?, FallbackTable::builtin());

    let mut missing = 0;
    for country in CountryId::all() {
        let shown = match atlas.representation(country) {
            Some(Representation::Geometry(shape)) => format!("geometry ({} parts)", shape.0.len()),
            Some(Representation::Points(points)) => format!("fallback ({} points)", points.len()),
            None => {
                missing += 1;
                "unknown".to_string()
            }
        };
        println!("{country}\t{shown}\t{:?}", rule_for(country));
    }
    tracing::info!(resolved = atlas.num_resolved(), missing, "resolved roster");
    Ok(())
}
