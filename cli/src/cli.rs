use std::path::PathBuf;

/// All-pairs compass directions between countries
#[derive(clap::Parser, Debug)]
#[command(name = "country-bearings", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Compute the direction matrix and write it as JSON
    Compute(ComputeArgs),

    /// Report how each roster country is represented in a geometry file
    Resolve(ResolveArgs),
}

#[derive(clap::Args, Debug)]
pub struct ComputeArgs {
    /// Country boundaries, as a shapefile (.shp) or GeoJSON (.geojson)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output JSON file, defaults to "./country_directions.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Multiply every sampling density by this factor
    #[arg(long, default_value_t = 1.0)]
    pub density_scale: f64,

    /// Worker threads, defaults to one per core
    #[arg(long)]
    pub threads: Option<usize>,

    /// JSON file of sampling density overrides
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub densities: Option<PathBuf>,

    /// Do not use the built-in micro-state points
    #[arg(long)]
    pub no_fallback: bool,
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Country boundaries, as a shapefile (.shp) or GeoJSON (.geojson)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,
}
