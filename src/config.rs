use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use geodesy::SampleDensity;
use serde::Deserialize;

use crate::roster::{id, CountryId};

/// Density used for countries without an override.
pub const DEFAULT_DENSITY: u32 = 700;

/// Built-in densities for long or convoluted coastlines.
static DENSITY_OVERRIDES: &[(&str, u32)] = &[
    ("canada", 2000), ("russia", 1500), ("china", 1000), ("united states", 1000),
    ("indonesia", 1000), ("philippines", 1000), ("norway", 800), ("brazil", 800),
    ("australia", 800), ("india", 800), ("japan", 800), ("argentina", 800), ("mexico", 800),
    ("kazakhstan", 800), ("united kingdom", 800),
];

/// Run configuration for the matrix computation.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    default_density: SampleDensity,
    overrides: BTreeMap<CountryId, SampleDensity>,
    /// Uniform factor applied on top of every density (1.0 = as configured).
    scale: f64,
    /// Worker threads for the matrix pass; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

/// On-disk shape of a density override file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DensityFile {
    default: Option<SampleDensity>,
    #[serde(default)]
    overrides: BTreeMap<CountryId, SampleDensity>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_density: SampleDensity::saturating(DEFAULT_DENSITY),
            overrides: DENSITY_OVERRIDES.iter()
                .map(|&(name, n)| (id(name), SampleDensity::saturating(n)))
                .collect(),
            scale: 1.0,
            threads: None,
        }
    }
}

impl Settings {
    /// Settings with every country at `density` and no overrides.
    pub fn uniform(density: SampleDensity) -> Self {
        Self { default_density: density, overrides: BTreeMap::new(), scale: 1.0, threads: None }
    }

    /// Density used to sample `country`'s boundary.
    pub fn density(&self, country: CountryId) -> SampleDensity {
        let base = self.overrides.get(&country).copied().unwrap_or(self.default_density);
        if self.scale == 1.0 { base } else { base.scaled(self.scale) }
    }

    /// Set the density for a single country.
    pub fn set_density(&mut self, country: CountryId, density: SampleDensity) {
        self.overrides.insert(country, density);
    }

    /// Scale every density by `factor` (results never drop below 1).
    pub fn with_scale(mut self, factor: f64) -> Self {
        self.scale = factor;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Merge a JSON override file of the form
    /// `{ "default": 500, "overrides": { "canada": 1200 } }` into these settings.
    pub fn with_overrides_json(mut self, path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open density file: {}", path.display()))?;
        let parsed: DensityFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid density file: {}", path.display()))?;

        if let Some(default) = parsed.default {
            self.default_density = default;
        }
        self.overrides.extend(parsed.overrides);
        Ok(self)
    }
}
