use std::{fmt, time::Instant};

use anyhow::{Context, Result};
use geodesy::{nearest_pair, SampledShape, Sector, ShapeKind};
use rayon::prelude::*;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{atlas::Atlas, config::Settings, roster::CountryId};

/// Matrix entry: where the column country lies as seen from the row country.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// A country paired with itself.
    Itself,
    Toward(Sector),
    /// No usable representation on one or both sides.
    Unknown,
}

impl Direction {
    /// The entry for the reversed pair. `Itself` and `Unknown` are kept as-is.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Toward(sector) => Direction::Toward(sector.antipode()),
            other => other,
        }
    }

    #[inline]
    pub fn sector(self) -> Option<Sector> {
        match self {
            Direction::Toward(sector) => Some(sector),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Itself => f.write_str("null"),
            Direction::Toward(sector) => write!(f, "{sector}"),
            Direction::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Direction::Itself => serializer.serialize_none(),
            Direction::Toward(sector) => serializer.serialize_str(sector.as_str()),
            Direction::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

/// Direction between two sampled shapes, `Unknown` if either is missing or empty.
pub fn direction(from: Option<&SampledShape>, to: Option<&SampledShape>) -> Direction {
    match (from, to) {
        (Some(a), Some(b)) => nearest_pair(a, b)
            .map_or(Direction::Unknown, |pair| Direction::Toward(pair.sector())),
        _ => Direction::Unknown,
    }
}

/// Direction from `from` to `to` using the representations in `atlas`.
pub fn direction_between(atlas: &Atlas, settings: &Settings, from: CountryId, to: CountryId) -> Direction {
    if from == to {
        return Direction::Itself;
    }
    direction(atlas.sampled(from, settings).as_ref(), atlas.sampled(to, settings).as_ref())
}

/// Counts of each kind of off-diagonal entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Entries per sector, indexed by [`Sector::index`].
    pub sectors: [usize; 8],
    pub unknown: usize,
}

/// Dense all-pairs direction matrix over the full roster.
///
/// Rows and columns follow roster order. The diagonal is
/// [`Direction::Itself`] and every off-diagonal entry is the inverse of its
/// transpose.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionMatrix {
    countries: Vec<CountryId>,
    cells: Vec<Direction>,
}

/// Position of `(i, j)`, `i < j`, in the row-major upper triangle of an `n x n` matrix.
#[inline]
fn upper_index(n: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < j && j < n);
    i * (2 * n - i - 1) / 2 + (j - i - 1)
}

impl DirectionMatrix {
    /// Compute the matrix for every roster country.
    ///
    /// Each country's boundary is sampled once. The upper triangle is then
    /// searched in parallel, one task per pair, and the full matrix is filled
    /// in a second parallel pass that mirrors the lower triangle from the
    /// upper by sector inversion.
    pub fn compute(atlas: &Atlas, settings: &Settings) -> Result<Self> {
        match settings.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?
                .install(|| Ok(Self::compute_in_pool(atlas, settings))),
            None => Ok(Self::compute_in_pool(atlas, settings)),
        }
    }

    fn compute_in_pool(atlas: &Atlas, settings: &Settings) -> Self {
        let countries: Vec<CountryId> = CountryId::all().collect();
        let n = countries.len();
        let start = Instant::now();

        let shapes: Vec<Option<SampledShape>> = countries.par_iter()
            .map(|&country| atlas.sampled(country, settings))
            .collect();
        let represented = |kind: ShapeKind| shapes.iter().flatten().filter(|s| s.kind() == kind).count();
        tracing::info!(
            countries = n,
            polygons = represented(ShapeKind::Polygon),
            point_sets = represented(ShapeKind::Points),
            samples = shapes.iter().flatten().map(|s| s.candidates().len()).sum::<usize>(),
            "sampled boundaries"
        );

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();
        let upper: Vec<Direction> = pairs.par_iter()
            .map(|&(i, j)| direction(shapes[i].as_ref(), shapes[j].as_ref()))
            .collect();
        tracing::debug!(pairs = pairs.len(), elapsed = ?start.elapsed(), "searched upper triangle");

        let mut cells = vec![Direction::Unknown; n * n];
        cells.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = match i.cmp(&j) {
                    std::cmp::Ordering::Equal => Direction::Itself,
                    std::cmp::Ordering::Less => upper[upper_index(n, i, j)],
                    std::cmp::Ordering::Greater => upper[upper_index(n, j, i)].inverse(),
                };
            }
        });

        let matrix = Self { countries, cells };
        let summary = matrix.summary();
        tracing::info!(
            elapsed = ?start.elapsed(),
            unknown = summary.unknown,
            sectors = ?summary.sectors,
            "computed direction matrix"
        );
        matrix
    }

    #[inline] pub fn len(&self) -> usize { self.countries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.countries.is_empty() }

    /// Row/column keys, in order.
    #[inline] pub fn countries(&self) -> &[CountryId] { &self.countries }

    /// Entry for the ordered pair `(from, to)`.
    #[inline]
    pub fn get(&self, from: CountryId, to: CountryId) -> Direction {
        // Keys are the whole roster, so a country's index is its row.
        self.cells[from.index() * self.len() + to.index()]
    }

    /// The row of `from`: every country paired with its entry.
    pub fn row(&self, from: CountryId) -> impl Iterator<Item = (CountryId, Direction)> + '_ {
        let n = self.len();
        self.countries.iter().copied()
            .zip(self.cells[from.index() * n..(from.index() + 1) * n].iter().copied())
    }

    /// Count sectors and unknowns over the off-diagonal entries.
    pub fn summary(&self) -> Summary {
        self.cells.iter().fold(Summary::default(), |mut summary, cell| {
            match cell {
                Direction::Toward(sector) => summary.sectors[sector.index()] += 1,
                Direction::Unknown => summary.unknown += 1,
                Direction::Itself => {}
            }
            summary
        })
    }
}

struct Row<'a>(&'a DirectionMatrix, CountryId);

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (to, direction) in self.0.row(self.1) {
            map.serialize_entry(&to, &direction)?;
        }
        map.end()
    }
}

/// Serializes as `{ "<from>": { "<to>": "N" | ... | "unknown" | null } }`.
impl Serialize for DirectionMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for &from in &self.countries {
            map.serialize_entry(&from, &Row(self, from))?;
        }
        map.end()
    }
}
