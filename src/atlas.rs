use std::collections::BTreeMap;

use anyhow::{Context, Result};
use geo::{Coord, MultiPolygon};
use geodesy::{check_multipolygon, SampledShape};

use crate::{common::union_all, config::Settings, fallback::FallbackTable, io::RawRecord, mainland, roster::CountryId};

/// How a country takes part in the nearest-pair search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Representation<'a> {
    /// Resolved (mainland-selected) geometry.
    Geometry(&'a MultiPolygon<f64>),
    /// Fallback point set.
    Points(&'a [Coord<f64>]),
}

/// Resolved geometry for every country seen in the input, plus the fallback
/// point table consulted for the rest.
#[derive(Clone, Debug, Default)]
pub struct Atlas {
    geometry: BTreeMap<CountryId, MultiPolygon<f64>>,
    fallback: FallbackTable,
}

impl Atlas {
    /// An atlas with no geometry, consulting `fallback` for point sets.
    pub fn new(fallback: FallbackTable) -> Self {
        Self { geometry: BTreeMap::new(), fallback }
    }

    /// Build an atlas from raw source records.
    ///
    /// Records whose labels do not name a roster country are skipped; records
    /// with out-of-range coordinates are rejected with a warning.
    pub fn from_records(records: impl IntoIterator<Item = RawRecord>, fallback: FallbackTable) -> Self {
        let mut atlas = Self::new(fallback);
        let (mut total, mut skipped, mut rejected) = (0usize, 0usize, 0usize);

        for record in records {
            total += 1;
            let Some(country) = record.country() else {
                tracing::debug!(labels = ?record.labels, "skipping unrecognized record");
                skipped += 1;
                continue;
            };
            if let Err(err) = atlas.insert_raw(country, &record.geometry) {
                tracing::warn!(%country, "rejecting record: {err:#}");
                rejected += 1;
            }
        }

        tracing::info!(
            records = total, skipped, rejected,
            resolved = atlas.geometry.len(),
            "resolved country geometry"
        );
        atlas
    }

    /// Pass raw geometry for `country` through the mainland selector and merge
    /// the result into any geometry already resolved for it.
    ///
    /// Returns `false` if nothing usable survived the selector.
    pub fn insert_raw(&mut self, country: CountryId, raw: &MultiPolygon<f64>) -> Result<bool> {
        check_multipolygon(raw).with_context(|| format!("invalid geometry for {country}"))?;
        let Some(selected) = mainland::select(country, raw) else { return Ok(false) };
        tracing::debug!(%country, parts = selected.0.len(), "selected mainland");
        self.merge(country, selected);
        Ok(true)
    }

    /// Store already-resolved geometry for `country`, bypassing the selector.
    ///
    /// Empty geometry leaves the country unresolved.
    pub fn insert_resolved(&mut self, country: CountryId, geometry: MultiPolygon<f64>) -> Result<()> {
        check_multipolygon(&geometry).with_context(|| format!("invalid geometry for {country}"))?;
        if !geometry.0.is_empty() {
            self.merge(country, geometry);
        }
        Ok(())
    }

    fn merge(&mut self, country: CountryId, shape: MultiPolygon<f64>) {
        let merged = match self.geometry.remove(&country) {
            Some(existing) => union_all([existing, shape]),
            None => Some(shape),
        };
        if let Some(merged) = merged.filter(|mp| !mp.0.is_empty()) {
            self.geometry.insert(country, merged);
        }
    }

    /// Resolved geometry of `country`, if any.
    pub fn geometry(&self, country: CountryId) -> Option<&MultiPolygon<f64>> {
        self.geometry.get(&country)
    }

    #[inline] pub fn fallback(&self) -> &FallbackTable { &self.fallback }

    /// Number of countries with resolved geometry.
    #[inline] pub fn num_resolved(&self) -> usize { self.geometry.len() }

    /// Geometry if resolved, else the fallback point set, else `None`.
    pub fn representation(&self, country: CountryId) -> Option<Representation<'_>> {
        self.geometry(country).map(Representation::Geometry)
            .or_else(|| self.fallback.get(country).map(Representation::Points))
    }

    /// Search candidates for `country`, sampling geometry at its configured density.
    pub fn sampled(&self, country: CountryId, settings: &Settings) -> Option<SampledShape> {
        match self.representation(country)? {
            Representation::Geometry(shape) => Some(SampledShape::polygon(shape, settings.density(country))),
            Representation::Points(points) => Some(SampledShape::points(points)),
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::{polygon, Area};

    use super::*;
    use crate::roster::id;

    fn square(x: f64, y: f64, side: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![(x: x, y: y), (x: x + side, y: y), (x: x + side, y: y + side), (x: x, y: y + side)]])
    }

    fn record(label: &str, geometry: MultiPolygon<f64>) -> RawRecord {
        RawRecord { labels: vec!["-99".into(), label.into()], geometry }
    }

    #[test]
    fn representation_prefers_geometry() {
        let mut atlas = Atlas::new(FallbackTable::builtin());
        atlas.insert_resolved(id("monaco"), square(7.4, 43.7, 0.1)).unwrap();
        assert!(matches!(atlas.representation(id("monaco")), Some(Representation::Geometry(_))));
        assert!(matches!(atlas.representation(id("san marino")), Some(Representation::Points(_))));
        assert_eq!(atlas.representation(id("chad")), None);
    }

    #[test]
    fn records_are_normalized_and_merged() {
        let atlas = Atlas::from_records([
            record("Chad", square(15.0, 10.0, 2.0)),
            record("Greenland", square(-40.0, 70.0, 5.0)),
            record("CHAD", square(17.0, 10.0, 2.0)),
        ], FallbackTable::empty());

        assert_eq!(atlas.num_resolved(), 1);
        let chad = atlas.geometry(id("chad")).unwrap();
        assert!((chad.unsigned_area() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_records_are_rejected() {
        let mut atlas = Atlas::default();
        assert!(atlas.insert_raw(id("chad"), &square(179.5, 10.0, 2.0)).is_err());
        assert!(atlas.insert_resolved(id("chad"), square(0.0, 89.5, 1.0)).is_err());
        assert_eq!(atlas.num_resolved(), 0);

        let atlas = Atlas::from_records([record("Chad", square(179.5, 10.0, 2.0))], FallbackTable::empty());
        assert_eq!(atlas.geometry(id("chad")), None);
    }

    #[test]
    fn empty_geometry_stays_absent() {
        let mut atlas = Atlas::default();
        assert!(!atlas.insert_raw(id("chad"), &MultiPolygon(vec![])).unwrap());
        atlas.insert_resolved(id("chad"), MultiPolygon(vec![])).unwrap();
        assert_eq!(atlas.representation(id("chad")), None);
    }

    #[test]
    fn sampling_uses_country_density() {
        let mut atlas = Atlas::new(FallbackTable::builtin());
        atlas.insert_resolved(id("chad"), square(15.0, 10.0, 2.0)).unwrap();
        let settings = Settings::uniform(geodesy::SampleDensity::new(16).unwrap());
        assert_eq!(atlas.sampled(id("chad"), &settings).unwrap().candidates().len(), 17);
        assert_eq!(atlas.sampled(id("maldives"), &settings).unwrap().candidates().len(), 2);
        assert!(atlas.sampled(id("peru"), &settings).is_none());
    }
}
