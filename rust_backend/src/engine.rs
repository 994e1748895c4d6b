//! One-stop facade over the engine components.
//!
//! [`TimezoneEngine`] wires a shared catalog and one configuration into the
//! resolver, the classifier, the terminator calculator and the color
//! assigner. It holds no mutable state and is `Send + Sync`, so a single
//! instance can serve every caller.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::catalog::BoundaryCatalog;
use crate::color::{ColorAssigner, Rgb};
use crate::config::EngineConfig;
use crate::core::domain::{GeoPoint, ResolvedPoint, TemporalClassification, TimezoneRegion};
use crate::core::error::EngineResult;
use crate::geometry::{to_path, Projection};
use crate::resolver::PointResolver;
use crate::solar::{SolarState, SolarTerminatorCalculator};
use crate::temporal::TemporalClassifier;

/// Timezone geospatial engine.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzgeo_rust::engine::TimezoneEngine;
///
/// let engine = TimezoneEngine::default();
/// let hit = engine.resolve(48.86, 2.35).unwrap();
/// assert_eq!(hit.region_id, "Europe/Paris");
///
/// let monday = Utc.with_ymd_and_hms(2024, 6, 17, 10, 0, 0).unwrap();
/// let flags = engine.classify(&hit.region_id, monday).unwrap();
/// assert!(flags.is_business_hours && !flags.is_weekend);
/// ```
#[derive(Debug, Clone)]
pub struct TimezoneEngine {
    catalog: Arc<BoundaryCatalog>,
    config: EngineConfig,
    resolver: PointResolver,
    classifier: TemporalClassifier,
    terminator: SolarTerminatorCalculator,
    colors: ColorAssigner,
}

impl Default for TimezoneEngine {
    /// The embedded catalog with default settings.
    ///
    /// Falls back to an empty catalog if the embedded data cannot be loaded;
    /// the failure is logged and every lookup then reports `UnknownRegion`.
    fn default() -> Self {
        let catalog = BoundaryCatalog::embedded().unwrap_or_else(|e| {
            log::error!("Embedded boundary catalog unavailable: {}", e);
            Arc::new(BoundaryCatalog::default())
        });
        Self::build(catalog, EngineConfig::default())
    }
}

impl TimezoneEngine {
    /// Build an engine over `catalog` with a validated `config`.
    pub fn new(catalog: Arc<BoundaryCatalog>, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::build(catalog, config))
    }

    /// The embedded catalog with `config`.
    pub fn with_config(config: EngineConfig) -> EngineResult<Self> {
        Self::new(BoundaryCatalog::embedded()?, config)
    }

    fn build(catalog: Arc<BoundaryCatalog>, config: EngineConfig) -> Self {
        Self {
            resolver: PointResolver::new(Arc::clone(&catalog)),
            classifier: TemporalClassifier::new(config.classification.clone())
                .with_catalog(Arc::clone(&catalog)),
            terminator: SolarTerminatorCalculator::new(&config.terminator),
            colors: ColorAssigner::new(&config.color),
            catalog,
            config,
        }
    }

    pub fn catalog(&self) -> &BoundaryCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn classifier(&self) -> &TemporalClassifier {
        &self.classifier
    }

    pub fn lookup(&self, region_id: &str) -> EngineResult<&TimezoneRegion> {
        self.catalog.lookup(region_id)
    }

    pub fn related_ids(&self, region_id: &str) -> EngineResult<BTreeSet<&str>> {
        self.catalog.related_ids(region_id)
    }

    pub fn resolve(&self, latitude: f64, longitude: f64) -> EngineResult<ResolvedPoint> {
        self.resolver.resolve(latitude, longitude)
    }

    pub fn terminator(&self, instant: DateTime<Utc>) -> SolarState {
        self.terminator.terminator(instant)
    }

    pub fn is_lit(&self, point: GeoPoint, instant: DateTime<Utc>) -> bool {
        self.terminator.is_lit(point, instant)
    }

    pub fn classify(
        &self,
        region_id: &str,
        instant: DateTime<Utc>,
    ) -> EngineResult<TemporalClassification> {
        self.classifier.classify(region_id, instant)
    }

    /// Display color for an identifier.
    ///
    /// Catalog regions (and their aliases) use the color stored with the
    /// region, so map, legend and selector agree; any other identifier gets
    /// the configured derived color.
    pub fn color_for(&self, region_id: &str) -> Rgb {
        match self.catalog.lookup(region_id) {
            Ok(region) => region.color(),
            Err(_) => self.colors.color_for(region_id),
        }
    }

    /// Path of a region's boundary under `projection`. Aliases draw their
    /// canonical boundary.
    pub fn boundary_path<P: Projection + ?Sized>(
        &self,
        region_id: &str,
        projection: &P,
    ) -> EngineResult<String> {
        let region = self.catalog.lookup(region_id)?;
        Ok(to_path(region.boundary(), projection))
    }
}
