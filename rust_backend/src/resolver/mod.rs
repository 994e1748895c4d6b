//! Point to timezone resolution.
//!
//! Exact polygon containment first, nearest region center second. Both passes
//! walk the catalog in insertion order; the first region wins ties. O(n) per
//! call, which is fine for catalogs of tens to low hundreds of regions and
//! interaction-driven call rates.

use std::sync::Arc;

use qtty::Kilometers;

use crate::catalog::BoundaryCatalog;
use crate::core::domain::{GeoPoint, MatchKind, ResolvedPoint};
use crate::core::error::{EngineError, EngineResult};
use crate::geometry::{great_circle_distance, point_in_polygon};


/// Resolves coordinates against a shared catalog.
#[derive(Debug, Clone)]
pub struct PointResolver {
    catalog: Arc<BoundaryCatalog>,
}

impl PointResolver {
    pub fn new(catalog: Arc<BoundaryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &BoundaryCatalog {
        &self.catalog
    }

    /// Resolve a raw (latitude, longitude) pair in degrees.
    ///
    /// # Errors
    ///
    /// * `InvalidCoordinate` when the input is out of range
    /// * `UnknownRegion` only when the catalog is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use tzgeo_rust::catalog::BoundaryCatalog;
    /// use tzgeo_rust::core::domain::MatchKind;
    /// use tzgeo_rust::resolver::PointResolver;
    ///
    /// let resolver = PointResolver::new(BoundaryCatalog::embedded().unwrap());
    /// let hit = resolver.resolve(51.5, -0.1).unwrap();
    /// assert_eq!(hit.region_id, "Europe/London");
    /// assert_eq!(hit.kind, MatchKind::Exact);
    /// assert_eq!(hit.distance.value(), 0.0);
    /// ```
    pub fn resolve(&self, latitude: f64, longitude: f64) -> EngineResult<ResolvedPoint> {
        let point = GeoPoint::new(latitude, longitude)?;
        self.resolve_point(point)
    }

    /// Resolve an already validated point.
    pub fn resolve_point(&self, point: GeoPoint) -> EngineResult<ResolvedPoint> {
        if let Some(region) = self
            .catalog
            .all()
            .iter()
            .find(|r| point_in_polygon(point, r.boundary()))
        {
            return Ok(ResolvedPoint {
                region_id: region.id().to_string(),
                kind: MatchKind::Exact,
                distance: Kilometers::new(0.0),
            });
        }

        // strict `<` keeps the earliest region on ties
        let mut best: Option<(&str, Kilometers)> = None;
        for region in self.catalog.all() {
            let d = great_circle_distance(point, region.center());
            if best.map_or(true, |(_, min)| d < min) {
                best = Some((region.id(), d));
            }
        }

        let (region_id, distance) =
            best.ok_or_else(|| EngineError::UnknownRegion("<empty catalog>".to_string()))?;

        log::debug!(
            "No boundary contains ({:.4}, {:.4}); nearest center is {} at {:.1} km",
            point.latitude(),
            point.longitude(),
            region_id,
            distance.value()
        );

        Ok(ResolvedPoint {
            region_id: region_id.to_string(),
            kind: MatchKind::Nearest,
            distance,
        })
    }
}
