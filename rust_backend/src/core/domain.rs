//! Domain models for timezone regions and resolution results.
//!
//! This module provides the core data structures that flow between the
//! engine's components: validated coordinates, the immutable region records
//! held by the catalog, and the per-call outputs of the resolver and the
//! temporal classifier.

use chrono::NaiveDateTime;
use qtty::{Degrees, Kilometers};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::core::error::{EngineError, EngineResult};

/// A geographic coordinate in degrees.
///
/// A `GeoPoint` can only be built from an in-range, finite pair: latitude in
/// `[-90, 90]` and longitude in `[-180, 180]`. Serialized as a
/// `[latitude, longitude]` pair, which is also the vertex format of the
/// boundary data.
///
/// # Examples
///
/// ```
/// use tzgeo_rust::core::domain::GeoPoint;
///
/// let london = GeoPoint::new(51.5, -0.1).unwrap();
/// assert_eq!(london.latitude(), 51.5);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a validated coordinate.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Degrees north, in `[-90, 90]`
    /// * `longitude` - Degrees east, in `[-180, 180]`
    ///
    /// # Returns
    ///
    /// * `Err(EngineError::InvalidCoordinate)` when either value is out of
    ///   range or not finite
    pub fn new(latitude: f64, longitude: f64) -> EngineResult<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lng_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !(lat_ok && lng_ok) {
            return Err(EngineError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds a point from computed values: latitude is clamped to the
    /// poles and an out-of-range longitude is wrapped into `(-180, 180]`.
    /// In-range longitudes, including -180, are kept as given.
    pub(crate) fn wrapped(latitude: f64, longitude: f64) -> Self {
        let longitude = if (-180.0..=180.0).contains(&longitude) {
            longitude
        } else {
            Degrees::new(longitude).wrap_signed().value()
        };
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude as a strongly-typed angle.
    pub fn latitude_deg(&self) -> Degrees {
        Degrees::new(self.latitude)
    }

    /// Longitude as a strongly-typed angle.
    pub fn longitude_deg(&self) -> Degrees {
        Degrees::new(self.longitude)
    }

    /// Returns the diametrically opposite point on the globe.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzgeo_rust::core::domain::GeoPoint;
    ///
    /// let p = GeoPoint::new(10.0, 30.0).unwrap();
    /// let a = p.antipode();
    /// assert_eq!(a.latitude(), -10.0);
    /// assert_eq!(a.longitude(), -150.0);
    /// ```
    pub fn antipode(&self) -> Self {
        let longitude = Degrees::new(self.longitude + 180.0).wrap_signed().value();
        Self {
            latitude: -self.latitude,
            longitude,
        }
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = EngineError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        GeoPoint::new(latitude, longitude)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.latitude, p.longitude)
    }
}

/// A named timezone region with its boundary polygon.
///
/// Regions are built once by the catalog loader and never mutated. The
/// boundary is an implicitly closed polygon: the last vertex connects back to
/// the first, so the first vertex is not repeated.
///
/// # Fields
///
/// * `id` - IANA-style identifier, e.g. `"America/New_York"`
/// * `name` - Human readable display name
/// * `boundary` - Ordered polygon vertices (at least 3)
/// * `center` - Representative point used for nearest-match fallback and markers
/// * `color` - Display color shared by the map overlay, legend and selector
///
/// # Examples
///
/// ```
/// use tzgeo_rust::core::domain::{GeoPoint, TimezoneRegion};
/// use tzgeo_rust::color::Rgb;
///
/// let p = |lat, lng| GeoPoint::new(lat, lng).unwrap();
/// let region = TimezoneRegion::new(
///     "Asia/Tokyo",
///     "Tokyo",
///     vec![p(30.0, 129.0), p(30.0, 146.0), p(46.0, 146.0), p(46.0, 129.0)],
///     p(35.7, 139.7),
///     Rgb::new(0xe3, 0x77, 0xc2),
/// )
/// .unwrap();
///
/// assert_eq!(region.id(), "Asia/Tokyo");
/// assert_eq!(region.boundary().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimezoneRegion {
    id: String,
    name: String,
    boundary: Vec<GeoPoint>,
    center: GeoPoint,
    color: Rgb,
}

impl TimezoneRegion {
    /// Creates a region, rejecting boundaries with fewer than 3 vertices.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        boundary: Vec<GeoPoint>,
        center: GeoPoint,
        color: Rgb,
    ) -> EngineResult<Self> {
        let id = id.into();
        if boundary.len() < 3 {
            return Err(EngineError::DegenerateBoundary {
                id,
                vertices: boundary.len(),
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            boundary,
            center,
            color,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn boundary(&self) -> &[GeoPoint] {
        &self.boundary
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// Identifiers that share one canonical boundary.
///
/// Selecting any member highlights the canonical region's polygon instead of
/// requiring one polygon per city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedRegionGroup {
    pub canonical: String,
    pub members: Vec<String>,
}

impl RelatedRegionGroup {
    /// Returns `true` if `id` is the canonical entry or one of the members.
    pub fn contains(&self, id: &str) -> bool {
        self.canonical == id || self.members.iter().any(|m| m == id)
    }
}

/// How a point was matched to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The point lies inside the region's polygon.
    Exact,
    /// No polygon contains the point; the region with the closest center won.
    Nearest,
}

/// Output of the point resolver.
///
/// # Examples
///
/// ```
/// use tzgeo_rust::core::domain::{MatchKind, ResolvedPoint};
/// use qtty::Kilometers;
///
/// let hit = ResolvedPoint {
///     region_id: "Europe/London".to_string(),
///     kind: MatchKind::Exact,
///     distance: Kilometers::new(0.0),
/// };
/// assert!(hit.is_exact());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPoint {
    pub region_id: String,
    pub kind: MatchKind,
    /// Great-circle distance to the matched center; zero for exact matches.
    pub distance: Kilometers,
}

impl ResolvedPoint {
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}

/// Local-time flags for a (region, instant) pair.
///
/// All flags are independent; any combination may be true at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalClassification {
    pub is_business_hours: bool,
    pub is_night_hours: bool,
    pub is_weekend: bool,
    pub is_daylight_saving: bool,
    /// The UTC offset at the instant differs from the offset one lookahead
    /// window later (24 hours by default).
    pub is_approaching_dst_transition: bool,
    /// Local wall-clock time in the region.
    pub local_time: NaiveDateTime,
    /// Offset from UTC in seconds, east positive.
    pub utc_offset_seconds: i32,
}
