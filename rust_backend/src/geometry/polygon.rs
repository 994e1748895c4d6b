//! Polygon containment and summary geometry.
//!
//! Polygons are slices of [`GeoPoint`] vertices, implicitly closed. Longitude
//! is treated as the x axis and latitude as the y axis. A polygon whose
//! longitude span exceeds 180° is taken to cross the ±180° seam: its western
//! hemisphere vertices (and the tested point) are shifted by +360° before any
//! planar computation.

use serde::Serialize;

use crate::core::domain::GeoPoint;

/// Axis-aligned extent of a polygon, in raw (unshifted) degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Bounding box of `polygon`, or `None` when it has no vertices.
    pub fn of(polygon: &[GeoPoint]) -> Option<Self> {
        let first = polygon.first()?;
        let init = Self {
            min_lat: first.latitude(),
            max_lat: first.latitude(),
            min_lng: first.longitude(),
            max_lng: first.longitude(),
        };
        Some(polygon.iter().skip(1).fold(init, |b, p| Self {
            min_lat: b.min_lat.min(p.latitude()),
            max_lat: b.max_lat.max(p.latitude()),
            min_lng: b.min_lng.min(p.longitude()),
            max_lng: b.max_lng.max(p.longitude()),
        }))
    }

    pub fn longitude_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// A span wider than half the globe means the polygon wraps the seam.
    pub fn crosses_antimeridian(&self) -> bool {
        self.longitude_span() > 180.0
    }
}

/// Longitude in the polygon's own frame.
#[inline]
fn unwrap_lng(lng: f64, seam: bool) -> f64 {
    if seam && lng < 0.0 {
        lng + 360.0
    } else {
        lng
    }
}

/// Ray-casting containment test.
///
/// Casts a horizontal ray from `point` towards +x and counts boundary
/// crossings; an odd count means inside. Polygons with fewer than 3 vertices
/// contain nothing.
///
/// # Examples
///
/// ```
/// use tzgeo_rust::core::domain::GeoPoint;
/// use tzgeo_rust::geometry::point_in_polygon;
///
/// let p = |lat, lng| GeoPoint::new(lat, lng).unwrap();
/// let square = [p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)];
/// assert!(point_in_polygon(p(5.0, 5.0), &square));
/// assert!(!point_in_polygon(p(15.0, 5.0), &square));
///
/// // Fiji-like box spanning the seam
/// let pacific = [p(-20.0, 175.0), p(-20.0, -175.0), p(-10.0, -175.0), p(-10.0, 175.0)];
/// assert!(point_in_polygon(p(-15.0, 179.5), &pacific));
/// assert!(point_in_polygon(p(-15.0, -179.5), &pacific));
/// assert!(!point_in_polygon(p(-15.0, 0.0), &pacific));
/// ```
pub fn point_in_polygon(point: GeoPoint, polygon: &[GeoPoint]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let seam = BoundingBox::of(polygon).is_some_and(|b| b.crosses_antimeridian());

    let x = unwrap_lng(point.longitude(), seam);
    let y = point.latitude();

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let xi = unwrap_lng(polygon[i].longitude(), seam);
        let yi = polygon[i].latitude();
        let xj = unwrap_lng(polygon[j].longitude(), seam);
        let yj = polygon[j].latitude();

        // (yi > y) != (yj > y) guarantees yi != yj, so the division is safe
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Arithmetic mean of the vertices.
///
/// Not the area centroid; good enough as a fallback anchor. Seam-crossing
/// polygons are averaged in their unwrapped frame and the result is wrapped
/// back into `(-180, 180]`. Returns `None` for an empty slice.
pub fn centroid(polygon: &[GeoPoint]) -> Option<GeoPoint> {
    let bbox = BoundingBox::of(polygon)?;
    let seam = bbox.crosses_antimeridian();
    let n = polygon.len() as f64;

    let (lat_sum, lng_sum) = polygon.iter().fold((0.0, 0.0), |(la, ln), p| {
        (la + p.latitude(), ln + unwrap_lng(p.longitude(), seam))
    });

    let mut lng = lng_sum / n;
    if lng > 180.0 {
        lng -= 360.0;
    }
    GeoPoint::new(lat_sum / n, lng).ok()
}
