//! Distances on a spherical Earth.
//!
//! The haversine formula is used for relative ordering (nearest-center
//! search) and for the day/night test, not for surveying.

use qtty::{Degree, Degrees, Kilometers, Radians};

use crate::core::domain::GeoPoint;

/// Mean Earth radius (IUGG).
pub const EARTH_RADIUS: Kilometers = Kilometers::new(6371.0088);

/// Central angle between two points, in `[0°, 180°]`.
///
/// # Examples
///
/// ```
/// use tzgeo_rust::core::domain::GeoPoint;
/// use tzgeo_rust::geometry::angular_distance;
///
/// let north = GeoPoint::new(90.0, 0.0).unwrap();
/// let equator = GeoPoint::new(0.0, 45.0).unwrap();
/// assert!((angular_distance(north, equator).value() - 90.0).abs() < 1e-9);
/// ```
pub fn angular_distance(a: GeoPoint, b: GeoPoint) -> Degrees {
    central_angle(a, b).to::<Degree>()
}

/// Haversine great-circle distance.
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> Kilometers {
    Kilometers::new(central_angle(a, b).value() * EARTH_RADIUS.value())
}

fn central_angle(a: GeoPoint, b: GeoPoint) -> Radians {
    let half_dlat = (b.latitude_deg() - a.latitude_deg()) * 0.5;
    let half_dlng = (b.longitude_deg() - a.longitude_deg()) * 0.5;

    let h = half_dlat.sin().powi(2)
        + a.latitude_deg().cos() * b.latitude_deg().cos() * half_dlng.sin().powi(2);

    // rounding can push h a hair outside [0, 1] for near-antipodal pairs
    Radians::new(2.0 * h.clamp(0.0, 1.0).sqrt().asin())
}
