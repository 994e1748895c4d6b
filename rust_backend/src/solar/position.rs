//! Low-precision solar position.

use chrono::{DateTime, Timelike, Utc};
use qtty::Degrees;
use serde::Serialize;

use crate::core::domain::GeoPoint;

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Julian Day of J2000.0.
const J2000_JD: f64 = 2_451_545.0;

/// Sun position terms for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    pub declination: Degrees,
    /// Apparent minus mean solar time, in minutes.
    pub equation_of_time_minutes: f64,
}

/// Julian Day for a UTC instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tzgeo_rust::solar::julian_day;
///
/// let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(julian_day(j2000), 2_451_545.0);
/// ```
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let secs = instant.timestamp() as f64 + instant.timestamp_subsec_nanos() as f64 * 1e-9;
    secs / 86_400.0 + UNIX_EPOCH_JD
}

fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Geometric mean longitude of the sun (degrees)
fn geom_mean_long_sun(t: f64) -> f64 {
    (280.46646 + t * (36000.76983 + 0.0003032 * t)).rem_euclid(360.0)
}

/// Geometric mean anomaly of the sun (degrees)
fn geom_mean_anomaly_sun(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

fn eccent_earth_orbit(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Sun equation of center (degrees)
fn sun_eq_of_center(t: f64) -> f64 {
    let m = geom_mean_anomaly_sun(t).to_radians();

    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

/// Sun apparent longitude (degrees)
fn sun_apparent_long(t: f64) -> f64 {
    let true_long = geom_mean_long_sun(t) + sun_eq_of_center(t);
    true_long - 0.00569 - 0.00478 * (125.04 - 1934.136 * t).to_radians().sin()
}

/// Corrected obliquity of the ecliptic (degrees)
fn obliq_corr(t: f64) -> f64 {
    let mean = 23.0 + (26.0 + (21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0;
    mean + 0.00256 * (125.04 - 1934.136 * t).to_radians().cos()
}

fn sun_declination(t: f64) -> f64 {
    let e = obliq_corr(t).to_radians();
    let lambda = sun_apparent_long(t).to_radians();

    (e.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time (minutes)
fn eq_of_time(t: f64) -> f64 {
    let e = obliq_corr(t).to_radians();
    let l0 = geom_mean_long_sun(t).to_radians();
    let ecc = eccent_earth_orbit(t);
    let m = geom_mean_anomaly_sun(t).to_radians();

    let y = (e / 2.0).tan().powi(2);

    let etime = y * (2.0 * l0).sin() - 2.0 * ecc * m.sin()
        + 4.0 * ecc * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * ecc * ecc * (2.0 * m).sin();

    etime.to_degrees() * 4.0
}

/// Declination and equation of time at `instant`.
pub fn solar_position(instant: DateTime<Utc>) -> SolarPosition {
    let t = julian_century(julian_day(instant));
    SolarPosition {
        declination: Degrees::new(sun_declination(t)),
        equation_of_time_minutes: eq_of_time(t),
    }
}

/// The point on Earth where the sun is at the zenith at `instant`.
///
/// Latitude is the solar declination. Longitude is where apparent solar time
/// is noon: each minute of UTC moves it 0.25° west, shifted by the equation
/// of time.
pub fn subsolar_point(instant: DateTime<Utc>) -> GeoPoint {
    let position = solar_position(instant);
    let utc_minutes = instant.num_seconds_from_midnight() as f64 / 60.0
        + instant.nanosecond() as f64 / 60e9;

    let longitude = -(utc_minutes + position.equation_of_time_minutes - 720.0) / 4.0;
    GeoPoint::wrapped(position.declination.value(), longitude)
}
