//! The solar terminator.
//!
//! The terminator is the great circle 90° away from the subsolar point. For
//! a longitude λ it crosses latitude
//!
//! ```text
//! φ(λ) = atan(-cos(λ - λs) / tan δ)
//! ```
//!
//! where (δ, λs) is the subsolar point. Sampling λ over [-180°, 180°] gives a
//! curve spanning the whole map width.

use chrono::{DateTime, Utc};
use qtty::{Degree, Degrees, Radians};
use serde::Serialize;

use crate::config::TerminatorSettings;
use crate::core::domain::GeoPoint;
use crate::geometry::angular_distance;
use crate::solar::position::subsolar_point;

/// Declinations closer to zero than this are nudged away so `tan δ` stays
/// non-zero; at the equinoxes the curve degenerates to two meridians.
const MIN_DECLINATION_DEG: f64 = 1e-6;

/// Day/night state of the globe at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarState {
    instant: DateTime<Utc>,
    subsolar: GeoPoint,
    curve: Vec<GeoPoint>,
}

impl SolarState {
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn subsolar(&self) -> GeoPoint {
        self.subsolar
    }

    /// Terminator samples, west to east.
    pub fn curve(&self) -> &[GeoPoint] {
        &self.curve
    }

    /// `true` when the sun is above the geometric horizon at `point`.
    pub fn is_lit(&self, point: GeoPoint) -> bool {
        angular_distance(point, self.subsolar) < Degrees::new(90.0)
    }

    /// Sun altitude above the geometric horizon at `point`.
    pub fn sun_elevation(&self, point: GeoPoint) -> Degrees {
        Degrees::new(90.0) - angular_distance(point, self.subsolar)
    }

    /// The night side as a polygon: the terminator closed over the dark pole.
    ///
    /// Meant for shading with [`to_path`](crate::geometry::to_path) under a
    /// flat projection.
    pub fn night_polygon(&self) -> Vec<GeoPoint> {
        let dark_pole = if self.subsolar.latitude() >= 0.0 {
            -90.0
        } else {
            90.0
        };
        let mut polygon = Vec::with_capacity(self.curve.len() + 2);
        polygon.extend_from_slice(&self.curve);
        polygon.push(GeoPoint::wrapped(dark_pole, 180.0));
        polygon.push(GeoPoint::wrapped(dark_pole, -180.0));
        polygon
    }
}

/// Computes terminator curves at a fixed longitude resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTerminatorCalculator {
    longitude_step_deg: f64,
}

impl Default for SolarTerminatorCalculator {
    fn default() -> Self {
        Self::new(&TerminatorSettings::default())
    }
}

impl SolarTerminatorCalculator {
    /// A step outside (0°, 90°] falls back to 1°.
    pub fn new(settings: &TerminatorSettings) -> Self {
        let mut step = settings.longitude_step_deg;
        if !(step > 0.0 && step <= 90.0) {
            log::warn!("Terminator step {}° out of range, using 1°", step);
            step = 1.0;
        }
        Self {
            longitude_step_deg: step,
        }
    }

    /// Day/night state at `instant`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tzgeo_rust::solar::SolarTerminatorCalculator;
    ///
    /// let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
    /// let state = SolarTerminatorCalculator::default().terminator(noon);
    ///
    /// // 1° steps from -180 to 180 inclusive
    /// assert_eq!(state.curve().len(), 361);
    /// assert!(state.is_lit(state.subsolar()));
    /// assert!(!state.is_lit(state.subsolar().antipode()));
    /// ```
    pub fn terminator(&self, instant: DateTime<Utc>) -> SolarState {
        let subsolar = subsolar_point(instant);

        let mut declination = subsolar.latitude();
        if declination.abs() < MIN_DECLINATION_DEG {
            declination = MIN_DECLINATION_DEG.copysign(declination);
        }
        let tan_decl = Degrees::new(declination).tan();

        let steps = (360.0 / self.longitude_step_deg).ceil() as usize;
        let curve = (0..=steps)
            .map(|i| {
                let lng = (-180.0 + i as f64 * self.longitude_step_deg).min(180.0);
                let hour_angle = Degrees::new(lng) - subsolar.longitude_deg();
                let lat = Radians::new((-hour_angle.cos() / tan_decl).atan()).to::<Degree>();
                GeoPoint::wrapped(lat.value(), lng)
            })
            .collect();

        SolarState {
            instant,
            subsolar,
            curve,
        }
    }

    /// `true` when `point` is in daylight at `instant`.
    pub fn is_lit(&self, point: GeoPoint, instant: DateTime<Utc>) -> bool {
        angular_distance(point, subsolar_point(instant)) < Degrees::new(90.0)
    }

    /// Sun altitude above the geometric horizon at `point` and `instant`.
    pub fn sun_elevation(&self, point: GeoPoint, instant: DateTime<Utc>) -> Degrees {
        Degrees::new(90.0) - angular_distance(point, subsolar_point(instant))
    }
}
