//! Equirectangular view projection.
//!
//! A ready-made [`Projection`] for flat world maps: longitude maps linearly
//! to x, latitude to y (screen y grows downward). Pan and zoom are expressed
//! as a view center and a pixels-per-degree scale. Callers with their own
//! projection can ignore this type entirely.

use serde::{Deserialize, Serialize};

use crate::core::domain::GeoPoint;
use crate::geometry::path::Projection;

/// Plate carrée projection onto a `width × height` viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equirectangular {
    /// Pixels per degree
    pub scale: f64,
    /// Geographic point shown at the viewport center
    pub center: GeoPoint,
    pub width: f64,
    pub height: f64,
}

impl Equirectangular {
    /// Whole-world view: 360° of longitude fills the viewport width.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzgeo_rust::core::domain::GeoPoint;
    /// use tzgeo_rust::geometry::{Equirectangular, Projection};
    ///
    /// let view = Equirectangular::world(720.0, 360.0);
    /// let (x, y) = view.project(GeoPoint::new(90.0, -180.0).unwrap());
    /// assert_eq!((x, y), (0.0, 0.0));
    /// ```
    pub fn world(width: f64, height: f64) -> Self {
        Self {
            scale: width / 360.0,
            center: GeoPoint::default(),
            width,
            height,
        }
    }

    /// Returns a copy zoomed by `factor` (>1 zooms in).
    pub fn with_zoom(self, factor: f64) -> Self {
        Self {
            scale: self.scale * factor,
            ..self
        }
    }

    /// Returns a copy panned so that `center` sits in the middle of the viewport.
    pub fn with_center(self, center: GeoPoint) -> Self {
        Self { center, ..self }
    }

    /// Inverse projection; `None` when the pixel lies off the globe.
    pub fn unproject(&self, x: f64, y: f64) -> Option<GeoPoint> {
        let lng = self.center.longitude() + (x - self.width / 2.0) / self.scale;
        let lat = self.center.latitude() - (y - self.height / 2.0) / self.scale;
        GeoPoint::new(lat, lng).ok()
    }
}

impl Projection for Equirectangular {
    fn project(&self, point: GeoPoint) -> (f64, f64) {
        let x = self.width / 2.0 + (point.longitude() - self.center.longitude()) * self.scale;
        let y = self.height / 2.0 - (point.latitude() - self.center.latitude()) * self.scale;
        (x, y)
    }
}
