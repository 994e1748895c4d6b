//! Coordinate math for region boundaries.
//!
//! # Modules
//!
//! - [`polygon`]: Containment test, centroid and bounding box, with
//!   antimeridian-aware normalisation
//! - [`distance`]: Great-circle (haversine) distance and central angle
//! - [`path`]: Projection-agnostic conversion of a polygon to an SVG-style path
//! - [`projection`]: A stock equirectangular view projection with pan/zoom
//!
//! Everything here is a pure function of its inputs.

pub mod distance;
pub mod path;
pub mod polygon;
pub mod projection;

#[cfg(test)]
mod geometry_tests;

pub use distance::{angular_distance, great_circle_distance, EARTH_RADIUS};
pub use path::{parse_path, to_path, ParsedPath, Projection};
pub use polygon::{centroid, point_in_polygon, BoundingBox};
pub use projection::Equirectangular;
