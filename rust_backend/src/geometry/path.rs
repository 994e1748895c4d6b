//! Polygon to path conversion.
//!
//! Paths use the SVG path-data subset `M x,y L x,y ... Z`: one move-to for the
//! first vertex, one line-to per following vertex and a close command. The
//! caller supplies the projection, so the same boundary can be drawn under any
//! pan/zoom or map projection.

use std::fmt::Write;

use crate::core::domain::GeoPoint;

/// Maps a geographic point to 2D view coordinates.
///
/// Implemented for any `Fn(GeoPoint) -> (f64, f64)`, so closures work
/// directly:
///
/// ```
/// use tzgeo_rust::core::domain::GeoPoint;
/// use tzgeo_rust::geometry::to_path;
///
/// let p = |lat, lng| GeoPoint::new(lat, lng).unwrap();
/// let tri = [p(0.0, 0.0), p(0.0, 10.0), p(10.0, 0.0)];
/// let path = to_path(&tri, &|g: GeoPoint| (g.longitude(), g.latitude()));
/// assert_eq!(path, "M0,0 L10,0 L0,10 Z");
/// ```
pub trait Projection {
    fn project(&self, point: GeoPoint) -> (f64, f64);
}

impl<F> Projection for F
where
    F: Fn(GeoPoint) -> (f64, f64),
{
    fn project(&self, point: GeoPoint) -> (f64, f64) {
        self(point)
    }
}

/// Converts a polygon into a closed path string.
///
/// Degrades to an empty string, never an error, when the polygon has fewer
/// than 3 vertices or when the projection yields a non-finite coordinate.
pub fn to_path<P>(polygon: &[GeoPoint], projection: &P) -> String
where
    P: Projection + ?Sized,
{
    if polygon.len() < 3 {
        log::debug!(
            "to_path: degenerate boundary with {} vertices, emitting empty path",
            polygon.len()
        );
        return String::new();
    }

    let mut out = String::with_capacity(polygon.len() * 16);
    for (i, vertex) in polygon.iter().enumerate() {
        let (x, y) = projection.project(*vertex);
        if !(x.is_finite() && y.is_finite()) {
            log::debug!("to_path: projection produced a non-finite coordinate");
            return String::new();
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            out.push(' ');
        }
        // writing into a String cannot fail
        let _ = write!(out, "{}{},{}", cmd, x, y);
    }
    out.push_str(" Z");
    out
}

/// A path read back by [`parse_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPath {
    pub points: Vec<(f64, f64)>,
    pub closed: bool,
}

/// Parses the `M/L/Z` path format emitted by [`to_path`].
///
/// Returns `None` when a token is malformed, when the path does not start
/// with a move-to, or when anything follows the close command. The empty
/// string parses to an empty, open path.
pub fn parse_path(path: &str) -> Option<ParsedPath> {
    let mut points = Vec::new();
    let mut closed = false;

    for token in path.split_whitespace() {
        if closed {
            return None;
        }
        if token == "Z" {
            closed = true;
            continue;
        }

        let coords = if points.is_empty() {
            token.strip_prefix('M')?
        } else {
            token.strip_prefix('L')?
        };
        let (x, y) = coords.split_once(',')?;
        points.push((x.parse().ok()?, y.parse().ok()?));
    }

    Some(ParsedPath { points, closed })
}
