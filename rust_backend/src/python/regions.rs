use pyo3::prelude::*;

use crate::geometry::Equirectangular;
use crate::python::ENGINE;

/// Resolve a coordinate to a timezone region
///
/// Args:
///     lat: Latitude in degrees, -90..90
///     lng: Longitude in degrees, -180..180
///
/// Returns:
///     tuple: (region_id, kind, distance_km) where kind is "exact" or "nearest"
///
/// Example:
///     >>> import tzgeo_rust
///     >>> tzgeo_rust.resolve(51.5, -0.1)
///     ('Europe/London', 'exact', 0.0)
#[pyfunction]
pub fn resolve(lat: f64, lng: f64) -> PyResult<(String, String, f64)> {
    let hit = ENGINE.resolve(lat, lng)?;
    let kind = if hit.is_exact() { "exact" } else { "nearest" };
    Ok((hit.region_id, kind.to_string(), hit.distance.value()))
}

/// Display color of a region as "#rrggbb"
#[pyfunction]
pub fn color_for(region_id: &str) -> String {
    ENGINE.color_for(region_id).to_hex()
}

/// Identifiers sharing a boundary with `region_id`, sorted
#[pyfunction]
pub fn related_ids(region_id: &str) -> PyResult<Vec<String>> {
    let related = ENGINE.related_ids(region_id)?;
    Ok(related.into_iter().map(str::to_string).collect())
}

/// SVG path of a region's boundary on a whole-world equirectangular map
///
/// Args:
///     region_id: Region identifier or alias
///     width: Map width in pixels
///     height: Map height in pixels
///
/// Returns:
///     str: "M x,y L x,y ... Z"
#[pyfunction]
#[pyo3(signature = (region_id, width=1000.0, height=500.0))]
pub fn boundary_path_equirectangular(region_id: &str, width: f64, height: f64) -> PyResult<String> {
    let projection = Equirectangular::world(width, height);
    Ok(ENGINE.boundary_path(region_id, &projection)?)
}
