//! Boundary data loading.
//!
//! The catalog is fed from a JSON document. The embedded default lives in
//! `data/boundaries.json`; any other source producing the same shape can be
//! swapped in through [`BoundaryCatalog::from_json_str`].
//!
//! # Format
//!
//! ```json
//! {
//!   "regions": [
//!     {
//!       "id": "Europe/London",
//!       "name": "London",
//!       "color": "#1f77b4",
//!       "center": [51.5, -0.1],
//!       "boundary": [[49.8, -8.7], [49.8, 1.8], [60.9, 1.8], [60.9, -8.7]]
//!     }
//!   ],
//!   "related": [
//!     { "canonical": "Europe/Paris", "members": ["Europe/Brussels"] }
//!   ]
//! }
//! ```
//!
//! Coordinates are `[latitude, longitude]` pairs in degrees. `color` is
//! optional (derived from the identifier when absent) and so is `related`.
//!
//! [`BoundaryCatalog::from_json_str`]: crate::catalog::BoundaryCatalog::from_json_str

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::core::domain::{GeoPoint, RelatedRegionGroup};
use crate::core::error::{EngineError, EngineResult};

/// One region as stored in the boundary data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    pub center: GeoPoint,
    pub boundary: Vec<GeoPoint>,
}

/// The whole boundary document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryDocument {
    pub regions: Vec<BoundaryRecord>,
    #[serde(default)]
    pub related: Vec<RelatedRegionGroup>,
}

/// Parse a boundary document, reporting the JSON path of the first bad field.
///
/// Coordinates are range-checked during deserialization, so an out-of-range
/// vertex fails here with its exact location.
///
/// # Examples
///
/// ```
/// use tzgeo_rust::catalog::parse_boundary_document;
///
/// let bad = r#"{"regions": [{"id": "X", "name": "X", "center": [0, 0],
///               "boundary": [[0, 0], [0, 1], [95, 1]]}]}"#;
/// let err = parse_boundary_document(bad).unwrap_err();
/// assert!(err.to_string().contains("boundary"));
/// ```
pub fn parse_boundary_document(json: &str) -> EngineResult<BoundaryDocument> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer).map_err(|e| {
        EngineError::CatalogLoad(format!("{} at {}", e.inner(), e.path()))
    })
}
