//! Static registry of timezone regions.
//!
//! - [`loader`]: The boundary record format and its JSON parser
//! - [`registry`]: [`BoundaryCatalog`], the read-only, identifier-keyed
//!   registry built from those records, and the embedded default catalog
//!
//! # Example
//!
//! ```
//! use tzgeo_rust::catalog::BoundaryCatalog;
//!
//! let catalog = BoundaryCatalog::embedded().unwrap();
//! let london = catalog.lookup("Europe/London").unwrap();
//! assert_eq!(london.name(), "London");
//!
//! // aliases resolve to their canonical boundary
//! assert_eq!(catalog.canonical_id("America/Detroit").unwrap(), "America/New_York");
//! ```

pub mod loader;
pub mod registry;

#[cfg(test)]
mod catalog_tests;

pub use loader::{parse_boundary_document, BoundaryDocument, BoundaryRecord};
pub use registry::BoundaryCatalog;
