//! Timezone geospatial resolution engine.
//!
//! Answers four questions for map and selector front ends:
//!
//! - which timezone region contains (or is nearest to) a coordinate
//!   ([`resolver`], over the static [`catalog`])
//! - where the day/night terminator lies at an instant ([`solar`])
//! - whether a region's local time is business hours, night, weekend or
//!   close to a DST change ([`temporal`])
//! - which stable color a region is drawn with ([`color`])
//!
//! [`geometry`] holds the polygon and projection math they share and
//! [`engine::TimezoneEngine`] ties everything together. The engine never
//! reads the clock or the filesystem on its own: instants come from the
//! caller and the boundary data is compiled in.

pub mod catalog;
pub mod color;
pub mod config;
pub mod core;
pub mod engine;
pub mod geometry;
pub mod resolver;
pub mod solar;
pub mod temporal;

#[cfg(feature = "python")]
pub mod python;

pub use crate::core::{EngineError, EngineResult};
pub use crate::engine::TimezoneEngine;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Timezone engine bindings for Python front ends
#[cfg(feature = "python")]
#[pymodule]
fn tzgeo_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::resolve, m)?)?;
    m.add_function(wrap_pyfunction!(python::color_for, m)?)?;
    m.add_function(wrap_pyfunction!(python::related_ids, m)?)?;
    m.add_function(wrap_pyfunction!(python::boundary_path_equirectangular, m)?)?;

    m.add_function(wrap_pyfunction!(python::classify, m)?)?;
    m.add_function(wrap_pyfunction!(python::is_lit, m)?)?;
    m.add_function(wrap_pyfunction!(python::terminator_curve, m)?)?;

    Ok(())
}
