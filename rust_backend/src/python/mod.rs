//! Python bindings for the timezone engine.
//!
//! Exposes the engine to Python via PyO3 so map and selector front ends can
//! call it directly. All functions share one [`TimezoneEngine`] over the
//! embedded catalog, initialised on first use.
//!
//! # Modules
//!
//! - [`regions`]: Point resolution, colors and boundary paths
//! - [`time_bindings`]: Local-time classification and day/night queries
//!
//! # Python API
//!
//! All functions are available in the `tzgeo_rust` Python module after installation.
//! Unknown region identifiers raise `KeyError`; bad coordinates, datetimes
//! and configuration raise `ValueError`.

use once_cell::sync::Lazy;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::PyErr;

use crate::core::error::EngineError;
use crate::engine::TimezoneEngine;

pub mod regions;
pub mod time_bindings;

pub use regions::*;
pub use time_bindings::*;

pub(crate) static ENGINE: Lazy<TimezoneEngine> = Lazy::new(TimezoneEngine::default);

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> PyErr {
        match err {
            EngineError::UnknownRegion(id) => PyKeyError::new_err(id),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}
