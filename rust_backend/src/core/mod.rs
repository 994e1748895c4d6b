//! Core domain models for timezone resolution.
//!
//! This module defines the fundamental data structures shared by every
//! component of the engine: validated coordinates, timezone regions, resolver
//! output and local-time classification, plus the engine-wide error type.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::{EngineError, EngineResult};
