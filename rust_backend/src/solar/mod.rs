//! Day/night geometry.
//!
//! - [`position`]: Sun declination, equation of time and the subsolar point
//!   for a UTC instant (NOAA low-precision solar position)
//! - [`terminator`]: The day/night dividing curve and the lit-point test
//!
//! The low-precision model agrees with published sunrise/sunset times to a
//! few minutes, which is all a map overlay needs. The terminator here is the
//! geometric one (Sun center on the horizon), without refraction.

pub mod position;
pub mod terminator;


pub use position::{julian_day, solar_position, subsolar_point, SolarPosition};
pub use terminator::{SolarState, SolarTerminatorCalculator};
