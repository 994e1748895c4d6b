use chrono::{DateTime, TimeZone, Utc};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::domain::GeoPoint;
use crate::python::ENGINE;

/// Convert a Python datetime to a UTC instant.
///
/// Naive datetimes are taken as UTC; aware ones are converted first.
fn to_utc(dt: &Bound<'_, PyAny>) -> PyResult<DateTime<Utc>> {
    let dt = if dt.getattr("tzinfo")?.is_none() {
        dt.clone()
    } else {
        let utc = dt.py().import("datetime")?.getattr("timezone")?.getattr("utc")?;
        dt.call_method1("astimezone", (utc,))?
    };

    let year = dt.getattr("year")?.extract::<i32>()?;
    let month = dt.getattr("month")?.extract::<u32>()?;
    let day = dt.getattr("day")?.extract::<u32>()?;
    let hour = dt.getattr("hour")?.extract::<u32>()?;
    let minute = dt.getattr("minute")?.extract::<u32>()?;
    let second = dt.getattr("second")?.extract::<u32>()?;
    let microsecond = dt.getattr("microsecond")?.extract::<u32>()?;

    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .and_then(|t| t.checked_add_signed(chrono::Duration::microseconds(microsecond as i64)))
        .ok_or_else(|| pyo3::exceptions::PyValueError::new_err("Invalid datetime"))
}

/// Classify local time of a region at a datetime
///
/// Args:
///     region_id: IANA identifier or catalog alias
///     dt: datetime (naive values are taken as UTC)
///
/// Returns:
///     dict: is_business_hours, is_night_hours, is_weekend, is_daylight_saving,
///     is_approaching_dst_transition, local_time (ISO string), utc_offset_seconds
#[pyfunction]
pub fn classify<'py>(
    py: Python<'py>,
    region_id: &str,
    dt: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyDict>> {
    let c = ENGINE.classify(region_id, to_utc(dt)?)?;

    let out = PyDict::new(py);
    out.set_item("is_business_hours", c.is_business_hours)?;
    out.set_item("is_night_hours", c.is_night_hours)?;
    out.set_item("is_weekend", c.is_weekend)?;
    out.set_item("is_daylight_saving", c.is_daylight_saving)?;
    out.set_item("is_approaching_dst_transition", c.is_approaching_dst_transition)?;
    out.set_item("local_time", c.local_time.format("%Y-%m-%dT%H:%M:%S").to_string())?;
    out.set_item("utc_offset_seconds", c.utc_offset_seconds)?;
    Ok(out)
}

/// True when the sun is above the horizon at (lat, lng) at `dt`
#[pyfunction]
pub fn is_lit(lat: f64, lng: f64, dt: &Bound<'_, PyAny>) -> PyResult<bool> {
    let point = GeoPoint::new(lat, lng)?;
    Ok(ENGINE.is_lit(point, to_utc(dt)?))
}

/// Terminator curve at `dt` as a list of (lat, lng) pairs, west to east
#[pyfunction]
pub fn terminator_curve(dt: &Bound<'_, PyAny>) -> PyResult<Vec<(f64, f64)>> {
    let state = ENGINE.terminator(to_utc(dt)?);
    Ok(state
        .curve()
        .iter()
        .map(|p| (p.latitude(), p.longitude()))
        .collect())
}
