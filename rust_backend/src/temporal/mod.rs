//! Local-time classification for timezone regions.
//!
//! Timezone rules come from the IANA database compiled into `chrono-tz`;
//! nothing here reimplements offset or DST arithmetic. All instants are
//! supplied by the caller, so every call is a pure function of its inputs.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, Offset, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::{OffsetComponents, Tz};

use crate::catalog::BoundaryCatalog;
use crate::config::ClassificationSettings;
use crate::core::domain::TemporalClassification;
use crate::core::error::{EngineError, EngineResult};


/// Classifies local wall-clock time for a region at a UTC instant.
#[derive(Debug, Clone, Default)]
pub struct TemporalClassifier {
    settings: ClassificationSettings,
    catalog: Option<Arc<BoundaryCatalog>>,
}

impl TemporalClassifier {
    pub fn new(settings: ClassificationSettings) -> Self {
        Self {
            settings,
            catalog: None,
        }
    }

    /// Also accept identifiers the IANA database does not know but the
    /// catalog aliases to a known region.
    pub fn with_catalog(mut self, catalog: Arc<BoundaryCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn settings(&self) -> &ClassificationSettings {
        &self.settings
    }

    /// Resolve a region identifier to its timezone rules.
    ///
    /// # Errors
    ///
    /// `UnknownRegion` when neither the IANA database nor the catalog knows `region_id`.
    pub fn timezone(&self, region_id: &str) -> EngineResult<Tz> {
        if let Ok(tz) = region_id.parse::<Tz>() {
            return Ok(tz);
        }

        let canonical = match &self.catalog {
            Some(catalog) => catalog.canonical_id(region_id)?,
            None => return Err(EngineError::UnknownRegion(region_id.to_string())),
        };
        log::debug!("{} is not an IANA zone, using {}", region_id, canonical);

        canonical
            .parse::<Tz>()
            .map_err(|_| EngineError::UnknownRegion(region_id.to_string()))
    }

    /// Classify the local time of `region_id` at `instant`.
    ///
    /// The flags are independent of one another; any combination can hold.
    ///
    /// # Arguments
    /// * `region_id` - IANA identifier (or catalog alias)
    /// * `instant` - UTC instant to classify
    ///
    /// # Returns
    /// * `Ok(TemporalClassification)` with local time, offset and flags
    /// * `Err(EngineError::UnknownRegion)` for an unknown identifier
    /// * `Err(EngineError::InvalidInstant)` when the lookahead overflows
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tzgeo_rust::temporal::TemporalClassifier;
    ///
    /// let classifier = TemporalClassifier::default();
    /// let saturday_noon = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    /// let c = classifier.classify("Europe/London", saturday_noon).unwrap();
    ///
    /// assert!(c.is_business_hours);
    /// assert!(c.is_weekend);
    /// assert!(c.is_daylight_saving);
    /// assert_eq!(c.utc_offset_seconds, 3600);
    /// ```
    pub fn classify(
        &self,
        region_id: &str,
        instant: DateTime<Utc>,
    ) -> EngineResult<TemporalClassification> {
        let tz = self.timezone(region_id)?;
        let local = instant.with_timezone(&tz);
        let offset = tz.offset_from_utc_datetime(&instant.naive_utc());

        let lookahead = Duration::try_hours(self.settings.dst_lookahead_hours).ok_or_else(|| {
            EngineError::InvalidInstant(format!(
                "lookahead of {} hours is out of range",
                self.settings.dst_lookahead_hours
            ))
        })?;
        let later = shift(instant, lookahead)?;
        let offset_now = offset.fix().local_minus_utc();
        let offset_later = utc_offset_seconds(tz, later);

        let hour = local.hour();
        Ok(TemporalClassification {
            is_business_hours: self.in_business_hours(hour),
            is_night_hours: self.in_night_hours(hour),
            is_weekend: matches!(local.weekday(), Weekday::Sat | Weekday::Sun),
            is_daylight_saving: offset.dst_offset() != Duration::zero(),
            is_approaching_dst_transition: offset_now != offset_later,
            local_time: local.naive_local(),
            utc_offset_seconds: offset_now,
        })
    }

    /// First instant after `instant`, within `window`, at which the UTC
    /// offset of `region_id` differs from its offset at `instant`.
    ///
    /// Scans hour by hour, then bisects the bracketing hour down to the
    /// second, so the result is exact for transitions on whole seconds.
    /// Two transitions inside one hour are not distinguished.
    pub fn next_offset_change(
        &self,
        region_id: &str,
        instant: DateTime<Utc>,
        window: Duration,
    ) -> EngineResult<Option<DateTime<Utc>>> {
        let tz = self.timezone(region_id)?;
        if window <= Duration::zero() {
            return Ok(None);
        }

        let end = shift(instant, window)?;
        let base = utc_offset_seconds(tz, instant);

        let mut lo = instant;
        loop {
            let hi = shift(lo, Duration::hours(1))?.min(end);
            if utc_offset_seconds(tz, hi) != base {
                return Ok(Some(bisect_change(tz, base, lo, hi)));
            }
            if hi >= end {
                return Ok(None);
            }
            lo = hi;
        }
    }

    fn in_business_hours(&self, hour: u32) -> bool {
        (self.settings.business_start_hour..self.settings.business_end_hour).contains(&hour)
    }

    fn in_night_hours(&self, hour: u32) -> bool {
        let start = self.settings.night_start_hour;
        let end = self.settings.night_end_hour;
        if start <= end {
            (start..end).contains(&hour)
        } else {
            hour >= start || hour < end
        }
    }
}

fn utc_offset_seconds(tz: Tz, instant: DateTime<Utc>) -> i32 {
    tz.offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc()
}

fn shift(instant: DateTime<Utc>, by: Duration) -> EngineResult<DateTime<Utc>> {
    instant.checked_add_signed(by).ok_or_else(|| {
        EngineError::InvalidInstant(format!("{} shifted by {} is out of range", instant, by))
    })
}

/// Offset equals `base` at `lo` and differs at `hi`.
fn bisect_change(tz: Tz, base: i32, mut lo: DateTime<Utc>, mut hi: DateTime<Utc>) -> DateTime<Utc> {
    while (hi - lo).num_seconds() > 1 {
        let mid = lo + Duration::seconds((hi - lo).num_seconds() / 2);
        if utc_offset_seconds(tz, mid) == base {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}
