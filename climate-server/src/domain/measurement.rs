//! Row shapes read from the measurement and station tables.
//!
//! Each query shape binds straight into one of these structs; nothing is
//! reflected from the schema at runtime.

use sqlx::FromRow;

/// Temperature observations on or after this date are served by the tobs route.
///
/// This is a fixed cutoff, not "one year before the latest record".
pub const TOBS_CUTOFF_DATE: &str = "2016-08-23";

/// One day's precipitation reading.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Precipitation {
    /// ISO date, `YYYY-MM-DD`
    pub date: String,

    /// Precipitation amount, absent for some readings
    pub prcp: Option<f64>,
}

/// One day's temperature observation.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureObservation {
    pub tobs: f64,
    pub date: String,
}

/// Raw result of the aggregate query.
///
/// The statistics are `NULL` when no row falls inside the range, and
/// `start_matches` counts measurements whose canonical date equals the
/// canonical start date.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct AggregateRow {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
    pub observations: i64,
    pub start_matches: i64,
}

/// Minimum, mean and maximum temperature over a date range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    pub tmin: f64,
    pub tavg: f64,
    pub tmax: f64,
}

impl AggregateRow {
    /// Interpret the aggregate row.
    ///
    /// Returns `None` when the start date matches no measurement or the range
    /// holds no observations, since min/avg/max of nothing is undefined.
    pub fn into_stats(self) -> Option<TemperatureStats> {
        if self.start_matches == 0 || self.observations == 0 {
            return None;
        }
        Some(TemperatureStats {
            tmin: self.tmin?,
            tavg: self.tavg?,
            tmax: self.tmax?,
        })
    }
}
