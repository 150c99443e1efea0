//! Data transfer objects for web responses.
//!
//! Field order here is the key order on the wire.

use serde::Serialize;

use crate::domain::{Precipitation, TemperatureObservation, TemperatureStats};

/// A precipitation reading.
#[derive(Debug, Serialize)]
pub struct PrecipitationResult {
    pub date: String,

    /// `null` when no amount was recorded
    pub prcp: Option<f64>,
}

impl PrecipitationResult {
    pub fn from_row(row: Precipitation) -> Self {
        Self {
            date: row.date,
            prcp: row.prcp,
        }
    }
}

/// A temperature observation.
#[derive(Debug, Serialize)]
pub struct TobsResult {
    pub tobs: f64,
    pub date: String,
}

impl TobsResult {
    pub fn from_row(row: TemperatureObservation) -> Self {
        Self {
            tobs: row.tobs,
            date: row.date,
        }
    }
}

/// Temperature statistics over a date range.
#[derive(Debug, Serialize)]
pub struct TemperatureStatsResponse {
    /// Minimum observed temperature
    pub tmin: f64,

    /// Mean observed temperature
    pub tavg: f64,

    /// Maximum observed temperature
    pub tmax: f64,
}

impl From<TemperatureStats> for TemperatureStatsResponse {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            tmin: stats.tmin,
            tavg: stats.tavg,
            tmax: stats.tmax,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precipitation_keys_in_order() {
        let json = serde_json::to_string(&PrecipitationResult::from_row(Precipitation {
            date: "2017-01-02".into(),
            prcp: None,
        }))
        .unwrap();
        assert_eq!(json, r#"{"date":"2017-01-02","prcp":null}"#);
    }

    #[test]
    fn tobs_keys_in_order() {
        let json = serde_json::to_string(&TobsResult::from_row(TemperatureObservation {
            tobs: 77.0,
            date: "2016-08-23".into(),
        }))
        .unwrap();
        assert_eq!(json, r#"{"tobs":77.0,"date":"2016-08-23"}"#);
    }

    #[test]
    fn stats_keys_in_order() {
        let json = serde_json::to_string(&TemperatureStatsResponse::from(TemperatureStats {
            tmin: 58.0,
            tavg: 74.5,
            tmax: 87.0,
        }))
        .unwrap();
        assert_eq!(json, r#"{"tmin":58.0,"tavg":74.5,"tmax":87.0}"#);
    }
}
