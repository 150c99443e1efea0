//! Core domain types for the climate API.
//!
//! This module contains the date token used for lookups and the row
//! shapes read from the measurement store.

mod date;
mod measurement;

pub use date::{DateRange, DateToken};
pub(crate) use measurement::AggregateRow;
pub use measurement::{
    Precipitation, TOBS_CUTOFF_DATE, TemperatureObservation, TemperatureStats,
};
