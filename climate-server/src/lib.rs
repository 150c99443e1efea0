//! Hawaii climate API server.
//!
//! A read-only JSON API over daily precipitation and temperature
//! measurements recorded by Hawaiian weather stations.

pub mod config;
pub mod domain;
pub mod store;
pub mod web;
