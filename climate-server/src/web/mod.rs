//! Web layer for the climate API.
//!
//! Provides the HTTP endpoints over the measurement store.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
