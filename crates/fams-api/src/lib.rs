//! # fams-api
//!
//! HTTP API layer for FAMS built on Axum.
//!
//! Provides the REST endpoints, the role-aware route guard, extractors,
//! DTOs, and the mapping from domain errors to JSON responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
