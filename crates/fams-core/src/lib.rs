//! # fams-core
//!
//! Core crate for the faculty asset management service (FAMS). Contains the
//! configuration schemas, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FAMS crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
