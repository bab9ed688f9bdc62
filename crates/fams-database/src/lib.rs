//! # fams-database
//!
//! PostgreSQL connection management, migrations, and concrete repository
//! implementations for all FAMS entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::{DatabasePool, mask_password};
