//! Core type definitions used across the FAMS workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
