//! # fams-entity
//!
//! Domain entity models for FAMS. Every struct in this crate represents a
//! database table row or a domain value object. Database entities derive
//! `sqlx::FromRow`; enums map onto PostgreSQL enum types.

pub mod asset;
pub mod notification;
pub mod request;
pub mod transfer;
pub mod user;
