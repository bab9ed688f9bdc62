//! # fams-service
//!
//! Business logic for the faculty asset registry. Every privileged operation
//! takes a [`RequestContext`] and checks the permission table before touching
//! a repository or the upload directory.

pub mod asset;
pub mod auth;
pub mod context;
pub mod notification;
pub mod request;
pub mod transfer;
pub mod user;

pub use context::RequestContext;
