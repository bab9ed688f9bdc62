//! User administration.

pub mod service;

pub use service::{CreateUserRequest, UserService};
