//! Route handlers organized by domain.

pub mod assets;
pub mod auth;
pub mod health;
pub mod notifications;
pub mod pages;
pub mod requests;
pub mod transfers;
pub mod uploads;
pub mod users;
