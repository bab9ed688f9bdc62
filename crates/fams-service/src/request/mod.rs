//! Asset requests and their review.

pub mod service;

pub use service::{RequestService, ReviewDecision, SubmitRequest};
