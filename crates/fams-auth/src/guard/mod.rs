//! Path-prefix route policy and the per-request guard decision.

pub mod policy;
pub mod rule;

pub use policy::{GuardAction, RoutePolicy};
pub use rule::{RouteRule, path_has_prefix};
