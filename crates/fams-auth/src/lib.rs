//! # fams-auth
//!
//! Authentication and authorization for FAMS.
//!
//! ## Modules
//!
//! - `rbac`: the static permission table and the permission evaluator
//! - `guard`: path-prefix route policy and the per-request guard decision
//! - `session`: the request session and the session resolver seam
//! - `jwt`: session token creation and validation
//! - `password`: Argon2id password hashing and policy enforcement

pub mod guard;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;

pub use guard::{GuardAction, RoutePolicy, RouteRule};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{Permission, RbacEnforcer};
pub use session::{JwtSessionResolver, Session, SessionResolver};
