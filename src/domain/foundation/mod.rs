//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the Nimathi domain.

mod auth;
mod errors;
mod ids;
mod session;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActivityId, UserId};
pub use session::SessionContext;
pub use timestamp::Timestamp;
