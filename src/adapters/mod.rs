//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session validators (Supabase JWT, static tokens)
//! - `clock` - System and fixed clocks
//! - `http` - axum REST API
//! - `storage` - Profile stores (in-memory, Supabase REST)

pub mod auth;
pub mod clock;
pub mod http;
pub mod storage;

pub use auth::{JwtConfig, JwtSessionValidator, MockSessionValidator};
pub use clock::{FixedClock, SystemClock};
pub use storage::{InMemoryProfileStore, RestProfileStore, RestStoreConfig};
