//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileStore` - per-user profile records in the remote key-value store
//! - `ActivityLog` - fire-and-record log of completed activities
//! - `Clock` - current time for retention and timestamps
//! - `SessionValidator` - access token validation for the HTTP layer

mod activity_log;
mod clock;
mod profile_store;
mod session_validator;

pub use activity_log::ActivityLog;
pub use clock::Clock;
pub use profile_store::ProfileStore;
pub use session_validator::SessionValidator;
