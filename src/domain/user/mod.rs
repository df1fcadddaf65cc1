//! User module - the per-user reward and stress record.
//!
//! # Domain Invariants
//!
//! 1. Each profile belongs to exactly one user
//! 2. A new profile has zero points and no stress readings
//! 3. Reward points only increase

pub mod profile;

pub use profile::UserProfile;
