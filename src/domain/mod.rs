//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, session context)
//! - `rewards` - Activity point awards and reward tiers
//! - `wellness` - Stress readings and the rolling retention window
//! - `user` - The user profile aggregate tying both together

pub mod foundation;
pub mod rewards;
pub mod user;
pub mod wellness;
