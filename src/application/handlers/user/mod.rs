//! User handlers - profile lifecycle.

mod create_profile;

pub use create_profile::{CreateProfileHandler, CreateProfileResult};
