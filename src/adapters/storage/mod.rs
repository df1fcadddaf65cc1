//! Storage adapters for the profile store and activity log ports.
//!
//! - `InMemoryProfileStore` - process-local storage for development and tests
//! - `RestProfileStore` - PostgREST/Supabase REST backend

mod in_memory_profile_store;
mod rest_profile_store;

pub use in_memory_profile_store::InMemoryProfileStore;
pub use rest_profile_store::{RestProfileStore, RestStoreConfig};
