//! ActivityLog port for recording completed activities

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, SessionContext, UserId},
    rewards::ActivityRecord,
};

/// Append-only log of processed activity records.
///
/// Callers treat this as fire-and-record: the point award never depends
/// on the outcome.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    async fn append_activity(
        &self,
        ctx: &SessionContext,
        user_id: &UserId,
        record: &ActivityRecord,
    ) -> Result<(), DomainError>;
}
