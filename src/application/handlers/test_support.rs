//! Shared mocks for handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, SessionContext, UserId};
use crate::domain::rewards::ActivityRecord;
use crate::domain::user::UserProfile;
use crate::ports::{ActivityLog, ProfileStore};

pub struct MockProfileStore {
    profiles: Mutex<HashMap<UserId, UserProfile>>,
    fail_reads: bool,
    fail_writes: bool,
    writes: AtomicUsize,
}

impl MockProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: Mutex::new(HashMap::new()),
            fail_reads: false,
            fail_writes: false,
            writes: AtomicUsize::new(0),
        }
    }

    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.id().clone(), profile);
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn stored(&self, user_id: &UserId) -> Option<UserProfile> {
        self.profiles.lock().unwrap().get(user_id).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn unavailable() -> DomainError {
        DomainError::new(ErrorCode::StoreUnavailable, "profile store unavailable")
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn get_profile(
        &self,
        _ctx: &SessionContext,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, DomainError> {
        if self.fail_reads {
            return Err(Self::unavailable());
        }
        Ok(self.profiles.lock().unwrap().get(user_id).cloned())
    }

    async fn create_profile(
        &self,
        _ctx: &SessionContext,
        profile: &UserProfile,
    ) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(Self::unavailable());
        }
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.contains_key(profile.id()) {
            return Err(DomainError::new(ErrorCode::Conflict, "Profile already exists"));
        }
        profiles.insert(profile.id().clone(), profile.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn put_profile(
        &self,
        _ctx: &SessionContext,
        profile: &UserProfile,
    ) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(Self::unavailable());
        }
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.id().clone(), profile.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockActivityLog {
    records: Mutex<Vec<ActivityRecord>>,
    fail: bool,
}

impl MockActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn records(&self) -> Vec<ActivityRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivityLog for MockActivityLog {
    async fn append_activity(
        &self,
        _ctx: &SessionContext,
        _user_id: &UserId,
        record: &ActivityRecord,
    ) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(ErrorCode::StoreUnavailable, "activity log unavailable"));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
