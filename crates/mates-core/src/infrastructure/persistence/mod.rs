//! In-memory repository implementations
//!
//! Document collections held as `RwLock<HashMap>` keyed by the
//! stringified document key. Per-document writes are atomic, matching
//! what the pipeline assumes of the external store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::aggregates::{Campaign, DonationRequest, DonorProfile};
use crate::domain::value_objects::Email;
use crate::ports::outbound::{
    CampaignRepository, DonorRepository, PersistenceError, RequestRepository,
};

/// In-memory donation-request collection
#[derive(Default)]
pub struct InMemoryRequestRepository {
    docs: RwLock<HashMap<String, DonationRequest>>,
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<DonationRequest>, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        Ok(docs.get(&id.to_string()).cloned())
    }

    async fn list(&self) -> Result<Vec<DonationRequest>, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        let mut all: Vec<_> = docs.values().cloned().collect();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(all)
    }

    async fn save(&self, request: &DonationRequest) -> Result<(), PersistenceError> {
        let mut docs = lock_write(&self.docs)?;
        docs.insert(request.doc_key(), request.clone());
        Ok(())
    }

    async fn count(&self) -> Result<u64, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        Ok(docs.len() as u64)
    }
}

/// In-memory campaign collection
#[derive(Default)]
pub struct InMemoryCampaignRepository {
    docs: RwLock<HashMap<String, Campaign>>,
}

impl InMemoryCampaignRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<Campaign>, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        Ok(docs.get(&id.to_string()).cloned())
    }

    async fn list(&self) -> Result<Vec<Campaign>, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        let mut all: Vec<_> = docs.values().cloned().collect();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(all)
    }

    async fn save(&self, campaign: &Campaign) -> Result<(), PersistenceError> {
        let mut docs = lock_write(&self.docs)?;
        docs.insert(campaign.doc_key(), campaign.clone());
        Ok(())
    }

    async fn count(&self) -> Result<u64, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        Ok(docs.len() as u64)
    }
}

/// In-memory donor collection, keyed by auth uid
#[derive(Default)]
pub struct InMemoryDonorRepository {
    docs: RwLock<HashMap<String, DonorProfile>>,
}

impl InMemoryDonorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn find_by_uid(&self, uid: &str) -> Result<Option<DonorProfile>, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        Ok(docs.get(uid).cloned())
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<DonorProfile>, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        Ok(docs.values().find(|d| &d.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<DonorProfile>, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        let mut all: Vec<_> = docs.values().cloned().collect();
        all.sort_by_key(|d| d.id);
        Ok(all)
    }

    async fn save(&self, donor: &DonorProfile) -> Result<(), PersistenceError> {
        let mut docs = lock_write(&self.docs)?;
        docs.insert(donor.uid.clone(), donor.clone());
        Ok(())
    }

    async fn count(&self) -> Result<u64, PersistenceError> {
        let docs = lock_read(&self.docs)?;
        Ok(docs.len() as u64)
    }
}

fn lock_read<T>(
    lock: &RwLock<T>,
) -> Result<std::sync::RwLockReadGuard<'_, T>, PersistenceError> {
    lock.read()
        .map_err(|_| PersistenceError::Connection("collection lock poisoned".into()))
}

fn lock_write<T>(
    lock: &RwLock<T>,
) -> Result<std::sync::RwLockWriteGuard<'_, T>, PersistenceError> {
    lock.write()
        .map_err(|_| PersistenceError::Connection("collection lock poisoned".into()))
}
