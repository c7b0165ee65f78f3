//! Sequence allocator
//!
//! Sequential integer ids per collection. The original system derived
//! the next id by counting documents at submission time (and, for
//! users, by a read-then-write on a `userCount` sentinel document),
//! which hands the same id to concurrent submissions. Here each
//! collection gets an atomic counter seeded from the existing
//! collection size, so `size 4 -> id 5` still holds while concurrent
//! allocations stay collision-free.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// The document collections holding sequentially keyed records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Donor profiles (`users`)
    Users,
    /// Donation requests (`don_req`)
    DonationRequests,
    /// Campaigns (`campaign`)
    Campaigns,
}

impl Collection {
    /// Collection name as used by the document store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::DonationRequests => "don_req",
            Self::Campaigns => "campaign",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Atomic per-collection id counters
#[derive(Debug, Default)]
pub struct SequenceAllocator {
    users: AtomicU64,
    requests: AtomicU64,
    campaigns: AtomicU64,
}

impl SequenceAllocator {
    /// All counters at zero; first allocation yields 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a counter from the current size of its collection. Called
    /// once at startup, before any allocation.
    pub fn seed(&self, collection: Collection, current_size: u64) {
        self.counter(collection).store(current_size, Ordering::SeqCst);
    }

    /// Allocate the next id for a collection
    pub fn next_id(&self, collection: Collection) -> u64 {
        self.counter(collection).fetch_add(1, Ordering::SeqCst) + 1
    }

    fn counter(&self, collection: Collection) -> &AtomicU64 {
        match collection {
            Collection::Users => &self.users,
            Collection::DonationRequests => &self.requests,
            Collection::Campaigns => &self.campaigns,
        }
    }
}
