//! Injectable sources of time and identity.
//!
//! Item creation needs "now" and a fresh id. Both are passed in through these
//! traits so creation logic stays deterministic under test.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::id::ItemId;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh item identifiers. Every call must return a distinct id.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ItemId;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Random time-ordered UUIDv7 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&self) -> ItemId {
        ItemId::new()
    }
}

/// Counter-backed identifiers (`00000000-...-000000000001`, `...-002`, ...).
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ItemId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ItemId::from_uuid(Uuid::from_u128(u128::from(n)))
    }
}
