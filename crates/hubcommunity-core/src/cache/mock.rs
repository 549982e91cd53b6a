//! Deterministic `CacheStore` double with call counters and failure switches.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{CacheError, CacheStore};
use crate::models::{Community, Event};

/// Per-kind call counts recorded by `MockCacheStore`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheCalls {
    pub saves: usize,
    pub gets: usize,
    pub clears: usize,
}

#[derive(Debug, Default)]
struct MockState {
    events: Vec<Event>,
    communities: Vec<Community>,
    fail_reads: bool,
    fail_writes: bool,
    events_calls: CacheCalls,
    communities_calls: CacheCalls,
}

#[derive(Debug, Default)]
pub struct MockCacheStore {
    state: Mutex<MockState>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an events snapshot already present
    pub fn with_events(events: Vec<Event>) -> Self {
        let store = Self::new();
        store.state.lock().events = events;
        store
    }

    pub fn with_communities(communities: Vec<Community>) -> Self {
        let store = Self::new();
        store.state.lock().communities = communities;
        store
    }

    /// Make every `get_*` fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.state.lock().fail_reads = fail;
    }

    /// Make every `save_*` and `clear_*` fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().fail_writes = fail;
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.lock().events.clone()
    }

    pub fn communities(&self) -> Vec<Community> {
        self.state.lock().communities.clone()
    }

    pub fn events_calls(&self) -> CacheCalls {
        self.state.lock().events_calls
    }

    pub fn communities_calls(&self) -> CacheCalls {
        self.state.lock().communities_calls
    }
}

fn read_failure() -> CacheError {
    CacheError::Unavailable("mock read failure".to_string())
}

fn write_failure() -> CacheError {
    CacheError::Unavailable("mock write failure".to_string())
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn save_events(&self, events: &[Event]) -> Result<(), CacheError> {
        let mut state = self.state.lock();
        state.events_calls.saves += 1;
        if state.fail_writes {
            return Err(write_failure());
        }
        state.events = events.to_vec();
        Ok(())
    }

    async fn get_events(&self) -> Result<Vec<Event>, CacheError> {
        let mut state = self.state.lock();
        state.events_calls.gets += 1;
        if state.fail_reads {
            return Err(read_failure());
        }
        Ok(state.events.clone())
    }

    async fn clear_events(&self) -> Result<(), CacheError> {
        let mut state = self.state.lock();
        state.events_calls.clears += 1;
        if state.fail_writes {
            return Err(write_failure());
        }
        state.events.clear();
        Ok(())
    }

    async fn save_communities(&self, communities: &[Community]) -> Result<(), CacheError> {
        let mut state = self.state.lock();
        state.communities_calls.saves += 1;
        if state.fail_writes {
            return Err(write_failure());
        }
        state.communities = communities.to_vec();
        Ok(())
    }

    async fn get_communities(&self) -> Result<Vec<Community>, CacheError> {
        let mut state = self.state.lock();
        state.communities_calls.gets += 1;
        if state.fail_reads {
            return Err(read_failure());
        }
        Ok(state.communities.clone())
    }

    async fn clear_communities(&self) -> Result<(), CacheError> {
        let mut state = self.state.lock();
        state.communities_calls.clears += 1;
        if state.fail_writes {
            return Err(write_failure());
        }
        state.communities.clear();
        Ok(())
    }
}
