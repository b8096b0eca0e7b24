//! Mock implementations for testing the registration core.
//!
//! `MockChannelStore` enforces the same uniqueness rule as the SQLite store
//! and `MockChannelProvider` answers every lookup with a configurable result
//! while counting calls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::{Channel, ChannelMetadata};
use crate::services::metadata::{ChannelProvider, ProviderError};
use crate::services::registration::{ChannelStore, StoreError};

/// Provider metadata matching the "Example Channel" fixture.
pub fn metadata(channel_id: &str) -> ChannelMetadata {
    ChannelMetadata {
        channel_id: channel_id.to_string(),
        title: "Example Channel".to_string(),
        subscriber_count: 1000,
        video_count: 50,
        thumbnail_url: format!("https://yt3.ggpht.com/{channel_id}.jpg"),
    }
}

// ============================================================================
// Mock Channel Store
// ============================================================================

#[derive(Clone, Default)]
pub struct MockChannelStore {
    data: Arc<Mutex<HashMap<String, Channel>>>,
    conflict_next_insert: Arc<Mutex<bool>>,
}

impl MockChannelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a stored channel (for verification).
    pub fn get(&self, channel_id: &str) -> Option<Channel> {
        self.data.lock().unwrap().get(channel_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.data.lock().unwrap().len()
    }

    /// Make the next insert fail as if another writer got there first.
    pub fn fail_next_insert_with_conflict(&self) {
        *self.conflict_next_insert.lock().unwrap() = true;
    }
}

#[async_trait]
impl ChannelStore for MockChannelStore {
    async fn find_by_id(&self, channel_id: &str) -> Result<Option<Channel>, StoreError> {
        Ok(self.get(channel_id))
    }

    async fn insert(&self, channel: &Channel) -> Result<(), StoreError> {
        let forced = std::mem::take(&mut *self.conflict_next_insert.lock().unwrap());
        let mut data = self.data.lock().unwrap();
        if forced || data.contains_key(&channel.channel_id) {
            return Err(StoreError::Conflict(channel.channel_id.clone()));
        }
        data.insert(channel.channel_id.clone(), channel.clone());
        Ok(())
    }

    async fn update_verified(
        &self,
        channel_id: &str,
        is_verified: bool,
        now: DateTime<Utc>,
    ) -> Result<Channel, StoreError> {
        let mut data = self.data.lock().unwrap();
        let channel = data
            .get_mut(channel_id)
            .ok_or_else(|| StoreError::Missing(channel_id.to_string()))?;
        channel.last_updated = channel.touched_at(now);
        channel.is_verified = is_verified;
        Ok(channel.clone())
    }

    async fn list_unverified(&self) -> Result<Vec<Channel>, StoreError> {
        let mut channels: Vec<_> = self
            .data
            .lock()
            .unwrap()
            .values()
            .filter(|c| !c.is_verified)
            .cloned()
            .collect();
        channels.sort_by(|a, b| a.channel_id.cmp(&b.channel_id));
        Ok(channels)
    }
}

// ============================================================================
// Mock Channel Provider
// ============================================================================

/// Canned provider answer.
#[derive(Clone, Debug)]
pub enum MockResult {
    Found(ChannelMetadata),
    Empty,
    Fail,
}

#[derive(Clone)]
pub struct MockChannelProvider {
    result: Arc<Mutex<MockResult>>,
    fetch_count: Arc<Mutex<usize>>,
}

impl MockChannelProvider {
    pub fn new() -> Self {
        Self {
            result: Arc::new(Mutex::new(MockResult::Empty)),
            fetch_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Set the result to return on fetch.
    pub fn set_result(&self, result: MockResult) {
        *self.result.lock().unwrap() = result;
    }

    /// Get the number of fetch calls (for verification).
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

impl Default for MockChannelProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChannelProvider for MockChannelProvider {
    async fn fetch(&self, _channel_id: &str) -> Result<Vec<ChannelMetadata>, ProviderError> {
        *self.fetch_count.lock().unwrap() += 1;
        let result = self.result.lock().unwrap().clone();
        match result {
            MockResult::Found(metadata) => Ok(vec![metadata]),
            MockResult::Empty => Ok(vec![]),
            MockResult::Fail => Err(ProviderError::Transport("connection reset".into())),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
