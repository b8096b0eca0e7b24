//! SQLite-backed ChannelStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::Channel;
use crate::repositories::ChannelRepository;

use super::traits::{ChannelStore, StoreError};

/// Adapter for ChannelRepository to implement the ChannelStore trait.
#[derive(Clone)]
pub struct ChannelRepositoryAdapter {
    pub(crate) db: SqlitePool,
}

impl ChannelRepositoryAdapter {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChannelStore for ChannelRepositoryAdapter {
    async fn find_by_id(&self, channel_id: &str) -> Result<Option<Channel>, StoreError> {
        Ok(ChannelRepository::get_by_id(&self.db, channel_id).await?)
    }

    async fn insert(&self, channel: &Channel) -> Result<(), StoreError> {
        ChannelRepository::create(&self.db, channel)
            .await
            .map_err(|e| {
                // Convert UNIQUE constraint violation to Conflict
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.is_unique_violation() {
                        return StoreError::Conflict(channel.channel_id.clone());
                    }
                }
                StoreError::from(e)
            })
    }

    async fn update_verified(
        &self,
        channel_id: &str,
        is_verified: bool,
        now: DateTime<Utc>,
    ) -> Result<Channel, StoreError> {
        // Optimistic loop: a failed swap means another writer moved the row on
        loop {
            let current = ChannelRepository::get_by_id(&self.db, channel_id)
                .await?
                .ok_or_else(|| StoreError::Missing(channel_id.to_string()))?;

            let written = ChannelRepository::compare_and_set_verified(
                &self.db,
                channel_id,
                is_verified,
                current.last_updated,
                current.touched_at(now),
            )
            .await?;

            match written {
                Some(channel) => return Ok(channel),
                None => tracing::debug!(
                    "Channel {} changed during verification update, retrying",
                    channel_id
                ),
            }
        }
    }

    async fn list_unverified(&self) -> Result<Vec<Channel>, StoreError> {
        Ok(ChannelRepository::get_unverified(&self.db).await?)
    }
}
