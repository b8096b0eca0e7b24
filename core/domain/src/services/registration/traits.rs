//! Trait abstractions for channel persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::Channel;

/// Error type for channel store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Uniqueness constraint on the channel ID was violated.
    #[error("Channel {0} already exists")]
    Conflict(String),
    #[error("Channel {0} not found")]
    Missing(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence contract for the channel catalog.
///
/// Each call is atomic on its own. `insert` must reject a second record for
/// an existing ID with [`StoreError::Conflict`]; this is what makes
/// concurrent registrations of the same ID safe across processes.
#[async_trait]
pub trait ChannelStore: Send + Sync {
    async fn find_by_id(&self, channel_id: &str) -> Result<Option<Channel>, StoreError>;

    async fn insert(&self, channel: &Channel) -> Result<(), StoreError>;

    /// Set the verification flag and move `last_updated` forward, as one
    /// atomic read-modify-write.
    ///
    /// The new `last_updated` is `now`, or one microsecond past the stored
    /// value if `now` does not exceed it (see [`Channel::touched_at`]). It is
    /// computed against the row being replaced, so concurrent writers can
    /// never move it backwards. Returns the record as persisted.
    async fn update_verified(
        &self,
        channel_id: &str,
        is_verified: bool,
        now: DateTime<Utc>,
    ) -> Result<Channel, StoreError>;

    async fn list_unverified(&self) -> Result<Vec<Channel>, StoreError>;
}
