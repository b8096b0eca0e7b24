use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{Channel, ChannelMetadata};
use crate::services::metadata::{MetadataClient, MetadataError};

use super::traits::{ChannelStore, StoreError};

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Channel ID must not be empty")]
    InvalidId,
    #[error("Channel with ID {0} already exists")]
    AlreadyExists(String),
    #[error("Channel with ID {0} not found")]
    NotFound(String),
    #[error("Metadata provider is misconfigured: {0}")]
    ProviderMisconfigured(String),
    #[error("Metadata provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<StoreError> for ChannelError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(id) => ChannelError::AlreadyExists(id),
            StoreError::Missing(id) => ChannelError::NotFound(id),
            StoreError::Database(e) => ChannelError::Database(e),
        }
    }
}

impl From<MetadataError> for ChannelError {
    fn from(e: MetadataError) -> Self {
        match e {
            MetadataError::Misconfigured { .. } => {
                ChannelError::ProviderMisconfigured(e.to_string())
            }
            MetadataError::Unavailable(inner) => {
                ChannelError::ProviderUnavailable(inner.to_string())
            }
        }
    }
}

/// Service for registering channels and managing their verification state
pub struct RegistrationService {
    store: Arc<dyn ChannelStore>,
    metadata: Arc<MetadataClient>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn ChannelStore>, metadata: Arc<MetadataClient>) -> Self {
        Self { store, metadata }
    }

    /// Register a channel after validating it against the metadata provider.
    ///
    /// An ID already on file is rejected before any provider call. If another
    /// caller registers the same ID between the check and the insert, the
    /// store's uniqueness constraint turns the loser into `AlreadyExists`.
    pub async fn add_channel(&self, channel_id: &str) -> Result<Channel, ChannelError> {
        let channel_id = normalize_id(channel_id)?;

        if self.store.find_by_id(channel_id).await?.is_some() {
            return Err(ChannelError::AlreadyExists(channel_id.to_string()));
        }

        let metadata = self
            .metadata
            .fetch(channel_id)
            .await?
            .ok_or_else(|| ChannelError::NotFound(channel_id.to_string()))?;

        if metadata.channel_id != channel_id {
            tracing::warn!(
                "Provider answered {} with channel {}, keeping the requested ID",
                channel_id,
                metadata.channel_id
            );
        }
        let channel = Channel::new(
            ChannelMetadata {
                channel_id: channel_id.to_string(),
                ..metadata
            },
            Utc::now(),
        );
        self.store.insert(&channel).await?;

        tracing::info!(
            "Registered channel {} ({}): {} subscribers, {} videos",
            channel.channel_id,
            channel.title,
            channel.subscriber_count,
            channel.video_count
        );

        Ok(channel)
    }

    /// Set the verification flag of a registered channel.
    ///
    /// The store picks the new `last_updated` against the row it replaces, so
    /// it strictly increases even under concurrent updates. Returns the record
    /// as persisted.
    pub async fn set_verification(
        &self,
        channel_id: &str,
        is_verified: bool,
    ) -> Result<Channel, ChannelError> {
        let channel_id = normalize_id(channel_id)?;

        let channel = self
            .store
            .update_verified(channel_id, is_verified, Utc::now())
            .await?;

        tracing::info!(
            "Channel {} verification set to {} at {}",
            channel.channel_id,
            channel.is_verified,
            channel.last_updated
        );

        Ok(channel)
    }

    /// Get a registered channel by ID
    pub async fn get_channel(&self, channel_id: &str) -> Result<Channel, ChannelError> {
        let channel_id = normalize_id(channel_id)?;
        self.store
            .find_by_id(channel_id)
            .await?
            .ok_or_else(|| ChannelError::NotFound(channel_id.to_string()))
    }

    /// Get all channels still awaiting verification
    pub async fn list_unverified(&self) -> Result<Vec<Channel>, ChannelError> {
        Ok(self.store.list_unverified().await?)
    }
}

fn normalize_id(channel_id: &str) -> Result<&str, ChannelError> {
    let trimmed = channel_id.trim();
    if trimmed.is_empty() {
        return Err(ChannelError::InvalidId);
    }
    Ok(trimmed)
}
