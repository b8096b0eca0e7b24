//! Channel metadata lookup.
//!
//! `ChannelProvider` is the seam to the remote metadata source and
//! `MetadataClient` wraps it with the consecutive-empty-result guard.

mod client;
mod youtube_adapter;

use async_trait::async_trait;

use crate::models::ChannelMetadata;

pub use client::{MetadataClient, MetadataError, EMPTY_RESULT_THRESHOLD};
pub use youtube_adapter::YoutubeProvider;

/// Transport-level failure talking to a provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("YouTube error: {0}")]
    Youtube(#[from] youtube::YoutubeError),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Remote read-only source of channel metadata, keyed by channel ID.
#[async_trait]
pub trait ChannelProvider: Send + Sync {
    /// Look up a channel. An empty vec is a valid "no match" answer,
    /// distinct from an `Err`.
    async fn fetch(&self, channel_id: &str) -> Result<Vec<ChannelMetadata>, ProviderError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
