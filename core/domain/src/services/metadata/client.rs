//! Metadata client with a guard against a silently degraded provider.
//!
//! A bad API key or exhausted quota tends to produce well-formed but empty
//! `channels.list` responses rather than errors. After
//! [`EMPTY_RESULT_THRESHOLD`] empty answers in a row the client stops
//! calling the provider and fails fast with [`MetadataError::Misconfigured`]
//! until a call returns data again. The counter lives in memory only and
//! starts from zero on every process start.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::models::ChannelMetadata;

use super::{ChannelProvider, ProviderError};

/// Consecutive empty responses tolerated before the client refuses to call out.
pub const EMPTY_RESULT_THRESHOLD: u32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error(
        "provider returned {consecutive_empty} empty results in a row, check the API key or quota"
    )]
    Misconfigured { consecutive_empty: u32 },

    #[error("provider unavailable: {0}")]
    Unavailable(#[from] ProviderError),
}

pub struct MetadataClient {
    provider: Arc<dyn ChannelProvider>,
    /// Never held across an await point.
    consecutive_empty: Mutex<u32>,
}

impl MetadataClient {
    pub fn new(provider: Arc<dyn ChannelProvider>) -> Self {
        Self {
            provider,
            consecutive_empty: Mutex::new(0),
        }
    }

    /// Current number of consecutive empty provider responses.
    pub fn consecutive_empty_results(&self) -> u32 {
        *self.consecutive_empty.lock()
    }

    /// Fetch metadata for one channel.
    ///
    /// Returns `Ok(None)` when the provider answered with no matching channel.
    /// Transport failures are returned as [`MetadataError::Unavailable`] and
    /// leave the counter untouched.
    pub async fn fetch(&self, channel_id: &str) -> Result<Option<ChannelMetadata>, MetadataError> {
        let consecutive_empty = self.consecutive_empty_results();
        if consecutive_empty >= EMPTY_RESULT_THRESHOLD {
            tracing::error!(
                "Refusing {} lookup for {}: {} consecutive empty results",
                self.provider.name(),
                channel_id,
                consecutive_empty
            );
            return Err(MetadataError::Misconfigured { consecutive_empty });
        }

        let results = self.provider.fetch(channel_id).await.inspect_err(|e| {
            tracing::warn!(
                "{} lookup failed for {}: {}",
                self.provider.name(),
                channel_id,
                e
            );
        })?;

        match results.into_iter().next() {
            Some(metadata) => {
                *self.consecutive_empty.lock() = 0;
                tracing::debug!("{} returned metadata for {}", self.provider.name(), channel_id);
                Ok(Some(metadata))
            }
            None => {
                let count = {
                    let mut guard = self.consecutive_empty.lock();
                    *guard = guard.saturating_add(1);
                    *guard
                };
                tracing::warn!(
                    "{} returned an empty result for {}. Consecutive empty results: {}",
                    self.provider.name(),
                    channel_id,
                    count
                );
                Ok(None)
            }
        }
    }
}
