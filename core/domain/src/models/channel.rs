use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A registered YouTube channel and its metadata snapshot.
///
/// Title, counts and thumbnail are captured once at registration and are not
/// kept in sync with the provider. Only `is_verified` and `last_updated`
/// change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// YouTube channel ID (e.g. `UC...`)
    pub channel_id: String,
    pub title: String,
    pub subscriber_count: u64,
    pub video_count: u64,
    pub thumbnail_url: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Channel {
    /// Build a freshly registered, unverified channel.
    pub fn new(metadata: ChannelMetadata, now: DateTime<Utc>) -> Self {
        Self {
            channel_id: metadata.channel_id,
            title: metadata.title,
            subscriber_count: metadata.subscriber_count,
            video_count: metadata.video_count,
            thumbnail_url: metadata.thumbnail_url,
            is_verified: false,
            created_at: now,
            last_updated: now,
        }
    }

    /// The `last_updated` value for a modification made at `now`.
    ///
    /// Never at or before the current `last_updated`, even if `now` lags it.
    pub fn touched_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        if now > self.last_updated {
            now
        } else {
            self.last_updated + Duration::microseconds(1)
        }
    }
}

/// Channel metadata as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMetadata {
    pub channel_id: String,
    pub title: String,
    pub subscriber_count: u64,
    pub video_count: u64,
    pub thumbnail_url: String,
}

/// Request body for registering a channel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegisterChannel {
    pub channel_id: String,
}

/// Request body for changing a channel's verification flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateVerification {
    pub is_verified: bool,
}
