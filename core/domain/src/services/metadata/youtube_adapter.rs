//! YouTube Data API adapter for ChannelProvider

use async_trait::async_trait;
use std::sync::Arc;
use youtube::{ChannelResource, YoutubeClient};

use crate::models::ChannelMetadata;

use super::{ChannelProvider, ProviderError};

/// `channels.list` backed provider
pub struct YoutubeProvider {
    client: Arc<YoutubeClient>,
}

impl YoutubeProvider {
    pub fn new(client: Arc<YoutubeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChannelProvider for YoutubeProvider {
    async fn fetch(&self, channel_id: &str) -> Result<Vec<ChannelMetadata>, ProviderError> {
        let response = self.client.list_channels(channel_id).await?;
        Ok(response.items.into_iter().map(to_metadata).collect())
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}

fn to_metadata(resource: ChannelResource) -> ChannelMetadata {
    let thumbnail_url = resource.default_thumbnail_url().to_string();
    ChannelMetadata {
        channel_id: resource.id,
        title: resource.snippet.title,
        subscriber_count: resource.statistics.subscriber_count,
        video_count: resource.statistics.video_count,
        thumbnail_url,
    }
}
