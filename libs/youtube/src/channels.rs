use crate::client::YoutubeClient;
use crate::models::ChannelListResponse;

/// Resource parts requested from `channels.list`.
const CHANNEL_PARTS: &str = "snippet,statistics";

impl YoutubeClient {
    /// List channels by ID
    /// GET /channels?part=snippet,statistics&id={channel_id}
    ///
    /// An unknown ID is not an error: the API answers 200 with no `items`.
    pub async fn list_channels(&self, channel_id: &str) -> crate::Result<ChannelListResponse> {
        let url = self.url("/channels");

        let response = self
            .client()
            .get(&url)
            .query(&[
                ("part", CHANNEL_PARTS),
                ("id", channel_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
