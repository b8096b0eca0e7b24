use reqwest::Client;

use crate::error::YoutubeError;

const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub struct YoutubeClient {
    client: Client,
    pub(crate) api_key: String,
    base_url: String,
}

impl YoutubeClient {
    /// Create a YoutubeClient with a reqwest Client.
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(YoutubeError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        parse_body(&body)
    }
}

pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> crate::Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| YoutubeError::Json {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
