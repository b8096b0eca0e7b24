use domain::{
    ChannelProvider, ChannelRepositoryAdapter, MetadataClient, RegistrationService,
    YoutubeProvider,
};
use reqwest::Client;
use sqlx::SqlitePool;
use std::sync::Arc;
use youtube::YoutubeClient;

use crate::config::Config;

#[derive(Clone)]
pub struct Services {
    pub channels: Arc<RegistrationService>,
}

#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &Config, http_client: Client) -> Self {
        let youtube = Arc::new(YoutubeClient::new(
            http_client,
            config.youtube_api_key.as_str(),
        ));
        let provider = Arc::new(YoutubeProvider::new(youtube));

        Self::with_provider(db, provider)
    }

    /// Wire the services around an arbitrary metadata provider.
    pub fn with_provider(db: SqlitePool, provider: Arc<dyn ChannelProvider>) -> Self {
        // One metadata client per process so the empty-result guard is shared
        let metadata = Arc::new(MetadataClient::new(provider));
        let store = Arc::new(ChannelRepositoryAdapter::new(db));
        let channels = Arc::new(RegistrationService::new(store, metadata));

        Self {
            services: Services { channels },
        }
    }
}
