mod channels;
mod client;
mod error;
pub mod models;

pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use models::{
    ChannelListResponse, ChannelResource, ChannelSnippet, ChannelStatistics, Thumbnail,
    Thumbnails,
};

pub type Result<T> = std::result::Result<T, YoutubeError>;
