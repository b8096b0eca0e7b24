pub mod metadata;
pub mod registration;

#[cfg(test)]
pub(crate) mod mocks;

pub use metadata::{
    ChannelProvider, MetadataClient, MetadataError, ProviderError, YoutubeProvider,
    EMPTY_RESULT_THRESHOLD,
};
pub use registration::{
    ChannelError, ChannelRepositoryAdapter, ChannelStore, RegistrationService, StoreError,
};
