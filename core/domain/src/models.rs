mod channel;

pub use channel::{Channel, ChannelMetadata, RegisterChannel, UpdateVerification};
