//! Channel registration.
//!
//! `RegistrationService` owns the catalog invariants: one record per channel
//! ID, explicit verification changes and a monotonic `last_updated`. Storage
//! is reached through the `ChannelStore` trait so the SQLite implementation
//! can be swapped for mocks in tests.

mod adapters;
mod service;
mod traits;

pub use adapters::ChannelRepositoryAdapter;
pub use service::{ChannelError, RegistrationService};
pub use traits::{ChannelStore, StoreError};
