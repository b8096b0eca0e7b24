//! Domain layer - channel registration core
//!
//! This crate contains:
//! - `db`: SQLite pool creation and schema
//! - `models`: Channel entity and request payloads
//! - `repositories`: Data access layer
//! - `services`: Metadata client (with empty-result guard) and registration service

pub mod db;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use db::create_pool;
pub use models::*;
pub use repositories::*;
pub use services::*;
