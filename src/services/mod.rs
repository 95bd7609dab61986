pub mod api_client;
pub mod auth_service;
pub mod confirm_service;
pub mod error;
pub mod memory_transport;

pub use api_client::*;
pub use auth_service::*;
pub use confirm_service::*;
pub use error::*;
pub use memory_transport::{InMemoryRecordStore, RemoteCall};
