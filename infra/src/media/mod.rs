//! Media upload clients

mod http_storage;

pub use http_storage::HttpMediaStorage;
