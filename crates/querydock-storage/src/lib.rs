//! querydock Storage Layer
//!
//! SQLite-based persistence for client session state. The UI-facing
//! session stores are written as opaque string blobs under well-known keys.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
