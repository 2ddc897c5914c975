//! querydock Session Store
//!
//! Owns the connection-tab and content-tab collections, restores them at
//! startup by replaying saved connections through the host's connection
//! layer, and persists every mutation to the blob store behind a debounce.

mod error;
mod manager;
mod opener;
mod writer;

pub use error::SessionError;
pub use manager::{SessionManager, CONN_TABS_KEY, CONTENT_TABS_KEY, DEFAULT_FLUSH_DELAY};
pub use opener::{ConnectionOpener, OpenError};
pub use writer::DebouncedWriter;

pub type Result<T> = std::result::Result<T, SessionError>;
