//! querydock Core
//!
//! Composition root for the client. The host process builds one
//! [`Workbench`] at startup and hands it by reference to every consumer;
//! there is no ambient global state.

mod config;
mod error;
mod workbench;

pub use config::Config;
pub use error::CoreError;
pub use workbench::Workbench;

// Re-export the session layer surface
pub use querydock_session::{
    ConnectionOpener, DebouncedWriter, OpenError, SessionError, SessionManager,
};
pub use querydock_storage::{Database, StorageError};
pub use querydock_tabs::{
    ConnectionConfig, ConnectionStore, ConnectionTab, ContentStore, ContentTab, ContentTabData,
    Dialect, MessageKind, Mode, QueryTabData, TabError, TabMessage, TableStructureData,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
