//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] querydock_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] querydock_session::SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
