//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Unknown message kind: {0}")]
    UnknownMessageKind(String),

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}
