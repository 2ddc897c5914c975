//! Connection-establishment seam
//!
//! The session store never talks to a database itself. During restore it
//! hands each saved configuration to the host's connection layer and only
//! cares whether the attempt succeeded.

use async_trait::async_trait;
use thiserror::Error;

use querydock_tabs::ConnectionConfig;

/// Opaque failure from the connection layer. The session store does not
/// interpret the reason, it only logs it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OpenError {
    message: String,
}

impl OpenError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait ConnectionOpener: Send + Sync {
    /// Attempt to open/register the connection described by `config`.
    async fn open(&self, config: &ConnectionConfig) -> Result<(), OpenError>;
}
