//! Main client state container
//!
//! One `Workbench` is constructed at application start, initialized with
//! the host's connection layer, and torn down (flushed) at exit. UI panels,
//! the command palette and shortcut handlers all operate on this instance.

use querydock_session::{ConnectionOpener, SessionManager};
use querydock_storage::Database;

use crate::config::Config;
use crate::Result;

pub struct Workbench {
    config: Config,
    db: Database,
    session: SessionManager,
}

impl Workbench {
    /// Open the session database and build the store. No state is restored
    /// yet; call [`Workbench::initialize`] once the connection layer is up.
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let session = SessionManager::with_flush_delay(db.clone(), config.flush_delay());

        Ok(Self {
            config,
            db,
            session,
        })
    }

    /// In-memory variant for tests and ephemeral sessions.
    pub fn ephemeral(config: Config) -> Result<Self> {
        let db = Database::open_in_memory()?;
        let session = SessionManager::with_flush_delay(db.clone(), config.flush_delay());

        Ok(Self {
            config,
            db,
            session,
        })
    }

    /// Restore persisted session state, replaying saved connections
    /// through `opener`.
    pub async fn initialize<O: ConnectionOpener>(&self, opener: &O) -> Result<()> {
        self.session.restore(opener).await?;
        tracing::info!("Workbench initialized");
        Ok(())
    }

    /// Write out any pending session mutation. Called on exit.
    pub fn shutdown(&self) -> Result<()> {
        self.session.flush()?;
        Ok(())
    }

    /// Erase all persisted state. In-memory stores are not reset; the host
    /// reloads the application afterwards.
    pub fn clear_saved(&self) -> Result<()> {
        self.session.clear_saved()?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }
}
