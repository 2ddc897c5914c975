//! Session Manager
//!
//! The single writer for both tab stores. Every mutation goes through
//! here, schedules a debounced serialize-and-write of the full state, and
//! is observed by the host through cloned snapshots.

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use querydock_storage::Database;
use querydock_tabs::{
    ConnectionStore, ConnectionTab, ContentStore, ContentTab, ContentTabData, MessageKind,
    QueryTabData,
};

use crate::opener::ConnectionOpener;
use crate::writer::DebouncedWriter;
use crate::Result;

/// Blob key for the serialized connection store.
pub const CONN_TABS_KEY: &str = "_conn_tabs";
/// Blob key for the serialized content store.
pub const CONTENT_TABS_KEY: &str = "_content_tabs";
/// Quiet period before a scheduled write fires.
pub const DEFAULT_FLUSH_DELAY: Duration = Duration::from_millis(1000);

pub struct SessionManager {
    /// Connection tabs, sentinel-offset cursor
    connections: Arc<RwLock<ConnectionStore>>,
    /// Content tabs of the selected connection, direct cursor
    content: Arc<RwLock<ContentStore>>,
    /// Blob store for persistence
    db: Database,
    /// Debounced persistence scheduler
    writer: Arc<DebouncedWriter>,
}

impl SessionManager {
    pub fn new(db: Database) -> Self {
        Self::with_flush_delay(db, DEFAULT_FLUSH_DELAY)
    }

    pub fn with_flush_delay(db: Database, delay: Duration) -> Self {
        Self {
            connections: Arc::new(RwLock::new(ConnectionStore::default())),
            content: Arc::new(RwLock::new(ContentStore::default())),
            db,
            writer: Arc::new(DebouncedWriter::new(delay)),
        }
    }

    /// Restore both stores from the blob store.
    ///
    /// Saved connections are replayed one at a time, in save order, through
    /// the host's connection layer; a tab whose connection no longer opens
    /// is logged and dropped, never aborting the rest of the restore.
    /// Content tabs carry no external resource and are restored as-is.
    pub async fn restore<O: ConnectionOpener>(&self, opener: &O) -> Result<()> {
        let saved: ConnectionStore = self.read_blob_or_default(CONN_TABS_KEY)?;

        let mut surviving = Vec::with_capacity(saved.tabs.len());
        for tab in saved.tabs {
            match opener.open(&tab.connection).await {
                Ok(()) => surviving.push(tab),
                Err(e) => {
                    tracing::warn!(
                        id = %tab.id,
                        label = %tab.label,
                        "Dropping saved connection that failed to reopen: {e}"
                    );
                }
            }
        }

        let restored = surviving.len();
        *self.connections.write() = ConnectionStore {
            tabs: surviving,
            idx: saved.idx,
        };

        let content: ContentStore = self.read_blob_or_default(CONTENT_TABS_KEY)?;
        *self.content.write() = content;

        tracing::info!(connection_tabs = restored, "Restored session state");

        Ok(())
    }

    /// Append a connection tab and select it.
    ///
    /// Idempotent on the tab id: adding an already-open connection leaves
    /// everything untouched. Otherwise the content area is reset to a
    /// single fresh query tab for the new connection.
    pub fn add_tab(&self, tab: ConnectionTab) {
        {
            let mut connections = self.connections.write();
            if connections.contains(&tab.id) {
                tracing::debug!(id = %tab.id, "Connection tab already open");
                return;
            }

            connections.tabs.push(tab);
            // Sentinel-offset cursor: the new last tab
            connections.idx = connections.tabs.len();
        }
        *self.content.write() = ContentStore::fresh();

        self.schedule_persist();
    }

    /// Remove the tab with the given id and deselect.
    ///
    /// The cursor is reset to "nothing selected" whether or not the id was
    /// present; no neighbouring tab is auto-selected.
    pub fn remove_tab(&self, id: &str) {
        {
            let mut connections = self.connections.write();
            connections.tabs.retain(|tab| tab.id != id);
            connections.idx = 0;
        }

        self.schedule_persist();
    }

    /// Move the sentinel-offset cursor. 0 deselects; out-of-range values
    /// are ignored.
    pub fn select_connection(&self, idx: usize) {
        {
            let mut connections = self.connections.write();
            if idx > connections.tabs.len() {
                tracing::debug!(idx, "Ignoring out-of-range connection selection");
                return;
            }
            connections.idx = idx;
        }

        self.schedule_persist();
    }

    /// Append a content tab and select it.
    pub fn open_content_tab(&self, tab: ContentTab) {
        {
            let mut content = self.content.write();
            content.tabs.push(tab);
            content.idx = content.tabs.len() - 1;
        }

        self.schedule_persist();
    }

    /// Close the content tab at `idx`. A selected tab above the closed one
    /// stays selected; the cursor is clamped back into range otherwise.
    pub fn close_content_tab(&self, idx: usize) {
        {
            let mut content = self.content.write();
            if idx >= content.tabs.len() {
                return;
            }
            content.tabs.remove(idx);
            if content.idx > idx {
                content.idx -= 1;
            }
            content.idx = match content.tabs.len() {
                0 => 0,
                len => content.idx.min(len - 1),
            };
        }

        self.schedule_persist();
    }

    /// Select the content tab at `idx`; out-of-range values are ignored.
    pub fn select_content_tab(&self, idx: usize) {
        {
            let mut content = self.content.write();
            if idx >= content.tabs.len() {
                tracing::debug!(idx, "Ignoring out-of-range content selection");
                return;
            }
            content.idx = idx;
        }

        self.schedule_persist();
    }

    /// Replace the editor state of the active query tab, keeping its label
    /// and message. No-op without an active tab, and never applied to a
    /// table-structure tab.
    pub fn set_active_query_data(&self, data: QueryTabData) {
        {
            let mut content = self.content.write();
            let Some(tab) = content.active_mut() else {
                return;
            };
            match &mut tab.data {
                ContentTabData::Query(current) => *current = data,
                ContentTabData::TableStructure(_) => {
                    tracing::warn!(label = %tab.label, "Refusing query-data update on a structure tab");
                    return;
                }
            }
        }

        self.schedule_persist();
    }

    /// Set the message of the active content tab; no-op without one.
    pub fn set_active_message(&self, kind: MessageKind, message: String) {
        {
            let mut content = self.content.write();
            let Some(tab) = content.active_mut() else {
                return;
            };
            tab.set_message(kind, message);
        }

        self.schedule_persist();
    }

    /// Clear the message of the active content tab; no-op without one.
    pub fn clear_active_message(&self) {
        {
            let mut content = self.content.write();
            let Some(tab) = content.active_mut() else {
                return;
            };
            tab.clear_message();
        }

        self.schedule_persist();
    }

    /// Erase the persisted blobs. In-memory state is left untouched; the
    /// caller is expected to tear the instance down afterwards.
    pub fn clear_saved(&self) -> Result<()> {
        self.writer.cancel();
        self.db.clear_blobs()?;
        Ok(())
    }

    /// Cancel any pending debounced write and persist immediately. The
    /// shutdown path, so the last mutation is never lost to the timer.
    pub fn flush(&self) -> Result<()> {
        self.writer.cancel();
        persist(&self.connections, &self.content, &self.db)
    }

    // === Snapshots for consumers ===

    pub fn connections(&self) -> ConnectionStore {
        self.connections.read().clone()
    }

    pub fn content(&self) -> ContentStore {
        self.content.read().clone()
    }

    pub fn active_connection(&self) -> Option<ConnectionTab> {
        self.connections.read().active().cloned()
    }

    pub fn active_content_tab(&self) -> Option<ContentTab> {
        self.content.read().active().cloned()
    }

    fn schedule_persist(&self) {
        let connections = Arc::clone(&self.connections);
        let content = Arc::clone(&self.content);
        let db = self.db.clone();

        self.writer.schedule(async move {
            // Serializes whatever is current when the timer fires
            if let Err(e) = persist(&connections, &content, &db) {
                tracing::warn!("Failed to persist session state: {e}");
            }
        });
    }

    fn read_blob_or_default<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let Some(raw) = self.db.get_blob(key)? else {
            return Ok(T::default());
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(key, "Discarding unparsable saved state: {e}");
                Ok(T::default())
            }
        }
    }
}

fn persist(
    connections: &RwLock<ConnectionStore>,
    content: &RwLock<ContentStore>,
    db: &Database,
) -> Result<()> {
    let conn_json = serde_json::to_string(&*connections.read())?;
    let content_json = serde_json::to_string(&*content.read())?;

    db.set_blob(CONN_TABS_KEY, &conn_json)?;
    db.set_blob(CONTENT_TABS_KEY, &content_json)?;

    Ok(())
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            connections: Arc::clone(&self.connections),
            content: Arc::clone(&self.content),
            db: self.db.clone(),
            writer: Arc::clone(&self.writer),
        }
    }
}
