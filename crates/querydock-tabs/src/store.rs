//! Store containers for the two tab collections
//!
//! The two stores deliberately use different cursor conventions, inherited
//! from the client they serve:
//!
//! - `ConnectionStore.idx` is offset by one: 0 means "no connection
//!   selected" and the active connection is `tabs[idx - 1]`.
//! - `ContentStore.idx` indexes `tabs` directly and stays within
//!   `[0, len)` whenever `tabs` is non-empty.
//!
//! Unifying them would silently change the "no selection" semantics, so
//! both are kept exactly as-is.

use serde::{Deserialize, Serialize};

use crate::connection::ConnectionTab;
use crate::content::ContentTab;

/// Ordered connection tabs plus the sentinel-offset selection cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStore {
    pub tabs: Vec<ConnectionTab>,
    pub idx: usize,
}

impl ConnectionStore {
    /// The selected connection, or `None` when `idx` is 0 or out of range.
    pub fn active(&self) -> Option<&ConnectionTab> {
        self.idx.checked_sub(1).and_then(|i| self.tabs.get(i))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tabs.iter().any(|tab| tab.id == id)
    }
}

/// Ordered content tabs plus the direct-index selection cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentStore {
    pub tabs: Vec<ContentTab>,
    pub idx: usize,
}

impl ContentStore {
    /// A content store holding a single fresh query tab, selected.
    pub fn fresh() -> Self {
        Self {
            tabs: vec![ContentTab::fresh_query()],
            idx: 0,
        }
    }

    /// The selected content tab, or `None` when `idx` is out of range.
    pub fn active(&self) -> Option<&ContentTab> {
        self.tabs.get(self.idx)
    }

    pub fn active_mut(&mut self) -> Option<&mut ContentTab> {
        self.tabs.get_mut(self.idx)
    }
}
