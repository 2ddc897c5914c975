//! querydock Tab Data Model
//!
//! Connection tabs (one per open database connection) and content tabs
//! (query editors and table-structure views) with the two store containers
//! that hold them. Pure data: persistence and mutation policy live in
//! `querydock-session`.

mod connection;
mod content;
mod error;
mod store;

pub use connection::{ConnectionConfig, ConnectionTab, Dialect, Mode};
pub use content::{
    ContentTab, ContentTabData, MessageKind, QueryTabData, TabMessage, TableStructureData,
};
pub use error::TabError;
pub use store::{ConnectionStore, ContentStore};

pub type Result<T> = std::result::Result<T, TabError>;
