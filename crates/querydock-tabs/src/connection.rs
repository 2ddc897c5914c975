//! Connection tab and configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::TabError;

/// Database dialect of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Mysql,
    Postgresql,
    Sqlite,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Postgresql => "postgresql",
            Dialect::Sqlite => "sqlite",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Dialect {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(Dialect::Mysql),
            "postgresql" => Ok(Dialect::Postgresql),
            "sqlite" => Ok(Dialect::Sqlite),
            _ => Err(TabError::UnknownDialect(s.to_string())),
        }
    }
}

/// How the connection reaches the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Host,
    Socket,
    File,
}

/// Full connection configuration as entered by the user.
///
/// Credentials stay an opaque string map; the connection layer decides
/// which keys each dialect needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Unique identifier, stable across persistence cycles
    pub id: String,
    /// Display name
    pub name: String,
    /// Database dialect
    pub dialect: Dialect,
    /// Transport mode
    pub mode: Mode,
    /// Dialect-specific credentials (host, port, user, password, path, ...)
    pub credentials: HashMap<String, String>,
    /// Sidebar accent color
    pub color: String,
    /// Marks production-like connections that warrant destructive-query warnings
    pub sensitive: bool,
}

impl ConnectionConfig {
    pub fn new(name: String, dialect: Dialect, mode: Mode) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            dialect,
            mode,
            credentials: HashMap::new(),
            color: String::new(),
            sensitive: false,
        }
    }
}

/// One open connection in the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTab {
    /// Display name
    pub label: String,
    /// Identity key, unique within the store
    pub id: String,
    /// Active schema description, opaque to the session layer
    pub schema: String,
    /// Configuration used to (re)establish the connection
    pub connection: ConnectionConfig,
}

impl ConnectionTab {
    /// Build a tab for an established connection. Identity follows the
    /// connection config so the same saved connection never opens twice.
    pub fn new(label: String, schema: String, connection: ConnectionConfig) -> Self {
        Self {
            label,
            id: connection.id.clone(),
            schema,
            connection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_identity_follows_config() {
        let config = ConnectionConfig::new("local".to_string(), Dialect::Mysql, Mode::Host);
        let tab = ConnectionTab::new("local".to_string(), "app_db".to_string(), config.clone());

        assert_eq!(tab.id, config.id);
        assert_eq!(tab.schema, "app_db");
    }

    #[test]
    fn test_dialect_parse() {
        assert_eq!("MySQL".parse::<Dialect>().unwrap(), Dialect::Mysql);
        assert_eq!("postgresql".parse::<Dialect>().unwrap(), Dialect::Postgresql);
        assert!("oracle".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let mut config = ConnectionConfig::new("prod".to_string(), Dialect::Postgresql, Mode::Host);
        config.credentials.insert("host".to_string(), "db.internal".to_string());
        config.color = "#ff4444".to_string();
        config.sensitive = true;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ConnectionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
