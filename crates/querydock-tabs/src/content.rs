//! Content tab variants
//!
//! A content tab is either a query editor or a table-structure view.
//! The two shapes are a real sum type so they can never be structurally
//! confused at a consumption site.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TabError;

/// Severity of a message shown inside a content tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Info,
    Success,
    Warning,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Warning => "warning",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MessageKind {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(MessageKind::Error),
            "info" => Ok(MessageKind::Info),
            "success" => Ok(MessageKind::Success),
            "warning" => Ok(MessageKind::Warning),
            _ => Err(TabError::UnknownMessageKind(s.to_string())),
        }
    }
}

/// Transient message attached to a content tab (query error, row count, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabMessage {
    pub kind: MessageKind,
    pub message: String,
}

/// Editor state of a query tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTabData {
    /// Current editor text
    pub query: String,
    /// Last result set, rows as opaque records
    pub results: Vec<Value>,
}

/// Structure view of a single table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableStructureData {
    pub table: String,
    pub structure: Vec<Value>,
    pub indices: Vec<Value>,
    pub foreign_keys: Vec<Value>,
    pub triggers: Vec<Value>,
}

/// The two content tab shapes, tagged on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ContentTabData {
    Query(QueryTabData),
    TableStructure(TableStructureData),
}

/// One tab in the content area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTab {
    /// Display label
    pub label: String,
    /// Message shown in the tab, if any
    pub message: Option<TabMessage>,
    /// Variant payload, tagged with a `type` key on the wire
    #[serde(flatten)]
    pub data: ContentTabData,
}

impl ContentTab {
    pub fn query(label: String, data: QueryTabData) -> Self {
        Self {
            label,
            message: None,
            data: ContentTabData::Query(data),
        }
    }

    pub fn table_structure(label: String, data: TableStructureData) -> Self {
        Self {
            label,
            message: None,
            data: ContentTabData::TableStructure(data),
        }
    }

    /// The tab every new connection starts with: an empty query editor.
    pub fn fresh_query() -> Self {
        Self::query("Query".to_string(), QueryTabData::default())
    }

    pub fn set_message(&mut self, kind: MessageKind, message: String) {
        self.message = Some(TabMessage { kind, message });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn is_query(&self) -> bool {
        matches!(self.data, ContentTabData::Query(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_query_is_empty() {
        let tab = ContentTab::fresh_query();
        assert!(tab.is_query());
        assert!(tab.message.is_none());
        match &tab.data {
            ContentTabData::Query(data) => {
                assert!(data.query.is_empty());
                assert!(data.results.is_empty());
            }
            ContentTabData::TableStructure(_) => panic!("fresh tab must be a query tab"),
        }
    }

    #[test]
    fn test_message_kind_parse() {
        assert_eq!("warning".parse::<MessageKind>().unwrap(), MessageKind::Warning);
        assert!("fatal".parse::<MessageKind>().is_err());
    }

    #[test]
    fn test_variant_round_trip() {
        let mut query_tab = ContentTab::query(
            "Query #1".to_string(),
            QueryTabData {
                query: "SELECT * FROM users".to_string(),
                results: vec![json!({"id": 1, "name": "ada"})],
            },
        );
        query_tab.set_message(MessageKind::Success, "1 row".to_string());

        let structure_tab = ContentTab::table_structure(
            "users".to_string(),
            TableStructureData {
                table: "users".to_string(),
                structure: vec![json!({"column": "id", "type": "int"})],
                indices: vec![json!({"name": "pk_users"})],
                foreign_keys: vec![],
                triggers: vec![],
            },
        );

        for tab in [query_tab, structure_tab] {
            let json = serde_json::to_string(&tab).unwrap();
            let parsed: ContentTab = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, tab);
        }
    }

    #[test]
    fn test_unknown_variant_tag_rejected() {
        let raw = r#"{"label":"x","message":null,"type":"scratchpad","data":{}}"#;
        assert!(serde_json::from_str::<ContentTab>(raw).is_err());
    }
}
