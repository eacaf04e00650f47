//! Core data model: tag identifiers and per-tag metadata records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque tag identifier, unique within the catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    pub fn new(id: impl Into<String>) -> Self {
        TagId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TagId {
    fn from(s: &str) -> Self {
        TagId(s.to_string())
    }
}

impl From<String> for TagId {
    fn from(s: String) -> Self {
        TagId(s)
    }
}

/// Per-tag metadata as served by the asset store
///
/// Wire shape: `{ "files": [itemRef...], "shared": [tagId...] }`. Both
/// fields are required; a document missing either is rejected at the fetch
/// boundary. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Item references carrying this tag, in store order
    #[serde(rename = "files")]
    pub items: Vec<String>,

    /// Tags sharing at least one item with this tag
    #[serde(rename = "shared")]
    pub co_tags: Vec<TagId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_record_deserializes_wire_shape() {
        let record: TagRecord =
            serde_json::from_str(r#"{"files": ["a.png", "b.png"], "shared": ["striped"]}"#)
                .unwrap();

        assert_eq!(record.items, vec!["a.png", "b.png"]);
        assert_eq!(record.co_tags, vec![TagId::from("striped")]);
    }

    #[test]
    fn tag_record_rejects_missing_fields() {
        let result = serde_json::from_str::<TagRecord>(r#"{"files": ["a.png"]}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<TagRecord>(r#"{"shared": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn tag_record_rejects_wrong_shape() {
        let result = serde_json::from_str::<TagRecord>(r#"["red", "blue"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn tag_id_is_transparent_in_json() {
        let ids: Vec<TagId> = serde_json::from_str(r#"["red", "blue"]"#).unwrap();
        assert_eq!(ids, vec![TagId::from("red"), TagId::from("blue")]);
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"["red","blue"]"#);
    }
}
