//! Paper record model produced by the metadata fetcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The external identifier attached to a fetched paper record.
///
/// A DOI is preferred when the record carries one. When it does not, the raw
/// `externalIds` value is kept as-is (including JSON `null` when the field is
/// absent entirely) so no identifier information is silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalId {
    /// Digital Object Identifier
    Doi(String),
    /// The full external-identifiers value as returned by the API
    Other(Value),
}

impl ExternalId {
    /// Pick the preferred identifier out of a raw `externalIds` value.
    ///
    /// Returns [`ExternalId::Doi`] when the value is an object with a string
    /// `DOI` entry, otherwise falls back to the whole value.
    pub fn from_external_ids(external_ids: Option<Value>) -> Self {
        if let Some(Value::Object(map)) = &external_ids {
            if let Some(doi) = map.get("DOI").and_then(Value::as_str) {
                return ExternalId::Doi(doi.to_string());
            }
        }
        ExternalId::Other(external_ids.unwrap_or(Value::Null))
    }

    /// Whether this identifier is a DOI
    pub fn is_doi(&self) -> bool {
        matches!(self, ExternalId::Doi(_))
    }
}

impl std::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExternalId::Doi(doi) => write!(f, "{}", doi),
            ExternalId::Other(value) => write!(f, "{}", value),
        }
    }
}

/// A resolved paper: its canonical title and preferred external identifier.
///
/// Records are immutable once created; the only lifecycle is creation,
/// export, end of run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Canonical paper title as reported by the metadata service
    pub title: String,

    /// Preferred external identifier
    pub id: ExternalId,
}

impl PaperRecord {
    /// Create a new paper record
    pub fn new(title: impl Into<String>, id: ExternalId) -> Self {
        Self {
            title: title.into(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doi_preferred() {
        let ids = json!({"DOI": "10.1000/xyz", "ArXiv": "2101.00001"});
        let id = ExternalId::from_external_ids(Some(ids));
        assert_eq!(id, ExternalId::Doi("10.1000/xyz".to_string()));
        assert!(id.is_doi());
    }

    #[test]
    fn test_fallback_keeps_full_mapping() {
        let ids = json!({"ArXiv": "2101.00001", "CorpusId": 12345});
        let id = ExternalId::from_external_ids(Some(ids.clone()));
        assert_eq!(id, ExternalId::Other(ids));
        assert!(!id.is_doi());
    }

    #[test]
    fn test_missing_external_ids_becomes_null() {
        let id = ExternalId::from_external_ids(None);
        assert_eq!(id, ExternalId::Other(serde_json::Value::Null));
        assert_eq!(id.to_string(), "null");
    }

    #[test]
    fn test_non_string_doi_falls_back() {
        let ids = json!({"DOI": 42});
        let id = ExternalId::from_external_ids(Some(ids.clone()));
        assert_eq!(id, ExternalId::Other(ids));
    }

    #[test]
    fn test_display() {
        let doi = ExternalId::Doi("10.1234/test".to_string());
        assert_eq!(doi.to_string(), "10.1234/test");

        let other = ExternalId::Other(json!({"ArXiv": "2101.00001"}));
        assert_eq!(other.to_string(), r#"{"ArXiv":"2101.00001"}"#);
    }

    #[test]
    fn test_record_construction() {
        let record = PaperRecord::new("Test Paper", ExternalId::Doi("10.1/a".into()));
        assert_eq!(record.title, "Test Paper");
        assert_eq!(record.id.to_string(), "10.1/a");
    }
}
