//! Remote metadata source client.
//!
//! A single source is supported: the Semantic Scholar Graph API, wrapped by
//! [`SemanticScholarClient`]. All failures surface as [`SourceError`] values
//! so that one bad lookup never aborts a whole batch; the pipeline decides
//! per error kind whether to skip or report.

mod semantic;

pub use semantic::SemanticScholarClient;

/// Errors that can occur when interacting with the metadata source.
///
/// [`Unresolved`](SourceError::Unresolved) and
/// [`MetadataIncomplete`](SourceError::MetadataIncomplete) are per-item
/// outcomes: the title had no exact match in the search results, or the
/// fetched record was missing the metadata needed to build a
/// [`PaperRecord`](crate::models::PaperRecord). Both are skipped by the
/// pipeline with a diagnostic rather than failing the run.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error (unexpected JSON payload shape)
    #[error("Parse error: {0}")]
    Parse(String),

    /// API error from the source
    #[error("API error: {0}")]
    Api(String),

    /// No search result title matched the query exactly
    #[error("No exact title match for \"{0}\"")]
    Unresolved(String),

    /// The fetched record is missing required metadata
    #[error("Record {0} is missing required metadata")]
    MetadataIncomplete(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SourceError::Unresolved("Some Paper".to_string());
        assert_eq!(err.to_string(), "No exact title match for \"Some Paper\"");

        let err = SourceError::MetadataIncomplete("abc123".to_string());
        assert_eq!(err.to_string(), "Record abc123 is missing required metadata");
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: SourceError = json_err.into();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
