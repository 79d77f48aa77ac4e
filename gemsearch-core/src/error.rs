use std::path::PathBuf;

/// Failure modes of a catalog search.
///
/// A search that runs and finds nothing is not an error; it yields an empty
/// [`crate::search::SearchResult`] instead.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request payload does not have the expected shape. Rejected before
    /// any filtering happens.
    #[error("Malformed request: {field}: {detail}")]
    MalformedRequest { field: String, detail: String },

    /// There is no data to search. Distinct from an empty result.
    #[error("Catalog is empty; no gemstones are available to search")]
    EmptyCatalog,

    /// A catalog, payload or bounds file could not be read or decoded.
    #[error("Failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Which side is at fault, for transports that speak status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    ClientError,
    Unavailable,
}

impl Severity {
    pub fn status_code(self) -> u16 {
        match self {
            Severity::ClientError => 400,
            Severity::Unavailable => 503,
        }
    }
}

impl SearchError {
    pub fn malformed(field: impl Into<String>, detail: impl Into<String>) -> Self {
        SearchError::MalformedRequest {
            field: field.into(),
            detail: detail.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            SearchError::MalformedRequest { .. } => Severity::ClientError,
            SearchError::EmptyCatalog | SearchError::Load { .. } => Severity::Unavailable,
        }
    }
}
