pub mod analytics;
pub mod saved_searches;
pub mod validation;

pub use analytics::{AnalyticsSink, TracingSink};
#[cfg(test)]
pub use saved_searches::MemoryStore;
pub use saved_searches::{JsonFileStore, SavedSearchStore};
pub use validation::{build_payload, parse_facet_key, ValidationError};
