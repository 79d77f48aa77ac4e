// Public modules
pub mod criteria;
pub mod error;
pub mod facets;
pub mod filtering;
pub mod io;
pub mod models;
pub mod schema;
pub mod schema_validation;
pub mod search;
pub mod sorting;
pub mod suggestions;
pub mod validation;

// Re-export commonly used types for convenience
pub use criteria::{
    DimensionsFilter, FilterCriteria, RangeFilter, Selection, SortDirection, SortKey, SortOrder,
};
pub use error::{SearchError, Severity};
pub use facets::{facet_options, get_sorted_group_names, group_items_by_facet, FacetOption};
pub use filtering::{apply_filters, FilterOutcome};
pub use io::{load_bounds, load_catalog, load_payload};
pub use models::{
    CatalogItem, Certification, CutAttributes, Dimensions, RoughAttributes, Treatment, Variant,
    VariantKind, WeightUnit,
};
pub use schema::{AttributeScope, Bounds, CatalogBounds, Facet};
pub use search::{
    evaluate, evaluate_criteria, evaluate_validated, EvaluateOptions, SearchResult, SearchSummary,
};
pub use sorting::{normalize_for_sorting, sort_items};
pub use suggestions::{autocomplete, suggest, SuggestionMode};
pub use validation::validate_criteria;
