use crate::criteria::FilterCriteria;
use crate::error::SearchError;
use crate::filtering::apply_filters;
use crate::models::CatalogItem;
use crate::schema::CatalogBounds;
use crate::sorting::sort_items;
use crate::suggestions::{suggest, SuggestionMode};
use crate::validation::{ensure_catalog, validate_criteria};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Outcome of one catalog search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub items: Vec<CatalogItem>,
    pub total_count: usize,
    pub applied_filters: Vec<String>,
    pub elapsed_time_millis: u64,
    /// Present only when a text search matched nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// What an analytics or audit sink receives after each search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary {
    pub applied_filters: Vec<String>,
    pub total_count: usize,
    pub elapsed_time_millis: u64,
}

impl SearchResult {
    pub fn summary(&self) -> SearchSummary {
        SearchSummary {
            applied_filters: self.applied_filters.clone(),
            total_count: self.total_count,
            elapsed_time_millis: self.elapsed_time_millis,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    /// Default range extents; observed from the catalog when absent
    pub bounds: Option<CatalogBounds>,
}

/// Validate a raw payload and run it against `catalog`
pub fn evaluate(
    catalog: &[CatalogItem],
    payload: &Value,
    options: &EvaluateOptions,
) -> Result<SearchResult, SearchError> {
    evaluate_validated(catalog, payload, options).map(|(_, result)| result)
}

/// Like [`evaluate`], but also hands back the validated criteria, e.g. to
/// store them as a saved search. Timing still covers validation.
pub fn evaluate_validated(
    catalog: &[CatalogItem],
    payload: &Value,
    options: &EvaluateOptions,
) -> Result<(FilterCriteria, SearchResult), SearchError> {
    let started = Instant::now();
    let criteria = validate_criteria(payload, catalog, options.bounds.as_ref())?;
    let result = run(catalog, &criteria, started);
    Ok((criteria, result))
}

/// Run already-validated criteria, e.g. a saved search, against `catalog`
pub fn evaluate_criteria(
    catalog: &[CatalogItem],
    criteria: &FilterCriteria,
) -> Result<SearchResult, SearchError> {
    let started = Instant::now();
    ensure_catalog(catalog)?;
    Ok(run(catalog, criteria, started))
}

fn run(catalog: &[CatalogItem], criteria: &FilterCriteria, started: Instant) -> SearchResult {
    let outcome = apply_filters(catalog, criteria);
    let mut items = outcome.items;
    sort_items(&mut items, criteria.sort);

    let suggestions = match criteria.term() {
        Some(term) if items.is_empty() => Some(suggest(catalog, term, SuggestionMode::Strict)),
        _ => None,
    };

    let elapsed_time_millis = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!(
        total = items.len(),
        applied = outcome.applied_filters.len(),
        elapsed_ms = elapsed_time_millis,
        "catalog search finished"
    );

    SearchResult {
        total_count: items.len(),
        items,
        applied_filters: outcome.applied_filters,
        elapsed_time_millis,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Selection;
    use crate::models::{CutAttributes, Variant};
    use serde_json::json;

    fn catalog() -> Vec<CatalogItem> {
        vec![CatalogItem {
            id: "1".into(),
            name: "Ceylon Sapphire".into(),
            description: String::new(),
            category: "Sapphire".into(),
            origin: "Sri Lanka".into(),
            color: Some("Blue".into()),
            price: 900.0,
            in_stock: true,
            treatment: Default::default(),
            certification: Default::default(),
            dimensions: Default::default(),
            videos: Vec::new(),
            variant: Variant::Cut(CutAttributes {
                carat_weight: 1.2,
                ..Default::default()
            }),
        }]
    }

    #[test]
    fn test_evaluate_validated_returns_criteria_and_result() {
        let payload = json!({"origin": "Sri Lanka", "sortOrder": "desc"});
        let (criteria, result) =
            evaluate_validated(&catalog(), &payload, &EvaluateOptions::default()).unwrap();

        assert_eq!(criteria.origin, Selection::Exact("Sri Lanka".into()));
        assert_eq!(
            criteria,
            validate_criteria(&payload, &catalog(), None).unwrap()
        );
        assert_eq!(
            result,
            SearchResult {
                elapsed_time_millis: result.elapsed_time_millis,
                ..evaluate(&catalog(), &payload, &EvaluateOptions::default()).unwrap()
            }
        );
        assert_eq!(result.applied_filters, vec!["Herkunft: Sri Lanka"]);
    }

    #[test]
    fn test_evaluate_validated_rejects_like_evaluate() {
        let err = evaluate_validated(&[], &json!({}), &EvaluateOptions::default()).unwrap_err();
        assert!(matches!(err, SearchError::EmptyCatalog));
    }
}
