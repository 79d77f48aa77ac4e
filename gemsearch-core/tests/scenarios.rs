mod common;

use common::{mixed_catalog, names, sapphire_and_ruby};
use gemsearch_core::{evaluate, EvaluateOptions, SearchError};
use serde_json::json;

#[test]
fn price_range_narrows_and_is_described() {
    let catalog = sapphire_and_ruby();
    let result = evaluate(
        &catalog,
        &json!({"searchTerm": "", "priceRange": [1000, 1500]}),
        &EvaluateOptions::default(),
    )
    .unwrap();

    assert_eq!(names(&result.items), vec!["Blue Sapphire"]);
    assert_eq!(result.total_count, 1);
    assert_eq!(result.applied_filters, vec!["Preis: €1000 - €1500"]);
    assert_eq!(result.suggestions, None);
}

#[test]
fn price_from_zero_without_upper_limit_is_not_a_filter() {
    let catalog = sapphire_and_ruby();
    let result = evaluate(
        &catalog,
        &json!({"priceRange": [0, null]}),
        &EvaluateOptions::default(),
    )
    .unwrap();

    assert_eq!(names(&result.items), vec!["Blue Sapphire", "Red Ruby"]);
    assert!(result.applied_filters.is_empty());
}

#[test]
fn weight_and_type_use_carats_when_catalog_has_cut_stones() {
    let catalog = sapphire_and_ruby();
    let result = evaluate(
        &catalog,
        &json!({"weightRange": [0, 10], "type": "cut"}),
        &EvaluateOptions::default(),
    )
    .unwrap();

    assert_eq!(names(&result.items), vec!["Blue Sapphire"]);
    assert_eq!(result.applied_filters, vec!["Typ: Geschliffen", "Gewicht: 0 - 10 ct"]);
}

#[test]
fn unmatched_text_search_offers_suggestions() {
    let catalog = sapphire_and_ruby();

    // Vocabulary entries containing the term
    let result = evaluate(
        &catalog,
        &json!({"searchTerm": "sapphire", "origin": "Myanmar"}),
        &EvaluateOptions::default(),
    )
    .unwrap();
    assert!(result.items.is_empty());
    assert_eq!(
        result.suggestions,
        Some(vec!["Blue Sapphire".to_string(), "Sapphire".to_string()])
    );

    // Vocabulary entries contained in the term
    let result = evaluate(
        &catalog,
        &json!({"searchTerm": "star sapphires"}),
        &EvaluateOptions::default(),
    )
    .unwrap();
    assert!(result.items.is_empty());
    assert_eq!(result.suggestions, Some(vec!["Sapphire".to_string()]));
}

#[test]
fn certification_and_origin_both_apply() {
    let catalog = mixed_catalog();
    let result = evaluate(
        &catalog,
        &json!({"certification": "certified", "origin": "Myanmar", "type": "cut", "clarity": "VS1"}),
        &EvaluateOptions::default(),
    )
    .unwrap();

    // The certified Sri Lankan sapphire is excluded by origin; the Burmese ruby by clarity
    assert!(result.items.is_empty());
    assert_eq!(
        result.applied_filters,
        vec![
            "Herkunft: Myanmar",
            "Typ: Geschliffen",
            "Zertifizierung: Zertifiziert",
            "Reinheit: VS1",
        ]
    );
    // No text term, so no suggestions even though nothing matched
    assert_eq!(result.suggestions, None);
}

#[test]
fn empty_catalog_is_an_error_not_an_empty_result() {
    let err = evaluate(&[], &json!({"searchTerm": "ruby"}), &EvaluateOptions::default()).unwrap_err();
    assert!(matches!(err, SearchError::EmptyCatalog));
    assert_eq!(err.severity().status_code(), 503);
}

#[test]
fn yield_range_excludes_cut_stones_outright() {
    let catalog = mixed_catalog();
    let result = evaluate(
        &catalog,
        &json!({"estimatedYieldRange": [5, 20]}),
        &EvaluateOptions::default(),
    )
    .unwrap();

    assert_eq!(names(&result.items), vec!["Tanzanite Crystal"]);
    assert_eq!(result.applied_filters, vec!["Geschätzte Ausbeute: 5 - 20 ct"]);
}

#[test]
fn malformed_payload_is_rejected_wholesale() {
    let catalog = mixed_catalog();
    let err = evaluate(
        &catalog,
        &json!({"origin": "Myanmar", "priceRange": [100]}),
        &EvaluateOptions::default(),
    )
    .unwrap_err();

    match err {
        SearchError::MalformedRequest { ref field, .. } => assert_eq!(field, "priceRange"),
        ref other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.severity().status_code(), 400);
}

#[test]
fn full_featured_query_on_mixed_catalog() {
    let catalog = mixed_catalog();
    let result = evaluate(
        &catalog,
        &json!({
            "type": "rough",
            "origin": "all",
            "transparency": "Transparent",
            "dimensions": {"length": [20, 30]},
            "inStockOnly": true,
            "sortBy": "price",
            "sortOrder": "desc"
        }),
        &EvaluateOptions::default(),
    )
    .unwrap();

    assert_eq!(names(&result.items), vec!["Tanzanite Crystal"]);
    assert_eq!(
        result.applied_filters,
        vec![
            "Typ: Roh",
            "Transparenz: Transparent",
            "Abmessungen: L 20-30 mm",
            "Nur auf Lager",
        ]
    );
}
