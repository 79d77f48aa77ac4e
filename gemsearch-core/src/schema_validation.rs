use crate::error::SearchError;
use serde_json::{json, Value};

/// JSON Schema describing the shape of a search request payload.
/// Unknown keys are allowed; every range is a pair of numbers or nulls.
pub fn payload_schema() -> Value {
    let range = json!({
        "type": ["array", "null"],
        "items": {"type": ["number", "null"]},
        "minItems": 2,
        "maxItems": 2
    });
    let selection = json!({"type": ["string", "null"]});
    let flag = json!({"type": ["boolean", "null"]});

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "searchTerm": {"type": ["string", "null"]},
            "category": selection,
            "origin": selection,
            "type": selection,
            "color": selection,
            "treatment": selection,
            "certification": selection,
            "clarity": selection,
            "cutQuality": selection,
            "symmetry": selection,
            "polish": selection,
            "colorGrade": selection,
            "colorIntensity": selection,
            "cutForm": selection,
            "crystalQuality": selection,
            "transparency": selection,
            "priceRange": range,
            "weightRange": range,
            "estimatedYieldRange": range,
            "dimensions": {
                "type": ["object", "null"],
                "properties": {
                    "length": range,
                    "width": range,
                    "height": range
                }
            },
            "inStockOnly": flag,
            "hasVideos": flag,
            "hasCertificates": flag,
            "sortBy": selection,
            "sortOrder": selection
        }
    })
}

/// Validate data against a JSON Schema.
/// The first violation is reported as a malformed request naming the
/// top-level payload key it occurred under.
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), SearchError> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| SearchError::malformed("schema", format!("Schema compilation error: {}", e)))?;

    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            let path_str = error.instance_path.to_string();
            let field = path_str
                .trim_start_matches('/')
                .split('/')
                .next()
                .filter(|segment| !segment.is_empty())
                .unwrap_or("root")
                .to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(SearchError::malformed(field, format!("{} at {}", error, location)))
        }
    }
}

/// Validate a search payload against [`payload_schema`]
pub fn validate_payload_shape(payload: &Value) -> Result<(), SearchError> {
    validate_against_schema(&payload_schema(), payload)
}
