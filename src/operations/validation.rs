use gemsearch_core::Facet;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

use crate::SearchArgs;

/// Validation error with field and message
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parse facet filter strings in the format "key=value" into a filter map.
/// A later value for the same key replaces an earlier one.
pub fn parse_facet_filters(facet_strings: &[String]) -> Result<HashMap<Facet, String>, ValidationError> {
    let mut facet_map = HashMap::new();

    for facet_str in facet_strings {
        let Some((key, value)) = facet_str.split_once('=') else {
            return Err(ValidationError {
                field: "facet".to_string(),
                message: format!("Invalid facet format '{}'. Expected 'name=value'", facet_str),
            });
        };

        let facet = parse_facet_key("facet", key)?;

        facet_map.insert(facet, value.trim().to_string());
    }

    Ok(facet_map)
}

/// Resolve a facet key given on the command line; `field` names the argument
pub fn parse_facet_key(field: &str, key: &str) -> Result<Facet, ValidationError> {
    Facet::from_key(key).ok_or_else(|| ValidationError {
        field: field.to_string(),
        message: format!("Unknown facet '{}'", key.trim()),
    })
}

/// Turn a "MIN:MAX" range argument into a payload pair.
///
/// Either side may be empty for an open end. Bounds that do not parse as
/// numbers are passed through as strings so the search core rejects the
/// request as malformed, the same as it would for any other transport.
pub fn parse_range(raw: &str) -> Value {
    let parts: Vec<Value> = raw.split(':').map(range_bound).collect();
    Value::Array(parts)
}

fn range_bound(part: &str) -> Value {
    let part = part.trim();
    if part.is_empty() {
        return Value::Null;
    }
    part.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(part.to_string()))
}

/// Build the loosely-typed request payload from command-line flags.
///
/// Starts from `base` (a payload file) when given; flags override its keys.
pub fn build_payload(args: &SearchArgs, base: Option<Value>) -> Result<Value, ValidationError> {
    let mut payload = match base {
        None => Map::new(),
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(ValidationError {
                field: "payload".to_string(),
                message: "Payload file must contain a JSON object".to_string(),
            })
        }
    };

    let mut set = |key: &str, value: Value| {
        payload.insert(key.to_string(), value);
    };

    if let Some(term) = &args.term {
        set("searchTerm", Value::String(term.clone()));
    }

    let named = [
        (Facet::Category, &args.category),
        (Facet::Origin, &args.origin),
        (Facet::Type, &args.variant_type),
        (Facet::Color, &args.color),
        (Facet::Treatment, &args.treatment),
        (Facet::Certification, &args.certification),
    ];
    for (facet, value) in named {
        if let Some(value) = value {
            set(facet.key(), Value::String(value.clone()));
        }
    }

    let mut generic: Vec<_> = parse_facet_filters(&args.facets)?.into_iter().collect();
    generic.sort_by_key(|(facet, _)| facet.key());
    for (facet, value) in generic {
        set(facet.key(), Value::String(value));
    }

    let ranges = [
        ("priceRange", &args.price),
        ("weightRange", &args.weight),
        ("estimatedYieldRange", &args.estimated_yield),
    ];
    for (key, raw) in ranges {
        if let Some(raw) = raw {
            set(key, parse_range(raw));
        }
    }

    let mut dimensions = Map::new();
    for (axis, raw) in [("length", &args.length), ("width", &args.width), ("height", &args.height)] {
        if let Some(raw) = raw {
            dimensions.insert(axis.to_string(), parse_range(raw));
        }
    }
    if !dimensions.is_empty() {
        set("dimensions", Value::Object(dimensions));
    }

    if args.in_stock {
        set("inStockOnly", Value::Bool(true));
    }
    if args.videos {
        set("hasVideos", Value::Bool(true));
    }
    if args.certificates {
        set("hasCertificates", Value::Bool(true));
    }
    if let Some(sort) = &args.sort_by {
        set("sortBy", Value::String(sort.clone()));
    }
    if args.descending {
        set("sortOrder", Value::String("desc".to_string()));
    }

    Ok(Value::Object(payload))
}
