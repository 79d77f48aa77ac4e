use crate::criteria::{
    DimensionsFilter, FilterCriteria, RangeFilter, Selection, SortDirection, SortKey, SortOrder,
};
use crate::error::SearchError;
use crate::models::CatalogItem;
use crate::schema::{Bounds, CatalogBounds};
use crate::schema_validation::validate_payload_shape;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Raw request body as it arrives from a transport. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CriteriaPayload {
    search_term: Option<String>,
    category: Option<String>,
    origin: Option<String>,
    #[serde(rename = "type")]
    variant_type: Option<String>,
    color: Option<String>,
    treatment: Option<String>,
    certification: Option<String>,
    clarity: Option<String>,
    cut_quality: Option<String>,
    symmetry: Option<String>,
    polish: Option<String>,
    color_grade: Option<String>,
    color_intensity: Option<String>,
    cut_form: Option<String>,
    crystal_quality: Option<String>,
    transparency: Option<String>,
    price_range: Option<RawRange>,
    weight_range: Option<RawRange>,
    estimated_yield_range: Option<RawRange>,
    dimensions: Option<DimensionsPayload>,
    in_stock_only: Option<bool>,
    has_videos: Option<bool>,
    has_certificates: Option<bool>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

type RawRange = (Option<f64>, Option<f64>);

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DimensionsPayload {
    length: Option<RawRange>,
    width: Option<RawRange>,
    height: Option<RawRange>,
}

/// Turn a loosely-typed payload into a well-formed [`FilterCriteria`].
///
/// `bounds` are the default extents of each numeric range; when `None` they
/// are observed from `catalog`. A range equal to its bounds collapses to
/// unset so a full-range slider never counts as an applied filter.
pub fn validate_criteria(
    payload: &Value,
    catalog: &[CatalogItem],
    bounds: Option<&CatalogBounds>,
) -> Result<FilterCriteria, SearchError> {
    ensure_catalog(catalog)?;
    validate_payload_shape(payload)?;

    let raw: CriteriaPayload = serde_json::from_value(payload.clone())
        .map_err(|e| SearchError::malformed("payload", e.to_string()))?;

    let observed;
    let bounds = match bounds {
        Some(b) => b,
        None => {
            observed = CatalogBounds::observe(catalog);
            &observed
        }
    };

    let dimensions = raw.dimensions.unwrap_or_default();
    let criteria = FilterCriteria {
        search_term: raw.search_term.unwrap_or_default().trim().to_string(),
        category: selection(raw.category),
        origin: selection(raw.origin),
        variant_type: selection(raw.variant_type),
        color: selection(raw.color),
        treatment: selection(raw.treatment),
        certification: selection(raw.certification),
        clarity: selection(raw.clarity),
        cut_quality: selection(raw.cut_quality),
        symmetry: selection(raw.symmetry),
        polish: selection(raw.polish),
        color_grade: selection(raw.color_grade),
        color_intensity: selection(raw.color_intensity),
        cut_form: selection(raw.cut_form),
        crystal_quality: selection(raw.crystal_quality),
        transparency: selection(raw.transparency),
        price_range: price_range(raw.price_range, bounds.price)?,
        weight_range: normalize_range("weightRange", raw.weight_range, bounds.weight)?,
        estimated_yield_range: normalize_range(
            "estimatedYieldRange",
            raw.estimated_yield_range,
            bounds.estimated_yield,
        )?,
        dimensions: DimensionsFilter {
            length: normalize_range("dimensions.length", dimensions.length, bounds.length)?,
            width: normalize_range("dimensions.width", dimensions.width, bounds.width)?,
            height: normalize_range("dimensions.height", dimensions.height, bounds.height)?,
        },
        in_stock_only: raw.in_stock_only.unwrap_or(false),
        has_videos: raw.has_videos.unwrap_or(false),
        has_certificates: raw.has_certificates.unwrap_or(false),
        sort: SortOrder {
            key: raw.sort_by.as_deref().map(SortKey::parse).unwrap_or_default(),
            direction: raw
                .sort_order
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
        },
    };

    debug!(has_filters = criteria.has_filters(), "validated search criteria");
    Ok(criteria)
}

/// A zero-length catalog is a data-availability problem, not an empty result
pub fn ensure_catalog(catalog: &[CatalogItem]) -> Result<(), SearchError> {
    if catalog.is_empty() {
        Err(SearchError::EmptyCatalog)
    } else {
        Ok(())
    }
}

fn selection(raw: Option<String>) -> Selection {
    raw.map(Selection::from).unwrap_or_default()
}

/// Open ends take the bound's extent (or infinity). The result is `None`
/// when the range spans exactly the bounds.
fn normalize_range(
    field: &str,
    raw: Option<RawRange>,
    bound: Option<Bounds>,
) -> Result<Option<RangeFilter>, SearchError> {
    let Some((min, max)) = raw else {
        return Ok(None);
    };

    let min = min.or(bound.map(|b| b.min)).unwrap_or(f64::NEG_INFINITY);
    let max = max.or(bound.map(|b| b.max)).unwrap_or(f64::INFINITY);

    if min > max {
        return Err(SearchError::malformed(
            field,
            format!("lower bound {} exceeds upper bound {}", min, max),
        ));
    }

    let full_range = match bound {
        Some(b) => min == b.min && max == b.max,
        None => min == f64::NEG_INFINITY && max == f64::INFINITY,
    };

    if full_range {
        Ok(None)
    } else {
        Ok(Some(RangeFilter::new(min, max)))
    }
}

/// Price additionally treats `[0, ∞]` as unset, whatever the bounds say.
/// An open upper end means ∞ here, before bounds fill it in.
fn price_range(raw: Option<RawRange>, bound: Option<Bounds>) -> Result<Option<RangeFilter>, SearchError> {
    if let Some((min, None)) = raw {
        if min.map_or(true, |m| m <= 0.0) {
            return Ok(None);
        }
    }

    let range = normalize_range("priceRange", raw, bound)?;
    Ok(range.filter(|r| !(r.min <= 0.0 && r.max == f64::INFINITY)))
}
