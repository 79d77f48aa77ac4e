use serde::{Deserialize, Serialize};
use std::fmt;

/// A categorical selection: either the "all" sentinel or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Exact(String),
}

pub const ALL_SENTINEL: &str = "all";

impl Selection {
    /// Parse a raw selection. Empty strings and "all" (any case) are unset.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case(ALL_SENTINEL) {
            Selection::All
        } else {
            Selection::Exact(raw.to_string())
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Exact(v) => Some(v),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl From<String> for Selection {
    fn from(raw: String) -> Self {
        Selection::parse(&raw)
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL_SENTINEL.to_string(),
            Selection::Exact(v) => v,
        }
    }
}

/// Inclusive numeric range. Either end may be infinite; open ends
/// serialize as `null` since JSON has no infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    #[serde(with = "open_min")]
    pub min: f64,
    #[serde(with = "open_max")]
    pub max: f64,
}

macro_rules! open_bound {
    ($name:ident, $open:expr) => {
        mod $name {
            use serde::{Deserialize, Deserializer, Serializer};

            pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
                if value.is_finite() {
                    serializer.serialize_some(value)
                } else {
                    serializer.serialize_none()
                }
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
                Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or($open))
            }
        }
    };
}

open_bound!(open_min, f64::NEG_INFINITY);
open_bound!(open_max, f64::INFINITY);

impl RangeFilter {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for RangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_number(self.min), format_number(self.max))
    }
}

/// Shortest display form of a bound; infinite bounds print as ∞
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        if value.is_sign_negative() {
            "-∞".to_string()
        } else {
            "∞".to_string()
        }
    } else {
        value.to_string()
    }
}

/// Independent inclusive ranges per axis. `None` leaves an axis open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionsFilter {
    pub length: Option<RangeFilter>,
    pub width: Option<RangeFilter>,
    pub height: Option<RangeFilter>,
}

impl DimensionsFilter {
    /// Active when any single axis is constrained
    pub fn is_active(&self) -> bool {
        self.length.is_some() || self.width.is_some() || self.height.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Price,
    Weight,
}

impl SortKey {
    /// Unknown keys fall back to name
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "category" => SortKey::Category,
            "price" => SortKey::Price,
            "weight" => SortKey::Weight,
            _ => SortKey::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only "desc"/"descending" select descending order
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// One complete, validated filter request.
///
/// Built fresh per request by [`crate::validation::validate_criteria`] and
/// never mutated during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: Selection,
    pub origin: Selection,
    pub variant_type: Selection,
    pub color: Selection,
    pub treatment: Selection,
    pub certification: Selection,

    // Cut-only facets
    pub clarity: Selection,
    pub cut_quality: Selection,
    pub symmetry: Selection,
    pub polish: Selection,
    pub color_grade: Selection,
    pub color_intensity: Selection,
    pub cut_form: Selection,

    // Rough-only facets
    pub crystal_quality: Selection,
    pub transparency: Selection,

    pub price_range: Option<RangeFilter>,
    pub weight_range: Option<RangeFilter>,
    pub dimensions: DimensionsFilter,
    pub estimated_yield_range: Option<RangeFilter>,

    pub in_stock_only: bool,
    pub has_videos: bool,
    pub has_certificates: bool,

    pub sort: SortOrder,
}

impl FilterCriteria {
    /// The trimmed search term, if there is one
    pub fn term(&self) -> Option<&str> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }

    /// Check whether any criterion deviates from its default
    pub fn has_filters(&self) -> bool {
        let selections = [
            &self.category,
            &self.origin,
            &self.variant_type,
            &self.color,
            &self.treatment,
            &self.certification,
            &self.clarity,
            &self.cut_quality,
            &self.symmetry,
            &self.polish,
            &self.color_grade,
            &self.color_intensity,
            &self.cut_form,
            &self.crystal_quality,
            &self.transparency,
        ];

        self.term().is_some()
            || selections.iter().any(|s| !s.is_all())
            || self.price_range.is_some()
            || self.weight_range.is_some()
            || self.dimensions.is_active()
            || self.estimated_yield_range.is_some()
            || self.in_stock_only
            || self.has_videos
            || self.has_certificates
    }
}
