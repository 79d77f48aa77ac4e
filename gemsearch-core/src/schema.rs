//! Static attribute taxonomy for catalog items.
//!
//! Every filterable attribute is either common to all stones or exists only
//! for one of the two variants. The scope decides which items a facet filter
//! can ever match: a rough stone never satisfies a cut-only facet, even when
//! the strings happen to coincide.

use crate::models::{CatalogItem, Variant};
use serde::{Deserialize, Serialize};

/// Which items carry an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeScope {
    Common,
    CutOnly,
    RoughOnly,
}

/// A categorical attribute a caller can filter or group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Category,
    Origin,
    Type,
    Color,
    Treatment,
    Certification,
    Clarity,
    CutQuality,
    Symmetry,
    Polish,
    ColorGrade,
    ColorIntensity,
    CutForm,
    CrystalQuality,
    Transparency,
}

impl Facet {
    pub const ALL: [Facet; 15] = [
        Facet::Category,
        Facet::Origin,
        Facet::Type,
        Facet::Color,
        Facet::Treatment,
        Facet::Certification,
        Facet::Clarity,
        Facet::CutQuality,
        Facet::Symmetry,
        Facet::Polish,
        Facet::ColorGrade,
        Facet::ColorIntensity,
        Facet::CutForm,
        Facet::CrystalQuality,
        Facet::Transparency,
    ];

    /// Request payload key for this facet
    pub fn key(self) -> &'static str {
        match self {
            Facet::Category => "category",
            Facet::Origin => "origin",
            Facet::Type => "type",
            Facet::Color => "color",
            Facet::Treatment => "treatment",
            Facet::Certification => "certification",
            Facet::Clarity => "clarity",
            Facet::CutQuality => "cutQuality",
            Facet::Symmetry => "symmetry",
            Facet::Polish => "polish",
            Facet::ColorGrade => "colorGrade",
            Facet::ColorIntensity => "colorIntensity",
            Facet::CutForm => "cutForm",
            Facet::CrystalQuality => "crystalQuality",
            Facet::Transparency => "transparency",
        }
    }

    /// Display label used in applied-filter descriptions
    pub fn label(self) -> &'static str {
        match self {
            Facet::Category => "Kategorie",
            Facet::Origin => "Herkunft",
            Facet::Type => "Typ",
            Facet::Color => "Farbe",
            Facet::Treatment => "Behandlung",
            Facet::Certification => "Zertifizierung",
            Facet::Clarity => "Reinheit",
            Facet::CutQuality => "Schliffqualität",
            Facet::Symmetry => "Symmetrie",
            Facet::Polish => "Politur",
            Facet::ColorGrade => "Farbgrad",
            Facet::ColorIntensity => "Farbintensität",
            Facet::CutForm => "Schliffform",
            Facet::CrystalQuality => "Kristallqualität",
            Facet::Transparency => "Transparenz",
        }
    }

    pub fn scope(self) -> AttributeScope {
        match self {
            Facet::Clarity
            | Facet::CutQuality
            | Facet::Symmetry
            | Facet::Polish
            | Facet::ColorGrade
            | Facet::ColorIntensity
            | Facet::CutForm => AttributeScope::CutOnly,
            Facet::CrystalQuality | Facet::Transparency => AttributeScope::RoughOnly,
            _ => AttributeScope::Common,
        }
    }

    /// Look a facet up by payload key, case-insensitively
    pub fn from_key(key: &str) -> Option<Facet> {
        let key = key.trim();
        Facet::ALL
            .into_iter()
            .find(|facet| facet.key().eq_ignore_ascii_case(key))
    }

    /// The item's value for this facet, or `None` when the item does not
    /// carry it (wrong variant, no color, uncertified).
    ///
    /// Treatment reports `untreated` for untreated stones so that facet
    /// options line up with the filter sentinel.
    pub fn value_of(self, item: &CatalogItem) -> Option<&str> {
        match (self, &item.variant) {
            (Facet::Category, _) => non_empty(&item.category),
            (Facet::Origin, _) => non_empty(&item.origin),
            (Facet::Type, _) => Some(item.kind().as_str()),
            (Facet::Color, _) => item.color.as_deref().and_then(non_empty),
            (Facet::Treatment, _) => {
                if item.treatment.treated {
                    non_empty(&item.treatment.kind)
                } else {
                    Some(UNTREATED)
                }
            }
            (Facet::Certification, _) => {
                if item.certification.certified {
                    non_empty(&item.certification.lab)
                } else {
                    None
                }
            }
            (Facet::Clarity, Variant::Cut(cut)) => non_empty(&cut.clarity),
            (Facet::CutQuality, Variant::Cut(cut)) => non_empty(&cut.cut_quality),
            (Facet::Symmetry, Variant::Cut(cut)) => non_empty(&cut.symmetry),
            (Facet::Polish, Variant::Cut(cut)) => non_empty(&cut.polish),
            (Facet::ColorGrade, Variant::Cut(cut)) => non_empty(&cut.color_grade),
            (Facet::ColorIntensity, Variant::Cut(cut)) => non_empty(&cut.color_intensity),
            (Facet::CutForm, Variant::Cut(cut)) => non_empty(&cut.cut_form),
            (Facet::CrystalQuality, Variant::Rough(rough)) => non_empty(&rough.crystal_quality),
            (Facet::Transparency, Variant::Rough(rough)) => non_empty(&rough.transparency),
            _ => None,
        }
    }

    /// Fixed vocabulary offered by the shop panels, if the facet has one.
    /// Values outside the vocabulary are still valid filters; they just
    /// match nothing unless a catalog item carries them.
    pub fn vocabulary(self) -> Option<&'static [&'static str]> {
        match self {
            Facet::Type => Some(&["cut", "rough"][..]),
            Facet::Clarity => Some(&["FL", "IF", "VVS1", "VVS2", "VS1", "VS2", "SI1", "SI2", "I1"][..]),
            Facet::CutQuality | Facet::Symmetry | Facet::Polish => {
                Some(&["Excellent", "Very Good", "Good", "Fair", "Poor"][..])
            }
            Facet::ColorIntensity => Some(&["Light", "Medium", "Intense", "Vivid"][..]),
            Facet::CutForm => Some(&[
                "Round", "Oval", "Cushion", "Emerald", "Pear", "Marquise", "Heart", "Princess",
                "Radiant", "Trillion", "Cabochon",
            ][..]),
            Facet::CrystalQuality => Some(&["Excellent", "Good", "Fair", "Poor"][..]),
            Facet::Transparency => Some(&["Transparent", "Translucent", "Opaque"][..]),
            _ => None,
        }
    }
}

pub const UNTREATED: &str = "untreated";
pub const CERTIFIED: &str = "certified";
pub const UNCERTIFIED: &str = "uncertified";

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Inclusive numeric extent of one attribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    fn observe(values: impl Iterator<Item = f64>) -> Option<Bounds> {
        values.fold(None, |acc, v| match acc {
            None => Some(Bounds { min: v, max: v }),
            Some(b) => Some(Bounds {
                min: b.min.min(v),
                max: b.max.max(v),
            }),
        })
    }
}

/// Default extents of every numeric range a caller can set.
///
/// A requested range equal to these bounds counts as "full range" and is
/// not reported as an applied filter. Callers either observe them from the
/// live catalog or supply fixed UI maxima.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogBounds {
    #[serde(default)]
    pub price: Option<Bounds>,
    #[serde(default)]
    pub weight: Option<Bounds>,
    #[serde(default)]
    pub estimated_yield: Option<Bounds>,
    #[serde(default)]
    pub length: Option<Bounds>,
    #[serde(default)]
    pub width: Option<Bounds>,
    #[serde(default)]
    pub height: Option<Bounds>,
}

impl CatalogBounds {
    /// Observed min/max of every numeric attribute in `catalog`
    pub fn observe(catalog: &[CatalogItem]) -> Self {
        CatalogBounds {
            price: Bounds::observe(catalog.iter().map(|item| item.price)),
            weight: Bounds::observe(catalog.iter().map(CatalogItem::weight)),
            estimated_yield: Bounds::observe(catalog.iter().filter_map(CatalogItem::estimated_yield)),
            length: Bounds::observe(catalog.iter().map(|item| item.dimensions.length)),
            width: Bounds::observe(catalog.iter().map(|item| item.dimensions.width)),
            height: Bounds::observe(catalog.iter().map(|item| item.dimensions.height)),
        }
    }
}
