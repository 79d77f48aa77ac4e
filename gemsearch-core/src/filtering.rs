//! The ordered predicate pipeline behind every catalog search.
//!
//! Each active criterion narrows the current set and appends one
//! human-readable description. The order of passes is fixed and is the
//! order in which descriptions appear in the result.

use crate::criteria::{format_number, FilterCriteria, RangeFilter, Selection};
use crate::models::{CatalogItem, Variant, VariantKind, WeightUnit};
use crate::schema::{Facet, CERTIFIED, UNCERTIFIED, UNTREATED};
use tracing::trace;

/// Items that survived every pass, plus what each active pass was
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub items: Vec<CatalogItem>,
    pub applied_filters: Vec<String>,
}

/// Narrows a borrowed catalog one pass at a time
struct Pipeline<'a> {
    items: Vec<&'a CatalogItem>,
    applied: Vec<String>,
}

impl<'a> Pipeline<'a> {
    fn new(catalog: &'a [CatalogItem]) -> Self {
        Self {
            items: catalog.iter().collect(),
            applied: Vec::new(),
        }
    }

    fn pass(&mut self, description: String, predicate: impl Fn(&CatalogItem) -> bool) {
        self.items.retain(|item| predicate(*item));
        trace!(filter = %description, remaining = self.items.len(), "filter pass");
        self.applied.push(description);
    }

    fn finish(self) -> FilterOutcome {
        FilterOutcome {
            items: self.items.into_iter().cloned().collect(),
            applied_filters: self.applied,
        }
    }
}

/// Apply every active criterion to `catalog`, in pipeline order.
///
/// The catalog is never mutated; surviving items are cloned into the
/// outcome in their original relative order.
pub fn apply_filters(catalog: &[CatalogItem], criteria: &FilterCriteria) -> FilterOutcome {
    let mut pipeline = Pipeline::new(catalog);

    // 1. Free text
    if let Some(term) = criteria.term() {
        let needle = term.to_lowercase();
        pipeline.pass(format!("Suche: \"{}\"", term), |item| matches_text(item, &needle));
    }

    // 2-5. Common categorical facets
    if let Some(v) = criteria.category.value() {
        pipeline.pass(describe(Facet::Category, v), |item| item.category == v);
    }
    if let Some(v) = criteria.origin.value() {
        pipeline.pass(describe(Facet::Origin, v), |item| item.origin == v);
    }
    if let Some(v) = criteria.variant_type.value() {
        let kind = VariantKind::parse(v);
        let label = kind.map(VariantKind::label).unwrap_or(v);
        pipeline.pass(describe(Facet::Type, label), |item| Some(item.kind()) == kind);
    }
    if let Some(v) = criteria.color.value() {
        pipeline.pass(describe(Facet::Color, v), |item| item.color.as_deref() == Some(v));
    }

    // 6. Price
    if let Some(range) = criteria.price_range {
        pipeline.pass(
            format!("Preis: €{} - €{}", format_number(range.min), format_number(range.max)),
            |item| range.contains(item.price),
        );
    }

    // 7. Weight, labelled by what the whole catalog holds
    if let Some(range) = criteria.weight_range {
        let unit = WeightUnit::for_catalog(catalog);
        pipeline.pass(format!("Gewicht: {} {}", range, unit.symbol()), |item| {
            range.contains(item.weight())
        });
    }

    // 8. Treatment
    if let Some(v) = criteria.treatment.value() {
        if v.eq_ignore_ascii_case(UNTREATED) {
            pipeline.pass(describe(Facet::Treatment, "Unbehandelt"), |item| {
                !item.treatment.treated
            });
        } else {
            pipeline.pass(describe(Facet::Treatment, v), |item| {
                item.treatment.treated && item.treatment.kind == v
            });
        }
    }

    // 9. Certification
    if let Some(v) = criteria.certification.value() {
        if v.eq_ignore_ascii_case(CERTIFIED) {
            pipeline.pass(describe(Facet::Certification, "Zertifiziert"), |item| {
                item.certification.certified
            });
        } else if v.eq_ignore_ascii_case(UNCERTIFIED) {
            pipeline.pass(describe(Facet::Certification, "Nicht zertifiziert"), |item| {
                !item.certification.certified
            });
        } else {
            pipeline.pass(describe(Facet::Certification, v), |item| {
                item.certification.certified && item.certification.lab == v
            });
        }
    }

    // 10-11. Variant-scoped facets
    let scoped = [
        (Facet::Clarity, &criteria.clarity),
        (Facet::CutQuality, &criteria.cut_quality),
        (Facet::Symmetry, &criteria.symmetry),
        (Facet::Polish, &criteria.polish),
        (Facet::ColorGrade, &criteria.color_grade),
        (Facet::ColorIntensity, &criteria.color_intensity),
        (Facet::CutForm, &criteria.cut_form),
        (Facet::CrystalQuality, &criteria.crystal_quality),
        (Facet::Transparency, &criteria.transparency),
    ];
    for (facet, selection) in scoped {
        apply_scoped_facet(&mut pipeline, facet, selection);
    }

    // 12. Dimensions
    if criteria.dimensions.is_active() {
        let dims = criteria.dimensions;
        let axes = [("L", dims.length), ("B", dims.width), ("H", dims.height)];
        let described: Vec<String> = axes
            .iter()
            .filter_map(|(axis, range)| {
                range.map(|r| format!("{} {}-{}", axis, format_number(r.min), format_number(r.max)))
            })
            .collect();
        pipeline.pass(format!("Abmessungen: {} mm", described.join(", ")), |item| {
            within(dims.length, item.dimensions.length)
                && within(dims.width, item.dimensions.width)
                && within(dims.height, item.dimensions.height)
        });
    }

    // 13-14. Media
    if criteria.has_videos {
        pipeline.pass("Mit Videos".to_string(), CatalogItem::has_videos);
    }
    if criteria.has_certificates {
        pipeline.pass("Mit Zertifikat".to_string(), CatalogItem::has_certificate);
    }

    // 15. Estimated yield: cut stones have no yield and drop out entirely
    if let Some(range) = criteria.estimated_yield_range {
        pipeline.pass(format!("Geschätzte Ausbeute: {} ct", range), |item| {
            match &item.variant {
                Variant::Rough(rough) => rough
                    .estimated_carat_yield
                    .is_some_and(|ct| range.contains(ct)),
                Variant::Cut(_) => false,
            }
        });
    }

    // 16. Stock
    if criteria.in_stock_only {
        pipeline.pass("Nur auf Lager".to_string(), |item| item.in_stock);
    }

    pipeline.finish()
}

/// Case-insensitive substring match on name, description, category and color
pub fn matches_text(item: &CatalogItem, needle_lower: &str) -> bool {
    let fields = [
        Some(item.name.as_str()),
        Some(item.description.as_str()),
        Some(item.category.as_str()),
        item.color.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

/// A facet filter that only items of the facet's variant can satisfy
fn apply_scoped_facet(pipeline: &mut Pipeline<'_>, facet: Facet, selection: &Selection) {
    if let Some(v) = selection.value() {
        pipeline.pass(describe(facet, v), |item| facet.value_of(item) == Some(v));
    }
}

fn within(range: Option<RangeFilter>, value: f64) -> bool {
    range.map_or(true, |r| r.contains(value))
}

fn describe(facet: Facet, value: &str) -> String {
    format!("{}: {}", facet.label(), value)
}
