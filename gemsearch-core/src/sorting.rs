use crate::criteria::{SortDirection, SortKey, SortOrder};
use crate::models::CatalogItem;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static LEADING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|gli|un|une|een)\s+")
        .expect("article pattern is valid")
});

/// Sort items in place by the selected key and direction.
///
/// The sort is stable in both directions: descending reverses the
/// comparator, not the sequence, so equal keys keep their input order.
pub fn sort_items(items: &mut [CatalogItem], order: SortOrder) {
    let compare: fn(&CatalogItem, &CatalogItem) -> Ordering = match order.key {
        SortKey::Name => |a, b| normalize_for_sorting(&a.name).cmp(&normalize_for_sorting(&b.name)),
        SortKey::Category => {
            |a, b| normalize_for_sorting(&a.category).cmp(&normalize_for_sorting(&b.category))
        }
        SortKey::Price => |a, b| a.price.total_cmp(&b.price),
        SortKey::Weight => |a, b| a.weight().total_cmp(&b.weight()),
    };

    match order.direction {
        SortDirection::Ascending => items.sort_by(compare),
        SortDirection::Descending => items.sort_by(|a, b| compare(b, a)),
    }
}

/// Normalize a string into a collation key
/// - Strip leading articles (a, an, the, der, le, ...)
/// - Decompose unicode (NFD) and drop combining marks, so "É" sorts with "E"
/// - Lowercase
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let folded: String = without_articles
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip a leading article so "The Star of India" files under S
pub fn strip_leading_articles(s: &str) -> String {
    LEADING_ARTICLE.replace(s.trim_start(), "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CutAttributes, RoughAttributes, Variant};

    fn item(name: &str, category: &str, price: f64, variant: Variant) -> CatalogItem {
        CatalogItem {
            id: name.to_lowercase(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            origin: String::new(),
            color: None,
            price,
            in_stock: true,
            treatment: Default::default(),
            certification: Default::default(),
            dimensions: Default::default(),
            videos: Vec::new(),
            variant,
        }
    }

    fn cut(name: &str, price: f64, carats: f64) -> CatalogItem {
        item(
            name,
            "Cut",
            price,
            Variant::Cut(CutAttributes {
                carat_weight: carats,
                ..Default::default()
            }),
        )
    }

    fn rough(name: &str, price: f64, grams: f64) -> CatalogItem {
        item(
            name,
            "Rough",
            price,
            Variant::Rough(RoughAttributes {
                gram_weight: grams,
                ..Default::default()
            }),
        )
    }

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    fn order(key: SortKey, direction: SortDirection) -> SortOrder {
        SortOrder { key, direction }
    }

    #[test]
    fn test_normalize_for_sorting() {
        assert_eq!(normalize_for_sorting("The Star of India"), "star of india");
        assert_eq!(normalize_for_sorting("Émeraude  Verte"), "emeraude verte");
        assert_eq!(normalize_for_sorting("Andalusite"), "andalusite");
    }

    #[test]
    fn test_sort_by_name_is_accent_insensitive() {
        let mut items = vec![cut("Zircon", 1.0, 1.0), cut("Émerald", 1.0, 1.0), cut("Diamond", 1.0, 1.0)];
        sort_items(&mut items, order(SortKey::Name, SortDirection::Ascending));
        assert_eq!(names(&items), vec!["Diamond", "Émerald", "Zircon"]);
    }

    #[test]
    fn test_sort_by_price_descending() {
        let mut items = vec![cut("A", 10.0, 1.0), cut("B", 30.0, 1.0), cut("C", 20.0, 1.0)];
        sort_items(&mut items, order(SortKey::Price, SortDirection::Descending));
        assert_eq!(names(&items), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_by_weight_uses_variant_field() {
        let mut items = vec![rough("Rough", 1.0, 4.0), cut("Cut", 1.0, 2.5)];
        sort_items(&mut items, order(SortKey::Weight, SortDirection::Ascending));
        assert_eq!(names(&items), vec!["Cut", "Rough"]);
    }

    #[test]
    fn test_ties_keep_input_order_both_directions() {
        let original = vec![
            cut("First", 50.0, 1.0),
            cut("Cheap", 10.0, 1.0),
            cut("Second", 50.0, 1.0),
            cut("Third", 50.0, 1.0),
        ];

        let mut asc = original.clone();
        sort_items(&mut asc, order(SortKey::Price, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["Cheap", "First", "Second", "Third"]);

        let mut desc = original.clone();
        sort_items(&mut desc, order(SortKey::Price, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["First", "Second", "Third", "Cheap"]);
    }

    #[test]
    fn test_category_ties_keep_input_order() {
        let mut items = vec![
            rough("Zeta", 1.0, 1.0),
            cut("Alpha", 1.0, 1.0),
            rough("Beta", 1.0, 1.0),
        ];
        sort_items(&mut items, order(SortKey::Category, SortDirection::Descending));
        assert_eq!(names(&items), vec!["Zeta", "Beta", "Alpha"]);
    }
}
