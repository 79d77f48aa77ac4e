use crate::models::CatalogItem;
use crate::schema::Facet;
use crate::sorting::normalize_for_sorting;
use serde::Serialize;
use std::collections::HashMap;

/// Group key for items that do not carry the grouping facet
pub const UNSPECIFIED_GROUP: &str = "_unspecified_";

/// One entry of a facet dropdown: a distinct value and how many items have it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
}

/// Distinct values of `facet` across `items`, with counts, in collation order.
/// Items outside the facet's variant scope contribute nothing.
pub fn facet_options(items: &[CatalogItem], facet: Facet) -> Vec<FacetOption> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in items.iter().filter_map(|item| facet.value_of(item)) {
        *counts.entry(value).or_default() += 1;
    }

    let mut options: Vec<FacetOption> = counts
        .into_iter()
        .map(|(value, count)| FacetOption {
            value: value.to_string(),
            count,
        })
        .collect();
    options.sort_by(|a, b| {
        normalize_for_sorting(&a.value)
            .cmp(&normalize_for_sorting(&b.value))
            .then_with(|| a.value.cmp(&b.value))
    });
    options
}

/// Group items by a facet
/// Items lacking the facet go to the "_unspecified_" group
pub fn group_items_by_facet(items: &[CatalogItem], facet: Facet) -> HashMap<String, Vec<CatalogItem>> {
    let mut groups: HashMap<String, Vec<CatalogItem>> = HashMap::new();

    for item in items {
        let key = facet.value_of(item).unwrap_or(UNSPECIFIED_GROUP);
        groups.entry(key.to_string()).or_default().push(item.clone());
    }

    groups
}

/// Get group names in collation order, with the unspecified group last
pub fn get_sorted_group_names(groups: &HashMap<String, Vec<CatalogItem>>) -> Vec<String> {
    let mut group_names: Vec<String> = groups.keys().cloned().collect();
    group_names.sort_by_key(|name| (name == UNSPECIFIED_GROUP, normalize_for_sorting(name)));
    group_names
}
