//! Query suggestions mined from the catalog's own vocabulary.
//!
//! Suggestions are deliberately unranked: candidates come back in
//! vocabulary order (names, then categories, colors, origins) and are cut
//! at the mode's cap. Callers wanting relevance ordering must sort them.

use crate::models::CatalogItem;
use std::collections::HashSet;

/// The two call sites that ask for suggestions, each with its own cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionMode {
    /// Zero-result fallback of a full search
    Strict,
    /// Lightweight type-ahead while the user is still typing
    Autocomplete,
}

impl SuggestionMode {
    pub fn cap(self) -> usize {
        match self {
            SuggestionMode::Strict => 5,
            SuggestionMode::Autocomplete => 10,
        }
    }
}

/// Distinct names, categories, colors and origins, in first-seen order.
/// Entries differing only in case collapse to the first spelling seen.
pub fn build_vocabulary(catalog: &[CatalogItem]) -> Vec<String> {
    let names = catalog.iter().map(|item| item.name.as_str());
    let categories = catalog.iter().map(|item| item.category.as_str());
    let colors = catalog.iter().filter_map(|item| item.color.as_deref());
    let origins = catalog.iter().map(|item| item.origin.as_str());

    let mut seen = HashSet::new();
    names
        .chain(categories)
        .chain(colors)
        .chain(origins)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(entry.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Vocabulary entries that contain `term` or are contained in it,
/// case-insensitively, capped by `mode`
pub fn suggest(catalog: &[CatalogItem], term: &str, mode: SuggestionMode) -> Vec<String> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    build_vocabulary(catalog)
        .into_iter()
        .filter(|entry| {
            let entry_lower = entry.to_lowercase();
            entry_lower.contains(&needle) || needle.contains(&entry_lower)
        })
        .take(mode.cap())
        .collect()
}

/// Type-ahead suggestions for a partially typed term
pub fn autocomplete(catalog: &[CatalogItem], partial: &str) -> Vec<String> {
    suggest(catalog, partial, SuggestionMode::Autocomplete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CutAttributes, Variant};

    fn item(name: &str, category: &str, color: Option<&str>, origin: &str) -> CatalogItem {
        CatalogItem {
            id: name.to_lowercase(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            origin: origin.into(),
            color: color.map(str::to_string),
            price: 1.0,
            in_stock: true,
            treatment: Default::default(),
            certification: Default::default(),
            dimensions: Default::default(),
            videos: Vec::new(),
            variant: Variant::Cut(CutAttributes::default()),
        }
    }

    #[test]
    fn test_vocabulary_order_and_dedup() {
        let catalog = vec![
            item("Blue Sapphire", "Sapphire", Some("Blue"), "Sri Lanka"),
            item("Pink Sapphire", "Sapphire", Some("Pink"), "Madagascar"),
        ];
        assert_eq!(
            build_vocabulary(&catalog),
            vec![
                "Blue Sapphire",
                "Pink Sapphire",
                "Sapphire",
                "Blue",
                "Pink",
                "Sri Lanka",
                "Madagascar"
            ]
        );
    }

    #[test]
    fn test_vocabulary_dedup_ignores_case() {
        let catalog = vec![
            item("Sapphire", "sapphire", None, "Sri Lanka"),
            item("SAPPHIRE", "Corundum", None, "sri lanka"),
        ];
        assert_eq!(build_vocabulary(&catalog), vec!["Sapphire", "Corundum", "Sri Lanka"]);
        assert_eq!(suggest(&catalog, "sapph", SuggestionMode::Strict), vec!["Sapphire"]);
    }

    #[test]
    fn test_matches_both_directions() {
        let catalog = vec![item("Star Ruby", "Ruby", None, "Myanmar")];

        // Entry contains the term
        assert_eq!(suggest(&catalog, "rub", SuggestionMode::Strict), vec!["Star Ruby", "Ruby"]);
        // Term contains the entry
        assert_eq!(
            suggest(&catalog, "myanmar rubies", SuggestionMode::Strict),
            vec!["Myanmar"]
        );
    }

    #[test]
    fn test_caps_per_mode() {
        let catalog: Vec<_> = (0..12)
            .map(|i| item(&format!("Garnet {}", i), "Garnet", None, "Kenya"))
            .collect();

        assert_eq!(suggest(&catalog, "garnet", SuggestionMode::Strict).len(), 5);
        assert_eq!(autocomplete(&catalog, "garnet").len(), 10);
        assert_eq!(autocomplete(&catalog, "garnet")[0], "Garnet 0");
    }

    #[test]
    fn test_blank_term_yields_nothing() {
        let catalog = vec![item("Opal", "Opal", None, "Australia")];
        assert!(suggest(&catalog, "  ", SuggestionMode::Autocomplete).is_empty());
    }
}
