use colored::Colorize;
use gemsearch_core::criteria::format_number;
use gemsearch_core::{
    get_sorted_group_names, group_items_by_facet, CatalogItem, Facet, FacetOption, SearchResult,
    Variant,
};
use std::fmt::Write;

/// Render a search result as a markdown-style report
pub fn format_result(result: &SearchResult, group_by: Option<Facet>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", "# Filtered Results".bold());

    if !result.applied_filters.is_empty() {
        let _ = writeln!(out, "## Active Filters\n");
        for filter in &result.applied_filters {
            let _ = writeln!(out, "- {}", filter.cyan());
        }
        out.push('\n');
    }

    if let Some(facet) = group_by {
        let _ = writeln!(out, "**Grouped by:** {}\n", facet.label());
    }

    let _ = writeln!(
        out,
        "**Matching Items:** {} ({} ms)\n",
        result.total_count, result.elapsed_time_millis
    );

    if result.items.is_empty() {
        let _ = writeln!(out, "_No gemstones match the specified filters._\n");
        if let Some(suggestions) = result.suggestions.as_ref().filter(|s| !s.is_empty()) {
            let _ = writeln!(out, "{}", "Did you mean:".yellow());
            for suggestion in suggestions {
                let _ = writeln!(out, "- {}", suggestion);
            }
        }
        return out;
    }

    match group_by {
        Some(facet) => out.push_str(&format_grouped_items(&result.items, facet)),
        None => {
            for item in &result.items {
                out.push_str(&format_item(item));
            }
        }
    }

    out
}

fn format_grouped_items(items: &[CatalogItem], facet: Facet) -> String {
    let groups = group_items_by_facet(items, facet);
    let mut out = String::new();

    for group_name in get_sorted_group_names(&groups) {
        if let Some(group_items) = groups.get(&group_name) {
            let _ = writeln!(out, "## {}: {}\n", facet.label(), group_name);
            for item in group_items {
                out.push_str(&format_item(item));
            }
        }
    }

    out
}

/// One catalog item as a heading plus attribute list
pub fn format_item(item: &CatalogItem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "### {}\n", item.name.bold());

    let weight = format!("{} {}", format_number(item.weight()), item.weight_unit().symbol());
    let _ = writeln!(out, "- Typ: {} · {}", item.kind().label(), weight);
    let _ = writeln!(out, "- Kategorie: {}", item.category);
    let _ = writeln!(out, "- Herkunft: {}", item.origin);
    if let Some(color) = &item.color {
        let _ = writeln!(out, "- Farbe: {}", color);
    }
    let _ = writeln!(out, "- Preis: €{}", format_number(item.price));

    match &item.variant {
        Variant::Cut(cut) => {
            let facets = [(Facet::Clarity, &cut.clarity), (Facet::CutForm, &cut.cut_form)];
            for (facet, value) in facets {
                if !value.is_empty() {
                    let _ = writeln!(out, "- {}: {}", facet.label(), value);
                }
            }
        }
        Variant::Rough(rough) => {
            if let Some(ct) = rough.estimated_carat_yield {
                let _ = writeln!(out, "- Geschätzte Ausbeute: {} ct", format_number(ct));
            }
        }
    }

    if !item.in_stock {
        let _ = writeln!(out, "- {}", "Nicht auf Lager".red());
    }

    out.push('\n');
    out
}

/// Render the options of one facet, noting vocabulary values no item carries
pub fn format_facet_options(facet: Facet, options: &[FacetOption]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## {}\n", facet.label().bold());

    for option in options {
        let _ = writeln!(out, "- {} ({})", option.value, option.count);
    }

    if let Some(vocabulary) = facet.vocabulary() {
        let unused: Vec<&str> = vocabulary
            .iter()
            .copied()
            .filter(|v| !options.iter().any(|o| o.value == *v))
            .collect();
        if !unused.is_empty() {
            let _ = writeln!(out, "\n_Not in catalog:_ {}", unused.join(", "));
        }
    }

    out
}

/// Render a plain list, one entry per line
pub fn format_list(title: &str, entries: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title.bold());
    if entries.is_empty() {
        let _ = writeln!(out, "_none_");
    }
    for entry in entries {
        let _ = writeln!(out, "- {}", entry);
    }
    out
}
