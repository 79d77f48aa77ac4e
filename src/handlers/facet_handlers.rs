use anyhow::{Context, Result};
use gemsearch_core::validation::ensure_catalog;
use gemsearch_core::{autocomplete, facet_options};

use crate::operations::parse_facet_key;
use crate::state::AppState;
use crate::ui::{format_facet_options, format_list};

/// Distinct values of one facet across the catalog, with counts
pub fn handle_facets(state: &AppState, facet_key: &str, json: bool) -> Result<String> {
    ensure_catalog(&state.catalog)?;
    let facet = parse_facet_key("facet", facet_key)?;
    let options = facet_options(&state.catalog, facet);

    if json {
        serde_json::to_string_pretty(&options).context("Could not serialize facet options")
    } else {
        Ok(format_facet_options(facet, &options))
    }
}

/// Type-ahead suggestions for a partially typed search term
pub fn handle_suggest(state: &AppState, partial: &str, json: bool) -> Result<String> {
    ensure_catalog(&state.catalog)?;
    let suggestions = autocomplete(&state.catalog, partial);

    if json {
        serde_json::to_string_pretty(&suggestions).context("Could not serialize suggestions")
    } else {
        Ok(format_list("Suggestions", &suggestions))
    }
}
