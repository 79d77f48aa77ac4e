use anyhow::{Context, Result};
use gemsearch_core::{
    evaluate, evaluate_criteria, evaluate_validated, load_payload, EvaluateOptions, SearchResult,
};
use tracing::{debug, info};

use crate::operations::{
    build_payload, parse_facet_key, AnalyticsSink, SavedSearchStore, ValidationError,
};
use crate::state::AppState;
use crate::ui::format_result;
use crate::SearchArgs;

/// Run one search from command-line arguments and render the result.
///
/// `--saved NAME` replays stored criteria; `--save NAME` stores the
/// validated criteria before running them. The sink sees every result.
pub fn handle_search(
    state: &AppState,
    args: &SearchArgs,
    store: &mut dyn SavedSearchStore,
    sink: &dyn AnalyticsSink,
) -> Result<String> {
    let group_by = args
        .group_by
        .as_deref()
        .map(|key| parse_facet_key("group-by", key))
        .transpose()?;

    let result = if let Some(name) = &args.saved {
        run_saved(state, name, store)?
    } else {
        run_payload(state, args, store)?
    };

    sink.record(&result.summary());

    if args.json {
        serde_json::to_string_pretty(&result).context("Could not serialize search result")
    } else {
        Ok(format_result(&result, group_by))
    }
}

fn run_saved(state: &AppState, name: &str, store: &dyn SavedSearchStore) -> Result<SearchResult> {
    let criteria = store
        .load(&state.owner, name)?
        .ok_or_else(|| ValidationError {
            field: "saved".to_string(),
            message: format!("No saved search named '{}' for {}", name, state.owner),
        })?;

    debug!(name, owner = %state.owner, "replaying saved search");
    Ok(evaluate_criteria(&state.catalog, &criteria)?)
}

fn run_payload(
    state: &AppState,
    args: &SearchArgs,
    store: &mut dyn SavedSearchStore,
) -> Result<SearchResult> {
    let base = args.payload.as_deref().map(load_payload).transpose()?;
    let payload = build_payload(args, base)?;

    let options = EvaluateOptions {
        bounds: state.bounds.clone(),
    };

    match &args.save {
        Some(name) => {
            let (criteria, result) = evaluate_validated(&state.catalog, &payload, &options)?;
            store.save(&state.owner, name, &criteria)?;
            info!(name, owner = %state.owner, "saved search");
            Ok(result)
        }
        None => Ok(evaluate(&state.catalog, &payload, &options)?),
    }
}
