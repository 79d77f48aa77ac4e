use anyhow::Result;

use crate::operations::{SavedSearchStore, ValidationError};
use crate::ui::format_list;

/// Names of the owner's saved searches
pub fn handle_list_saved(store: &dyn SavedSearchStore, owner: &str, json: bool) -> Result<String> {
    let names = store.list(owner)?;
    if json {
        Ok(serde_json::to_string_pretty(&names)?)
    } else {
        Ok(format_list(&format!("Saved searches for {}", owner), &names))
    }
}

/// Remove one saved search; a missing name is a usage error
pub fn handle_delete_saved(store: &mut dyn SavedSearchStore, owner: &str, name: &str) -> Result<String> {
    if !store.delete(owner, name)? {
        return Err(ValidationError {
            field: "saved".to_string(),
            message: format!("No saved search named '{}' for {}", name, owner),
        }
        .into());
    }
    Ok(format!("Deleted saved search '{}'", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::MemoryStore;
    use gemsearch_core::FilterCriteria;

    #[test]
    fn test_list_and_delete() {
        let mut store = MemoryStore::default();
        store.save("ada", "cheap", &FilterCriteria::default()).unwrap();

        let listed = handle_list_saved(&store, "ada", true).unwrap();
        assert_eq!(serde_json::from_str::<Vec<String>>(&listed).unwrap(), vec!["cheap"]);

        assert!(handle_delete_saved(&mut store, "ada", "cheap").is_ok());
        let err = handle_delete_saved(&mut store, "ada", "cheap").unwrap_err();
        assert!(err.downcast_ref::<ValidationError>().is_some());
    }

    #[test]
    fn test_list_text_when_empty() {
        let output = handle_list_saved(&MemoryStore::default(), "grace", false).unwrap();
        assert!(output.contains("Saved searches for grace"));
        assert!(output.contains("_none_"));
    }
}
