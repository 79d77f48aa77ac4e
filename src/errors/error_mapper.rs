use gemsearch_core::SearchError;

use crate::operations::ValidationError;

/// How a failed command is reported to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedError {
    pub title: String,
    pub message: String,
    pub details: String,
    pub exit_code: i32,
}

/// Exit code for requests rejected before evaluation
pub const EXIT_MALFORMED: i32 = 2;
/// Exit code when there is no catalog data to search
pub const EXIT_EMPTY_CATALOG: i32 = 3;
/// Exit code for everything else
pub const EXIT_FAILURE: i32 = 1;

/// Map a command error to a user-friendly report
pub fn map_error(error: &anyhow::Error) -> MappedError {
    if let Some(search_error) = error.downcast_ref::<SearchError>() {
        return map_search_error(search_error, error);
    }

    if let Some(validation) = error.downcast_ref::<ValidationError>() {
        return MappedError {
            title: "Invalid Arguments".to_string(),
            message: format!("The '{}' argument is invalid.", validation.field),
            details: validation.message.clone(),
            exit_code: EXIT_MALFORMED,
        };
    }

    MappedError {
        title: "Error".to_string(),
        message: error.to_string(),
        details: chain_details(error),
        exit_code: EXIT_FAILURE,
    }
}

fn map_search_error(search_error: &SearchError, error: &anyhow::Error) -> MappedError {
    match search_error {
        SearchError::MalformedRequest { field, detail } => MappedError {
            title: "Malformed Request".to_string(),
            message: format!("The search request field '{}' is invalid.", field),
            details: detail.clone(),
            exit_code: EXIT_MALFORMED,
        },
        SearchError::EmptyCatalog => MappedError {
            title: "Catalog Unavailable".to_string(),
            message: "The catalog contains no gemstones.".to_string(),
            details: "Check that the catalog file holds at least one item.".to_string(),
            exit_code: EXIT_EMPTY_CATALOG,
        },
        SearchError::Load { path, .. } => {
            let error_string = chain_details(error);
            let details = if error_string.contains("No such file") {
                format!(
                    "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                    path.display()
                )
            } else if error_string.contains("Permission denied") {
                format!("You don't have permission to read this file:\n{}", path.display())
            } else {
                error_string
            };
            MappedError {
                title: "Error Loading File".to_string(),
                message: error.to_string(),
                details,
                exit_code: EXIT_FAILURE,
            }
        }
    }
}

fn chain_details(error: &anyhow::Error) -> String {
    error
        .chain()
        .skip(1)
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
