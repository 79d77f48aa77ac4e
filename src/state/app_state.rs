use anyhow::{Context, Result};
use gemsearch_core::{load_bounds, load_catalog, CatalogBounds, CatalogItem};
use std::path::{Path, PathBuf};

/// Everything a request needs: the catalog snapshot, where it came from,
/// optional fixed range bounds and the user issuing the request
#[derive(Debug)]
pub struct AppState {
    /// Currently loaded catalog
    pub catalog: Vec<CatalogItem>,
    /// Path to the catalog file
    pub catalog_file: PathBuf,
    /// Caller-supplied range bounds; observed from the catalog when absent
    pub bounds: Option<CatalogBounds>,
    /// Owner key for saved searches
    pub owner: String,
}

impl AppState {
    /// Load the catalog (and bounds, if given) for one invocation
    pub fn load(catalog_file: &Path, bounds_file: Option<&Path>, owner: &str) -> Result<Self> {
        let catalog = load_catalog(catalog_file)
            .with_context(|| format!("Could not load catalog '{}'", catalog_file.display()))?;

        let bounds = bounds_file
            .map(|path| {
                load_bounds(path)
                    .with_context(|| format!("Could not load bounds '{}'", path.display()))
            })
            .transpose()?;

        Ok(Self {
            catalog,
            catalog_file: catalog_file.to_path_buf(),
            bounds,
            owner: owner.to_string(),
        })
    }

    /// Build state around an in-memory catalog
    #[cfg(test)]
    pub fn from_catalog(catalog: Vec<CatalogItem>, owner: &str) -> Self {
        Self {
            catalog,
            catalog_file: PathBuf::from("<memory>"),
            bounds: None,
            owner: owner.to_string(),
        }
    }

    /// Short label for headings
    pub fn catalog_label(&self) -> String {
        self.catalog_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("catalog")
            .to_string()
    }
}
