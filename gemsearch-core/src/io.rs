use crate::error::SearchError;
use crate::models::CatalogItem;
use crate::schema::CatalogBounds;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// A catalog file is either a bare array or an object with an `items` array
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Items(Vec<CatalogItem>),
    Wrapped { items: Vec<CatalogItem> },
}

/// Read and decode a JSON file
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, SearchError> {
    let path = path.as_ref();
    let load_error = |source: Box<dyn std::error::Error + Send + Sync>| SearchError::Load {
        path: path.to_path_buf(),
        source,
    };

    let contents = fs::read_to_string(path).map_err(|e| load_error(e.into()))?;
    serde_json::from_str(&contents).map_err(|e| load_error(e.into()))
}

/// Load a catalog from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>, SearchError> {
    let items = match read_json(path.as_ref())? {
        CatalogFile::Items(items) | CatalogFile::Wrapped { items } => items,
    };
    info!(path = %path.as_ref().display(), items = items.len(), "loaded catalog");
    Ok(items)
}

/// Load caller-supplied range bounds from a JSON file
pub fn load_bounds<P: AsRef<Path>>(path: P) -> Result<CatalogBounds, SearchError> {
    read_json(path)
}

/// Load a raw search payload from a JSON file
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<serde_json::Value, SearchError> {
    read_json(path)
}
