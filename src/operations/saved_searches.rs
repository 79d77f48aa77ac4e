use anyhow::{Context, Result};
use gemsearch_core::FilterCriteria;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Named filter criteria, keyed by the user that saved them.
///
/// The search core never sees a store; handlers load criteria from it and
/// pass a freshly deserialized copy to the engine.
pub trait SavedSearchStore {
    fn save(&mut self, owner: &str, name: &str, criteria: &FilterCriteria) -> Result<()>;
    fn load(&self, owner: &str, name: &str) -> Result<Option<FilterCriteria>>;
    fn list(&self, owner: &str) -> Result<Vec<String>>;
    /// Returns whether anything was removed
    fn delete(&mut self, owner: &str, name: &str) -> Result<bool>;
}

type Entries = BTreeMap<String, BTreeMap<String, FilterCriteria>>;

/// On-disk layout of [`JsonFileStore`]
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    searches: Entries,
}

/// Store kept only for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Entries,
}

impl SavedSearchStore for MemoryStore {
    fn save(&mut self, owner: &str, name: &str, criteria: &FilterCriteria) -> Result<()> {
        self.entries
            .entry(owner.to_string())
            .or_default()
            .insert(name.to_string(), criteria.clone());
        Ok(())
    }

    fn load(&self, owner: &str, name: &str) -> Result<Option<FilterCriteria>> {
        Ok(self.entries.get(owner).and_then(|m| m.get(name)).cloned())
    }

    fn list(&self, owner: &str) -> Result<Vec<String>> {
        Ok(self
            .entries
            .get(owner)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn delete(&mut self, owner: &str, name: &str) -> Result<bool> {
        Ok(self
            .entries
            .get_mut(owner)
            .is_some_and(|m| m.remove(name).is_some()))
    }
}

/// Store persisted as a pretty-printed JSON file, rewritten on every change
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Could not read saved searches '{}'", path.display()))?;
            let file: StoreFile = serde_json::from_str(&contents)
                .with_context(|| format!("Saved searches file '{}' is corrupt", path.display()))?;
            file.searches
        } else {
            Entries::new()
        };

        Ok(Self {
            path,
            memory: MemoryStore { entries },
        })
    }

    fn flush(&self) -> Result<()> {
        let file = StoreFile {
            searches: self.memory.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Could not write saved searches '{}'", self.path.display()))?;
        debug!(path = %self.path.display(), "saved searches written");
        Ok(())
    }
}

impl SavedSearchStore for JsonFileStore {
    fn save(&mut self, owner: &str, name: &str, criteria: &FilterCriteria) -> Result<()> {
        self.memory.save(owner, name, criteria)?;
        self.flush()
    }

    fn load(&self, owner: &str, name: &str) -> Result<Option<FilterCriteria>> {
        self.memory.load(owner, name)
    }

    fn list(&self, owner: &str) -> Result<Vec<String>> {
        self.memory.list(owner)
    }

    fn delete(&mut self, owner: &str, name: &str) -> Result<bool> {
        let removed = self.memory.delete(owner, name)?;
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }
}
