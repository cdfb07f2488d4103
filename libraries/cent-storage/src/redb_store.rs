//! Single-file preference store backed by redb

use crate::error::{Result, StorageError};
use cent_core::{PersistedPreferences, PreferenceStore, PREFERENCES_KEY};
use redb::{Database, ReadableTable, TableDefinition, TableError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Table holding the JSON-encoded preference record
const PREFERENCES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("preferences");

/// Durable preference store
///
/// Keeps one JSON record under [`PREFERENCES_KEY`] in a redb database file.
pub struct RedbPreferenceStore {
    db: Database,
    path: PathBuf,
}

impl RedbPreferenceStore {
    /// Open (or create) the database at `path`
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(&path).map_err(StorageError::database)?;
        debug!(path = %path.display(), "Opened preference database");

        Ok(Self { db, path })
    }

    /// Database file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored record
    pub fn read(&self) -> Result<Option<PersistedPreferences>> {
        let txn = self.db.begin_read().map_err(StorageError::database)?;

        let table = match txn.open_table(PREFERENCES_TABLE) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(StorageError::database(e)),
        };

        let Some(raw) = table.get(PREFERENCES_KEY).map_err(StorageError::database)? else {
            return Ok(None);
        };

        let prefs = serde_json::from_slice(raw.value())?;
        Ok(Some(prefs))
    }

    /// Replace the stored record
    pub fn write(&self, prefs: &PersistedPreferences) -> Result<()> {
        let encoded = serde_json::to_vec(prefs)?;

        let txn = self.db.begin_write().map_err(StorageError::database)?;
        {
            let mut table = txn
                .open_table(PREFERENCES_TABLE)
                .map_err(StorageError::database)?;
            table
                .insert(PREFERENCES_KEY, encoded.as_slice())
                .map_err(StorageError::database)?;
        }
        txn.commit().map_err(StorageError::database)?;

        debug!(
            favorites = prefs.favorites.len(),
            recently_played = prefs.recently_played.len(),
            bytes = encoded.len(),
            "Wrote preferences"
        );
        Ok(())
    }

    /// Remove the stored record
    pub fn clear(&self) -> Result<()> {
        let txn = self.db.begin_write().map_err(StorageError::database)?;
        {
            let mut table = txn
                .open_table(PREFERENCES_TABLE)
                .map_err(StorageError::database)?;
            table
                .remove(PREFERENCES_KEY)
                .map_err(StorageError::database)?;
        }
        txn.commit().map_err(StorageError::database)?;
        Ok(())
    }
}

impl PreferenceStore for RedbPreferenceStore {
    fn load(&self) -> cent_core::Result<Option<PersistedPreferences>> {
        Ok(self.read()?)
    }

    fn save(&self, prefs: &PersistedPreferences) -> cent_core::Result<()> {
        Ok(self.write(prefs)?)
    }
}

impl std::fmt::Debug for RedbPreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbPreferenceStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
