//! redb-backed preference store.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use redb::{Database, ReadableDatabase, TableDefinition};
use tracing::warn;

use crate::store::{EditOp, PreferenceEditor, PreferenceStore};

const TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Preference store persisted in a redb database file.
///
/// Reads run in their own read transaction; an editor commit applies its
/// whole batch in one write transaction. Durability is redb's business;
/// this store performs no verification read-back.
#[derive(Debug, Clone)]
pub struct RedbPrefs {
    db: Arc<Database>,
}

impl RedbPrefs {
    /// Open or create the database at `path` and ensure the preferences
    /// table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        write_txn.open_table(TABLE)?;
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TABLE)?;
        Ok(table.get(key)?.map(|value| value.value().to_string()))
    }

    fn apply(&self, ops: Vec<EditOp>) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(TABLE)?;
            for op in ops {
                match op {
                    EditOp::Put(key, value) => {
                        table.insert(key.as_str(), value.as_str())?;
                    }
                    EditOp::Remove(key) => {
                        table.remove(key.as_str())?;
                    }
                }
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

struct RedbEditor<'a> {
    store: &'a RedbPrefs,
    ops: Vec<EditOp>,
}

impl PreferenceEditor for RedbEditor<'_> {
    fn put(&mut self, key: &str, value: &str) {
        self.ops.push(EditOp::Put(key.to_string(), value.to_string()));
    }

    fn remove(&mut self, key: &str) {
        self.ops.push(EditOp::Remove(key.to_string()));
    }

    fn commit(self: Box<Self>) {
        let RedbEditor { store, ops } = *self;
        if let Err(err) = store.apply(ops) {
            warn!("preference commit failed: {:#}", err);
        }
    }
}

impl PreferenceStore for RedbPrefs {
    fn get(&self, key: &str) -> Option<String> {
        match self.read(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("preference read failed for {:?}: {:#}", key, err);
                None
            }
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn edit(&self) -> Box<dyn PreferenceEditor + '_> {
        Box::new(RedbEditor {
            store: self,
            ops: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_put_get_remove() {
        let temp_dir = tempdir().unwrap();
        let prefs = RedbPrefs::open(temp_dir.path().join("prefs.redb")).unwrap();

        let mut editor = prefs.edit();
        editor.put("k", "v");
        editor.commit();

        assert_eq!(prefs.get("k").as_deref(), Some("v"));
        assert!(prefs.contains("k"));

        let mut editor = prefs.edit();
        editor.remove("k");
        editor.commit();

        assert_eq!(prefs.get("k"), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("prefs.redb");

        {
            let prefs = RedbPrefs::open(&path).unwrap();
            let mut editor = prefs.edit();
            editor.put("k", "v");
            editor.commit();
        }

        let prefs = RedbPrefs::open(&path).unwrap();
        assert_eq!(prefs.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_commit_batch_is_applied_whole() {
        let temp_dir = tempdir().unwrap();
        let prefs = RedbPrefs::open(temp_dir.path().join("prefs.redb")).unwrap();

        let mut editor = prefs.edit();
        editor.put("a", "1");
        editor.put("b", "2");
        editor.remove("a");
        editor.commit();

        assert_eq!(prefs.get("a"), None);
        assert_eq!(prefs.get("b").as_deref(), Some("2"));
    }
}
