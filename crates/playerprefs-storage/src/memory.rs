//! In-memory preference store.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::store::{EditOp, PreferenceEditor, PreferenceStore};

/// Preference store held entirely in memory.
///
/// The injectable stand-in for the persistent store: tests run the profile
/// contract against it, and it serves as a real backend for ephemeral
/// profiles that should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

struct MemoryEditor<'a> {
    store: &'a MemoryPrefs,
    ops: Vec<EditOp>,
}

impl PreferenceEditor for MemoryEditor<'_> {
    fn put(&mut self, key: &str, value: &str) {
        self.ops.push(EditOp::Put(key.to_string(), value.to_string()));
    }

    fn remove(&mut self, key: &str) {
        self.ops.push(EditOp::Remove(key.to_string()));
    }

    fn commit(self: Box<Self>) {
        let MemoryEditor { store, ops } = *self;
        let mut entries = store.entries.write();
        for op in ops {
            match op {
                EditOp::Put(key, value) => {
                    entries.insert(key, value);
                }
                EditOp::Remove(key) => {
                    entries.remove(&key);
                }
            }
        }
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    fn edit(&self) -> Box<dyn PreferenceEditor + '_> {
        Box::new(MemoryEditor {
            store: self,
            ops: Vec::new(),
        })
    }
}
