//! The preference-store seam between the profile layer and its backends.
//!
//! [`PreferenceStore`] restates the platform key-value preference service:
//! total reads (`get`/`contains`) plus a scoped writer obtained from
//! `edit()`. Backends keep their own I/O failures behind this boundary:
//! a failed read reports absence and a failed commit is logged and dropped,
//! so callers above the seam never observe storage errors.

/// A buffered preference mutation.
pub(crate) enum EditOp {
    Put(String, String),
    Remove(String),
}

/// Scoped writer over a [`PreferenceStore`].
///
/// Mutations are buffered until [`commit`](PreferenceEditor::commit) applies
/// them as one batch; dropping an editor without committing discards them.
pub trait PreferenceEditor {
    /// Buffer an upsert of `key` to `value`.
    fn put(&mut self, key: &str, value: &str);

    /// Buffer a removal of `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);

    /// Apply every buffered mutation to the store in one batch.
    ///
    /// Fire-and-forget: nothing is returned and no error is surfaced, even
    /// on underlying I/O failure. After this returns, reads through the
    /// same store handle observe the mutations.
    fn commit(self: Box<Self>);
}

/// A persistent map from string keys to string values, scoped to the
/// application.
pub trait PreferenceStore: Send + Sync {
    /// The value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Whether `key` is currently present.
    fn contains(&self, key: &str) -> bool;

    /// Open a scoped writer.
    fn edit(&self) -> Box<dyn PreferenceEditor + '_>;
}
