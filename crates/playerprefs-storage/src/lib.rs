//! PlayerPrefs Storage - player profile persistence over a key-value
//! preference store.
//!
//! The profile layer ([`ProfileStore`]) is parameterized by an injected
//! [`PreferenceStore`] handle, so the same save/load/clear/signed-in
//! contract runs against the redb-backed store ([`RedbPrefs`]) in
//! production and the in-memory store ([`MemoryPrefs`]) in tests.
//!
//! # Persisted layout
//!
//! Three string-valued keys under the `playerPreferences` namespace:
//!
//! - `playerPreferences.phone` - raw phone number
//! - `playerPreferences.pass` - password credential, stored verbatim
//! - `playerPreferences.avatar` - avatar wire name (e.g. `FOX`)
//!
//! A profile is written wholesale on save, replaced wholesale by the next
//! save, and removed wholesale on clear. There is no versioning and no
//! migration.

pub mod memory;
pub mod paths;
pub mod profile;
pub mod redb;
pub mod store;

pub use memory::MemoryPrefs;
pub use profile::ProfileStore;
pub use self::redb::RedbPrefs;
pub use store::{PreferenceEditor, PreferenceStore};
