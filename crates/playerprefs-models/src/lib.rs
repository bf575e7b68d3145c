//! PlayerPrefs Models - the player profile data model.
//!
//! This crate defines the [`User`] profile record, the fixed [`Avatar`]
//! set it selects from, and the [`UnknownAvatar`] condition raised when a
//! persisted avatar name no longer matches the current set. Persistence
//! lives in the playerprefs-storage crate; these types carry no storage
//! concerns of their own.

pub mod avatar;
pub mod user;

pub use avatar::{Avatar, UnknownAvatar};
pub use user::User;
