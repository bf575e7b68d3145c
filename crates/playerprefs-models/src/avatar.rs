//! The selectable player avatar set.
//!
//! An avatar persists as its wire name (`Avatar::Fox` is stored as `"FOX"`).
//! Resolution is exact and case-sensitive: a stored name outside the current
//! set is an error, never silently replaced with a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored avatar name that matches no known avatar.
///
/// Raised when a persisted profile was written by a build with a different
/// avatar set than this one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown avatar name: {0:?}")]
pub struct UnknownAvatar(pub String);

/// Fixed set of selectable player icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Avatar {
    Fox,
    Owl,
    Panda,
    Koala,
    Tiger,
    Penguin,
    Whale,
    Robot,
    Ninja,
    Astronaut,
}

impl Avatar {
    /// Every avatar, in picker order.
    pub const ALL: [Avatar; 10] = [
        Avatar::Fox,
        Avatar::Owl,
        Avatar::Panda,
        Avatar::Koala,
        Avatar::Tiger,
        Avatar::Penguin,
        Avatar::Whale,
        Avatar::Robot,
        Avatar::Ninja,
        Avatar::Astronaut,
    ];

    /// The symbolic name this avatar persists as.
    pub fn name(self) -> &'static str {
        match self {
            Avatar::Fox => "FOX",
            Avatar::Owl => "OWL",
            Avatar::Panda => "PANDA",
            Avatar::Koala => "KOALA",
            Avatar::Tiger => "TIGER",
            Avatar::Penguin => "PENGUIN",
            Avatar::Whale => "WHALE",
            Avatar::Robot => "ROBOT",
            Avatar::Ninja => "NINJA",
            Avatar::Astronaut => "ASTRONAUT",
        }
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Avatar {
    type Err = UnknownAvatar;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Avatar::ALL
            .into_iter()
            .find(|avatar| avatar.name() == value)
            .ok_or_else(|| UnknownAvatar(value.to_string()))
    }
}
