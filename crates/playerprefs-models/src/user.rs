//! The player profile record.

use serde::{Deserialize, Serialize};

use crate::avatar::Avatar;

/// A player profile as persisted by the profile store.
///
/// Every field is optional: loading returns whatever subset of the profile
/// was present in the store, and absent fields stay absent across a
/// save/load round trip. A profile with all three fields absent is never
/// returned; the store reports "no saved profile" instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Raw phone number, no formatting applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Password credential, stored verbatim. Callers that hash do so
    /// before constructing the profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,

    /// Selected avatar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
}

impl User {
    /// Build a complete profile with all three fields set.
    pub fn new(phone: impl Into<String>, pass: impl Into<String>, avatar: Avatar) -> Self {
        Self {
            phone: Some(phone.into()),
            pass: Some(pass.into()),
            avatar: Some(avatar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_profile_omits_absent_fields() {
        let user = User {
            phone: Some("15551234567".to_string()),
            pass: None,
            avatar: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, serde_json::json!({ "phone": "15551234567" }));
    }

    #[test]
    fn test_serde_round_trip() {
        let user = User::new("15551234567", "hunter2", Avatar::Fox);

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back, user);
    }
}
