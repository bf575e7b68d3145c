//! The profile store: save, load, clear, and signed-in checks.

use anyhow::Result;
use playerprefs_models::{Avatar, User};

use crate::store::PreferenceStore;

/// Namespace under which every profile key lives.
pub const USER_PREFERENCES: &str = "playerPreferences";

const KEY_PHONE: &str = "playerPreferences.phone";
const KEY_PASS: &str = "playerPreferences.pass";
const KEY_AVATAR: &str = "playerPreferences.avatar";

/// Saves, loads, and clears the player profile in a preference store.
///
/// Holds nothing but the injected store handle, so the same contract runs
/// against any [`PreferenceStore`] backend. One profile per store: save
/// replaces it wholesale, clear removes it wholesale.
#[derive(Debug, Clone)]
pub struct ProfileStore<S> {
    prefs: S,
}

impl<S: PreferenceStore> ProfileStore<S> {
    pub fn new(prefs: S) -> Self {
        Self { prefs }
    }

    /// The underlying preference store.
    pub fn prefs(&self) -> &S {
        &self.prefs
    }

    /// Write `user` to the store, replacing any saved profile.
    ///
    /// Absent fields remove their keys, so the next [`load`](Self::load)
    /// returns exactly the profile saved here. The commit is
    /// fire-and-forget: nothing is returned and I/O failures stay inside
    /// the store.
    pub fn save(&self, user: &User) {
        let mut editor = self.prefs.edit();
        match &user.phone {
            Some(phone) => editor.put(KEY_PHONE, phone),
            None => editor.remove(KEY_PHONE),
        }
        match &user.pass {
            Some(pass) => editor.put(KEY_PASS, pass),
            None => editor.remove(KEY_PASS),
        }
        match user.avatar {
            Some(avatar) => editor.put(KEY_AVATAR, avatar.name()),
            None => editor.remove(KEY_AVATAR),
        }
        editor.commit();
    }

    /// Read the saved profile.
    ///
    /// Returns `Ok(None)` when none of the three keys is present; otherwise
    /// a [`User`] built from whatever subset was read. A stored avatar name
    /// outside the known set fails with
    /// [`UnknownAvatar`](playerprefs_models::UnknownAvatar) rather than
    /// substituting a default.
    pub fn load(&self) -> Result<Option<User>> {
        let phone = self.prefs.get(KEY_PHONE);
        let pass = self.prefs.get(KEY_PASS);
        let avatar = match self.prefs.get(KEY_AVATAR) {
            Some(name) => Some(name.parse::<Avatar>()?),
            None => None,
        };

        if phone.is_none() && pass.is_none() && avatar.is_none() {
            return Ok(None);
        }
        Ok(Some(User {
            phone,
            pass,
            avatar,
        }))
    }

    /// Remove the saved profile. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        let mut editor = self.prefs.edit();
        editor.remove(KEY_PHONE);
        editor.remove(KEY_PASS);
        editor.remove(KEY_AVATAR);
        editor.commit();
    }

    /// True iff the phone, password, and avatar keys are all present.
    ///
    /// Stricter than [`load`](Self::load): a partial profile loads as a
    /// non-empty [`User`] but does not count as signed in.
    pub fn is_signed_in(&self) -> bool {
        self.prefs.contains(KEY_PHONE)
            && self.prefs.contains(KEY_PASS)
            && self.prefs.contains(KEY_AVATAR)
    }
}
