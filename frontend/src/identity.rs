//! Stand-in identity profile kept in local storage.
//!
//! Sign-in belongs to an external identity provider. Until one is wired in, the
//! browser keeps a generated user id and the role claim chosen on `/admin`,
//! stored together as one JSON profile. The last uploaded application id is
//! stored under its own key so the tracking and notification pages can find
//! it.

use common::routing::Role;
use common::session::Session;
use gloo_console::{error, log};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use web_sys::Storage;

const PROFILE_KEY: &str = "scloro.profile";
const APPLICATION_ID_KEY: &str = "applicationId";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Profile {
    user_id: String,
    #[serde(default)]
    role: Option<String>,
}

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_profile(storage: &Storage) -> Option<Profile> {
    let raw = storage.get_item(PROFILE_KEY).ok().flatten()?;
    match serde_json::from_str::<Profile>(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            error!(format!("Discarding unreadable profile: {}", e));
            None
        }
    }
}

fn write_profile(storage: &Storage, profile: &Profile) {
    match serde_json::to_string(profile) {
        Ok(raw) => {
            if storage.set_item(PROFILE_KEY, &raw).is_err() {
                error!("Could not persist profile");
            }
        }
        Err(e) => error!(format!("Could not encode profile: {}", e)),
    }
}

/// Loads the profile, creating one with a fresh user id on first visit.
pub fn load_session() -> Session {
    let Some(storage) = storage() else {
        return Session::default();
    };
    let profile = read_profile(&storage).unwrap_or_else(|| {
        let profile = Profile {
            user_id: Uuid::new_v4().to_string(),
            role: None,
        };
        log!(format!("New profile {}", profile.user_id));
        write_profile(&storage, &profile);
        profile
    });
    Session::from_profile(Some(profile.user_id), profile.role.as_deref())
}

/// Writes the role claim, or removes it for `None`. Writing the same claim
/// again changes nothing.
pub fn store_role(session: &Session, role: Option<Role>) {
    let Some(storage) = storage() else {
        return;
    };
    let mut profile = read_profile(&storage).unwrap_or_default();
    if let Some(user_id) = session.user_id() {
        profile.user_id = user_id.to_string();
    }
    profile.role = role.map(|role| role.claim().to_string());
    write_profile(&storage, &profile);
}

pub fn stored_application_id() -> Option<String> {
    storage()?
        .get_item(APPLICATION_ID_KEY)
        .ok()
        .flatten()
        .filter(|id| !id.trim().is_empty())
}

pub fn store_application_id(id: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(APPLICATION_ID_KEY, id).is_err() {
            error!("Could not persist application id");
        }
    }
}
