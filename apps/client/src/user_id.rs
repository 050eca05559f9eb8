use tracing::{info, warn};
use uuid::Uuid;

use crate::local_store::LocalStore;

/// Local store key holding the per-profile user id.
pub const USER_ID_KEY: &str = "userId";

/// Returns the profile's user id, generating and persisting one on first use.
///
/// Storage failures never block the session: an unreadable id is replaced,
/// and an id that cannot be written is still used for this run.
pub fn get_or_create_user_id(store: &dyn LocalStore) -> String {
    match store.get(USER_ID_KEY) {
        Ok(Some(id)) if !id.trim().is_empty() => return id.trim().to_string(),
        Ok(_) => {}
        Err(e) => warn!("Could not read stored user id, generating a new one: {e}"),
    }

    let id = Uuid::new_v4().to_string();
    match store.set(USER_ID_KEY, &id) {
        Ok(()) => info!("Generated new user id {id}"),
        Err(e) => warn!("Could not persist user id {id}; it will not survive restart: {e}"),
    }
    id
}
