//! LocalStorage-backed token persistence.
//!
//! The token is stored as the bare string, not JSON-encoded, so a value
//! written by any other client of the same API is read back unchanged.

use crickboard_shared::STORAGE_TOKEN_KEY;
use gloo_storage::{LocalStorage, Storage};

use crate::session::TokenStore;

/// Browser [`TokenStore`] writing under [`STORAGE_TOKEN_KEY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(STORAGE_TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) -> bool {
        LocalStorage::raw().set_item(STORAGE_TOKEN_KEY, token).is_ok()
    }

    fn clear(&self) -> bool {
        LocalStorage::raw().remove_item(STORAGE_TOKEN_KEY).is_ok()
    }
}
