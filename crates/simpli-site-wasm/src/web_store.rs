#![forbid(unsafe_code)]

//! [`PreferenceStore`] over `window.localStorage`.

use simpli_site::{PreferenceStore, SiteError};
use web_sys::Storage;

use crate::web_dom::js_message;

/// `localStorage`, or nothing when the browser denies access.
#[derive(Debug, Clone)]
pub struct WebStore {
    storage: Option<Storage>,
}

impl WebStore {
    #[must_use]
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl PreferenceStore for WebStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        let Some(storage) = &self.storage else {
            return Err(SiteError::Storage("localStorage unavailable".into()));
        };
        storage
            .set_item(key, value)
            .map_err(|err| SiteError::Storage(js_message(&err)))
    }
}
