use crate::error::StorageError;

/// Key-value capability over the per-origin persistent store. Injected
/// into the controller so tests can substitute an in-memory fake.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(target_arch = "wasm32")]
pub use wasm::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::PreferenceStore;
    use crate::error::StorageError;

    /// Store backed by `window.localStorage`. When the browser exposes
    /// no storage (privacy settings, non-browser host) reads come back
    /// empty and writes report `Unavailable`; the caller decides what
    /// to do with that.
    pub struct LocalStorageStore {
        storage: Option<web_sys::Storage>,
    }

    impl LocalStorageStore {
        pub fn attach() -> Self {
            let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
            Self { storage }
        }
    }

    impl PreferenceStore for LocalStorageStore {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.as_ref()?.get_item(key).ok().flatten()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|err| {
                StorageError::Write(
                    err.as_string()
                        .unwrap_or_else(|| "localStorage.setItem rejected".to_string()),
                )
            })
        }
    }
}
