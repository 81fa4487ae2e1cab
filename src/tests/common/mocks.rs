use std::collections::HashMap;

use crate::error::StorageError;
use crate::theme::{PreferenceStore, ThemeSurface, THEME_STORAGE_KEY};

/// In-memory stand-in for the per-origin key-value store.
pub struct MockPreferenceStore {
    entries: HashMap<String, String>,
    pub fail_writes: bool,
    pub writes: usize,
}

impl MockPreferenceStore {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            fail_writes: false,
            writes: 0,
        }
    }

    pub fn with_theme(value: &str) -> Self {
        let mut store = Self::empty();
        store
            .entries
            .insert(THEME_STORAGE_KEY.to_string(), value.to_string());
        store
    }

    pub fn theme(&self) -> Option<&str> {
        self.entries.get(THEME_STORAGE_KEY).map(String::as_str)
    }
}

impl PreferenceStore for MockPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        if self.fail_writes {
            return Err(StorageError::Write("rejected by test".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Fake document surface: one optional control, one root flag, one
/// label string.
pub struct MockThemeSurface {
    pub has_control: bool,
    pub flag: bool,
    pub label: String,
}

impl MockThemeSurface {
    pub fn with_control() -> Self {
        Self {
            has_control: true,
            flag: false,
            label: String::new(),
        }
    }

    pub fn without_control() -> Self {
        Self {
            has_control: false,
            flag: false,
            label: String::new(),
        }
    }
}

impl ThemeSurface for MockThemeSurface {
    fn control_present(&self) -> bool {
        self.has_control
    }

    fn flag_present(&self) -> bool {
        self.flag
    }

    fn set_flag(&mut self, present: bool) {
        self.flag = present;
    }

    fn toggle_flag(&mut self) -> bool {
        self.flag = !self.flag;
        self.flag
    }

    fn set_label(&mut self, text: &str) {
        self.label = text.to_string();
    }
}
