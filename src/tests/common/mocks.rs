use std::cell::Cell;
use std::collections::HashMap;

use crate::controller::{ ColorScheme, PreferenceStore, ThemeView };
use crate::error::ThemeError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    pub writes: usize,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.fail_writes {
            return Err(ThemeError::Storage("quota exceeded".to_string()));
        }
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub present: bool,
    pub dark_class: bool,
    pub icon: Option<String>,
    pub class_writes: usize,
    pub icon_writes: usize,
    pub fail_class: bool,
    pub claimed: bool,
}

impl RecordingView {
    pub fn with_control() -> Self {
        Self { present: true, ..Self::default() }
    }

    pub fn without_control() -> Self {
        Self::default()
    }
}

impl ThemeView for RecordingView {
    fn control_present(&self) -> bool {
        self.present
    }

    fn apply_class(&mut self, dark: bool) -> Result<(), ThemeError> {
        if self.fail_class {
            return Err(ThemeError::Dom("document has no body".to_string()));
        }
        self.class_writes += 1;
        self.dark_class = dark;
        Ok(())
    }

    fn apply_icon(&mut self, icon: &str) -> Result<(), ThemeError> {
        if !self.present {
            return Err(ThemeError::ControlMissing("theme-toggle".to_string()));
        }
        self.icon_writes += 1;
        self.icon = Some(icon.to_string());
        Ok(())
    }

    fn claim_control(&mut self) -> Result<bool, ThemeError> {
        if !self.present {
            return Err(ThemeError::ControlMissing("theme-toggle".to_string()));
        }
        Ok(!std::mem::replace(&mut self.claimed, true))
    }
}

#[derive(Debug)]
pub struct FixedScheme {
    dark: bool,
    pub queries: Cell<usize>,
}

impl FixedScheme {
    pub fn new(dark: bool) -> Self {
        Self { dark, queries: Cell::new(0) }
    }
}

impl ColorScheme for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.dark
    }
}
