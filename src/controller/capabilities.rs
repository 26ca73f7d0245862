use crate::error::ThemeError;

/// Key-value storage holding the persisted preference.
pub trait PreferenceStore {
    /// Unreadable storage reads as absent.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The page the theme is shown on.
pub trait ThemeView {
    fn control_present(&self) -> bool;
    /// Adds the dark marker to the page root when `dark`, removes it otherwise.
    fn apply_class(&mut self, dark: bool) -> Result<(), ThemeError>;
    fn apply_icon(&mut self, icon: &str) -> Result<(), ThemeError>;
    /// Returns `false` if the control was already claimed.
    fn claim_control(&mut self) -> Result<bool, ThemeError>;
}

/// The environment's ambient color-scheme preference.
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;
}
