mod capabilities;

pub use capabilities::{ ColorScheme, PreferenceStore, ThemeView };

use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use crate::utils::Theme;

/// Resolves, applies and toggles the site theme.
///
/// The controller holds no theme of its own: the current theme is always read
/// back from the store, so the icon, the page class and the stored value agree
/// after every successful call.
#[derive(Debug)]
pub struct ThemeController<S, V, C> {
    config: ThemeConfig,
    store: S,
    view: V,
    scheme: C,
}

impl<S, V, C> ThemeController<S, V, C>
    where S: PreferenceStore, V: ThemeView, C: ColorScheme
{
    pub fn new(config: ThemeConfig, store: S, view: V, scheme: C) -> Self {
        Self { config, store, view, scheme }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (S, V, C) {
        (self.store, self.view, self.scheme)
    }

    /// Theme to show on page load. The ambient scheme only counts when nothing is stored.
    pub fn resolve_initial_theme(&self) -> Theme {
        match self.store.get(&self.config.storage_key).as_deref() {
            Some("dark") => Theme::Dark,
            None if self.scheme.prefers_dark() => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn current_theme(&self) -> Theme {
        Theme::from_stored(self.store.get(&self.config.storage_key).as_deref())
    }

    /// Writes the preference, then the page class, then the icon.
    ///
    /// A failed step undoes the steps before it, so the three stay in agreement
    /// with the stored value even when an error is returned.
    pub fn apply_theme(&mut self, theme: Theme) -> Result<(), ThemeError> {
        // Nothing is touched unless the control is still on the page.
        if !self.view.control_present() {
            return Err(ThemeError::ControlMissing(self.config.toggle_id.clone()));
        }

        let previous = self.store.get(&self.config.storage_key);
        let previous_theme = Theme::from_stored(previous.as_deref());

        self.store.set(&self.config.storage_key, theme.as_str())?;

        if let Err(e) = self.view.apply_class(theme.is_dark()) {
            self.restore_preference(previous.as_deref(), previous_theme);
            return Err(e);
        }

        let icon = if theme.is_dark() { &self.config.dark_icon } else { &self.config.light_icon };
        if let Err(e) = self.view.apply_icon(icon) {
            if let Err(undo) = self.view.apply_class(previous_theme.is_dark()) {
                log::error!("Could not restore page class: {}", undo);
            }
            self.restore_preference(previous.as_deref(), previous_theme);
            return Err(e);
        }

        log::debug!("Applied {} theme", theme);
        Ok(())
    }

    // An absent value cannot be restored; the previous theme is written instead.
    fn restore_preference(&mut self, previous: Option<&str>, previous_theme: Theme) {
        let value = previous.unwrap_or(previous_theme.as_str());
        if let Err(e) = self.store.set(&self.config.storage_key, value) {
            log::error!("Could not restore theme preference: {}", e);
        }
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, ThemeError> {
        let next = self.current_theme().toggled();
        self.apply_theme(next)?;
        Ok(next)
    }

    /// Applies the initial theme if the toggle control exists.
    ///
    /// Returns `Ok(None)` without side effects when the control is absent, so
    /// pages without a toggle are left alone. The caller registers the click
    /// handler only on `Some`.
    pub fn activate(&mut self) -> Result<Option<Theme>, ThemeError> {
        if !self.view.control_present() {
            return Ok(None);
        }
        let theme = self.resolve_initial_theme();
        self.apply_theme(theme)?;
        Ok(Some(theme))
    }

    /// Marks the toggle control as wired. `false` means a click handler is
    /// already attached to this control and must not be added again.
    pub fn claim_toggle(&mut self) -> Result<bool, ThemeError> {
        self.view.claim_control()
    }
}
