use web_sys::{ Document, Window };

use crate::configs::ThemeConfig;
use crate::controller::{ ColorScheme, ThemeView };
use crate::error::ThemeError;

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
/// Set on a toggle once its click handler is attached.
const BOUND_ATTR: &str = "data-theme-bound";

pub struct DomView {
    document: Document,
    dark_class: String,
    toggle_id: String,
}

impl DomView {
    pub fn new(document: Document, config: &ThemeConfig) -> Self {
        Self {
            document,
            dark_class: config.dark_class.clone(),
            toggle_id: config.toggle_id.clone(),
        }
    }
}

impl ThemeView for DomView {
    fn control_present(&self) -> bool {
        self.document.get_element_by_id(&self.toggle_id).is_some()
    }

    fn apply_class(&mut self, dark: bool) -> Result<(), ThemeError> {
        let body = self.document
            .body()
            .ok_or_else(|| ThemeError::Dom("document has no body".to_string()))?;
        let classes = body.class_list();
        let result = if dark {
            classes.add_1(&self.dark_class)
        } else {
            classes.remove_1(&self.dark_class)
        };
        result.map_err(|e| ThemeError::Dom(format!("{:?}", e)))
    }

    fn apply_icon(&mut self, icon: &str) -> Result<(), ThemeError> {
        let toggle = self.document
            .get_element_by_id(&self.toggle_id)
            .ok_or_else(|| ThemeError::ControlMissing(self.toggle_id.clone()))?;
        toggle.set_text_content(Some(icon));
        Ok(())
    }

    fn claim_control(&mut self) -> Result<bool, ThemeError> {
        let toggle = self.document
            .get_element_by_id(&self.toggle_id)
            .ok_or_else(|| ThemeError::ControlMissing(self.toggle_id.clone()))?;
        if toggle.has_attribute(BOUND_ATTR) {
            return Ok(false);
        }
        toggle
            .set_attribute(BOUND_ATTR, "")
            .map_err(|e| ThemeError::Dom(format!("{:?}", e)))?;
        Ok(true)
    }
}

/// `prefers-color-scheme` as reported by the browser.
pub struct MediaScheme {
    window: Window,
}

impl MediaScheme {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorScheme for MediaScheme {
    fn prefers_dark(&self) -> bool {
        self.window
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map(|list| list.matches())
            .unwrap_or(false)
    }
}
