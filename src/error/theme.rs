use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    ControlMissing(String),
    Storage(String),
    Dom(String),
    Config(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::ControlMissing(id) => write!(f, "Toggle control '#{}' not found", id),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            ThemeError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Config(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ThemeError> for wasm_bindgen::JsValue {
    fn from(err: ThemeError) -> wasm_bindgen::JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}
