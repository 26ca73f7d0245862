//! Browser bindings for the theme controller.
//!
//! Static pages load the compiled module and call `start()` (or
//! `startWithConfig(json)`); the Dioxus preview calls [`activate`] directly once
//! the navbar is mounted.

mod storage;
mod view;

pub use storage::LocalStorage;
pub use view::{ DomView, MediaScheme };

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::configs::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::utils::init_logging;

pub type WebController = ThemeController<LocalStorage, DomView, MediaScheme>;

/// Applies the initial theme and wires the toggle's click handler.
///
/// Returns `Ok(false)` when the page has no toggle control.
pub fn activate(config: ThemeConfig) -> Result<bool, ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::Dom("no document".to_string()))?;

    let view = DomView::new(document.clone(), &config);
    let store = LocalStorage::from_window(&window);
    let toggle_id = config.toggle_id.clone();
    let mut controller: WebController = ThemeController::new(
        config,
        store,
        view,
        MediaScheme::new(window)
    );

    let Some(theme) = controller.activate()? else {
        return Ok(false);
    };
    // A remounted layout activates again; the same control keeps its one handler.
    if !controller.claim_toggle()? {
        return Ok(true);
    }

    let toggle = document
        .get_element_by_id(&toggle_id)
        .ok_or(ThemeError::ControlMissing(toggle_id))?;

    let controller = Rc::new(RefCell::new(controller));
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        if let Err(e) = controller.borrow_mut().toggle_theme() {
            log::error!("Theme toggle failed: {}", e);
        }
    });
    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Dom(format!("{:?}", e)))?;
    // Lives for the rest of the page.
    on_click.forget();

    log::info!("Theme toggle active, initial theme {}", theme);
    Ok(true)
}

#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    on_page_ready(ThemeConfig::default())?;
    Ok(())
}

#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(json)?;
    on_page_ready(config)?;
    Ok(())
}

fn on_page_ready(config: ThemeConfig) -> Result<(), ThemeError> {
    init_logging();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ThemeError::Dom("no document".to_string()))?;

    // The module may load after DOMContentLoaded has already fired.
    if document.ready_state() != "loading" {
        run(config);
        return Ok(());
    }

    let on_ready = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        run(config.clone());
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Dom(format!("{:?}", e)))?;
    on_ready.forget();
    Ok(())
}

fn run(config: ThemeConfig) {
    if let Err(e) = activate(config) {
        log::error!("Theme activation failed: {}", e);
    }
}
