pub mod mocks;

use crate::configs::ThemeConfig;
use crate::controller::ThemeController;
use mocks::{ FixedScheme, MemoryStore, RecordingView };

pub type TestController = ThemeController<MemoryStore, RecordingView, FixedScheme>;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

pub fn controller(store: MemoryStore, view: RecordingView, prefers_dark: bool) -> TestController {
    setup();
    ThemeController::new(ThemeConfig::default(), store, view, FixedScheme::new(prefers_dark))
}

/// Everything a visitor could observe: page class, toggle text, stored value.
pub fn observed(controller: &TestController) -> (bool, Option<String>, Option<String>) {
    let view = controller.view();
    (
        view.dark_class,
        view.icon.clone(),
        controller.store().value(&controller.config().storage_key).map(str::to_string),
    )
}
