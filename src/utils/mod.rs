mod logging;
mod theme;

pub use logging::init_logging;
pub use theme::Theme;
