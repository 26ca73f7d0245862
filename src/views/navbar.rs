use dioxus::prelude::*;
use crate::routes::Route;
use crate::configs::theme_config::TOGGLE_ID;

pub const SITE_NAME: &str = "Verse";

#[component]
pub fn Navbar() -> Element {
    // The button is mounted by now; the controller owns its text from here on.
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            match crate::web::activate(crate::configs::ThemeConfig::default()) {
                Ok(true) => {}
                Ok(false) => log::debug!("No theme toggle on this page"),
                Err(e) => log::error!("Theme activation failed: {}", e),
            }
        }
    });

    rsx! {
        header {
            class: "site-header",
            nav {
                Link { class: "site-title", to: Route::Home {}, "{SITE_NAME}" }
                button {
                    id: TOGGLE_ID,
                    class: "theme-toggle",
                    r#type: "button",
                    title: "Toggle theme",
                }
            }
        }
        Outlet::<Route> {}
    }
}
