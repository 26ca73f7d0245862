use dioxus::prelude::*;
use poetry_theme::{ init_logging, Route };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
