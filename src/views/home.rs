use dioxus::prelude::*;

const AUTHOR: &str = "Hasith Senevirathne";

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            class: "post",
            article {
                h1 { class: "post-title", "Evening" }
                p {
                    class: "post-content",
                    "The lamps come on one window at a time,"
                    br {}
                    "and the street forgets the colour of the day."
                }
            }
        }
        footer {
            class: "site-footer",
            "Copyright © 2023 {AUTHOR}."
        }
    }
}
