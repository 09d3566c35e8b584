//! Page footer.

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { "© Nehemiah Kemayah. Built with Rust and Dioxus." }
            a { href: "#hero", class: "back-to-top", aria_label: "Back to top", "↑" }
        }
    }
}
