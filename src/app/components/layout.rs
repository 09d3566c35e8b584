//! Page shell: document head elements wrapping the page content.

use dioxus::prelude::*;

use crate::app::embedded_assets;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page content
    pub children: Element,
}

/// Layout component injecting the title, embedded stylesheet, and favicon.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let favicon = embedded_assets::FAVICON_DATA_URL.as_str();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "Nehemiah Kemayah - Software Engineer" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1",
        }
        document::Meta {
            name: "description",
            content: "Portfolio of Nehemiah Kemayah: web development, data analysis, and design.",
        }
        document::Link {
            rel: "icon",
            r#type: "image/svg+xml",
            href: "{favicon}",
        }
        // Stylesheet ships inside the binary; no external asset pipeline
        document::Style { {embedded_assets::STYLES_CSS} }

        {props.children}
    }
}
