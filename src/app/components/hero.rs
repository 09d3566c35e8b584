//! Landing section.

use dioxus::prelude::*;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "hero", class: "hero-section",
            div { class: "hero-content",
                h1 { class: "hero-title",
                    span { class: "fade-in", "Hi, I'm" }
                    span { class: "fade-in-delay-1 gradient-text", " Nehemiah" }
                    span { class: "fade-in-delay-2 gradient-text", " Kemayah" }
                }
                p { class: "hero-lead fade-in-delay-3",
                    "I'm a versatile Software Engineer with strong expertise in Web Development, \
                     Data Analysis, Graphic Design, IT Consulting, and Academic/Technical Writing. \
                     I thrive on solving real-world problems through clean code, smart data, \
                     compelling visuals, and clear communication."
                }
                div { class: "hero-cta fade-in-delay-4",
                    a { class: "cosmic-button", href: "#projects", "View My Work" }
                }
            }
            div { class: "scroll-indicator",
                span { "Scroll" }
                div { class: "scroll-arrow", "↓" }
            }
        }
    }
}
