//! About section.

use dioxus::prelude::*;

const HIGHLIGHTS: &[(&str, &str)] = &[
    (
        "Web Development",
        "Responsive, accessible sites and applications built end to end.",
    ),
    (
        "Data Analysis",
        "Dashboards and reporting that turn raw data into decisions.",
    ),
    (
        "Design & Writing",
        "Visual identity work and clear technical documentation.",
    ),
];

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "section about-section",
            h2 { class: "section-title",
                "About "
                span { class: "gradient-text", "Me" }
            }
            div { class: "about-grid",
                div { class: "about-text",
                    p {
                        "I build efficient digital solutions and provide strategic support \
                         that helps individuals and organizations grow. My work spans the \
                         full path from first sketch to shipped product."
                    }
                    p {
                        "With a passion for impact-driven innovation, I care about the \
                         details: fast pages, clean data models, and interfaces people \
                         actually enjoy using."
                    }
                }
                div { class: "about-cards",
                    for (title, blurb) in HIGHLIGHTS {
                        div { class: "about-card",
                            h3 { "{title}" }
                            p { "{blurb}" }
                        }
                    }
                }
            }
        }
    }
}
