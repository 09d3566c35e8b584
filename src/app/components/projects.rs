//! Featured projects section.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    demo_url: &'static str,
    github_url: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Web Music Player",
        description: "A responsive website with a list of free songs.",
        tags: &["HTML", "CSS", "Bootstrap", "JavaScript"],
        demo_url: "https://ingenious21.github.io/music_app/",
        github_url: "#",
    },
    Project {
        title: "Analytic Dashboard",
        description: "Will be up as soon as completed. Thank you for your understanding!",
        tags: &["N/A"],
        demo_url: "#",
        github_url: "#",
    },
    Project {
        title: "Guessing Game",
        description: "Simple yet engaging number guessing game featuring real-time feedback \
                      and intuitive user interaction.",
        tags: &["HTML", "CSS", "JavaScript"],
        demo_url: "https://ingenious21.github.io/guessing-game/",
        github_url: "#",
    },
];

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { id: "projects", class: "section projects-section",
            h2 { class: "section-title",
                "Featured "
                span { class: "gradient-text", "Projects" }
            }
            p { class: "section-lead",
                "Here are some of my recent projects. Each project was carefully crafted \
                 with attention to detail, performance, and user experience."
            }
            div { class: "projects-grid",
                for project in PROJECTS {
                    div { class: "project-card",
                        div { class: "project-banner" }
                        div { class: "project-body",
                            div { class: "project-tags",
                                for tag in project.tags {
                                    span { class: "project-tag", "{tag}" }
                                }
                            }
                            h3 { "{project.title}" }
                            p { "{project.description}" }
                            div { class: "project-links",
                                a {
                                    href: "{project.demo_url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Live Demo"
                                }
                                a {
                                    href: "{project.github_url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Source"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
