//! Skills section with a category filter.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
struct Skill {
    name: &'static str,
    /// Proficiency, 0-100
    level: u8,
    category: &'static str,
}

const SKILLS: &[Skill] = &[
    // Frontend
    Skill { name: "HTML/CSS", level: 95, category: "frontend" },
    Skill { name: "JavaScript", level: 90, category: "frontend" },
    Skill { name: "React", level: 90, category: "frontend" },
    Skill { name: "Tailwind CSS", level: 90, category: "frontend" },
    Skill { name: "Bootstrap", level: 85, category: "frontend" },
    // Backend
    Skill { name: "Django", level: 90, category: "backend" },
    Skill { name: "Node.js", level: 80, category: "backend" },
    Skill { name: "Express", level: 75, category: "backend" },
    Skill { name: "MongoDB", level: 60, category: "backend" },
    // Data Analysis
    Skill { name: "Excel", level: 95, category: "data" },
    Skill { name: "Power BI", level: 90, category: "data" },
    Skill { name: "Tableau", level: 80, category: "data" },
    Skill { name: "Python", level: 75, category: "data" },
    // Tools
    Skill { name: "VS Code", level: 95, category: "tools" },
    Skill { name: "Git/GitHub", level: 90, category: "tools" },
    Skill { name: "Figma", level: 85, category: "tools" },
    Skill { name: "Docker", level: 60, category: "tools" },
];

const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All"),
    ("frontend", "Frontend"),
    ("backend", "Backend"),
    ("data", "Data Analysis"),
    ("tools", "Tools"),
];

#[component]
pub fn SkillsSection() -> Element {
    let mut active_category = use_signal(|| "all");

    let filtered: Vec<Skill> = SKILLS
        .iter()
        .copied()
        .filter(|s| active_category() == "all" || s.category == active_category())
        .collect();

    rsx! {
        section { id: "skills", class: "section skills-section",
            h2 { class: "section-title",
                "My "
                span { class: "gradient-text", "Skills" }
            }
            div { class: "skill-filters",
                for (key, label) in CATEGORIES {
                    button {
                        class: if active_category() == *key { "filter-button active" } else { "filter-button" },
                        onclick: move |_| active_category.set(*key),
                        "{label}"
                    }
                }
            }
            div { class: "skills-grid",
                for skill in filtered {
                    div { class: "skill-card",
                        div { class: "skill-header",
                            span { class: "skill-name", "{skill.name}" }
                            span { class: "skill-level", "{skill.level}%" }
                        }
                        div { class: "skill-bar",
                            div { class: "skill-bar-fill", style: "width: {skill.level}%;" }
                        }
                    }
                }
            }
        }
    }
}
