//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod embedded_assets;
pub mod particles;
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod timers;

use components::{
    AboutSection, ContactSection, Footer, HeroSection, Layout, Navbar, ProjectsSection,
    SkillsSection, StarBackground, ThemeToggle,
};
use theme::use_theme_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Initialize theme context at app root (handles localStorage + DOM class
    // + cross-tab sync)
    use_theme_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes (the portfolio is a single page)
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// The portfolio page: ambient background behind the section stack
#[component]
fn Home() -> Element {
    rsx! {
        Layout {
            StarBackground {}
            ThemeToggle {}
            Navbar {}
            main {
                HeroSection {}
                AboutSection {}
                SkillsSection {}
                ProjectsSection {}
                ContactSection {}
            }
            Footer {}
        }
    }
}
