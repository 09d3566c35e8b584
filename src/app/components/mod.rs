//! Shared UI components for the portfolio page.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod layout;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod star_background;
pub mod theme_toggle;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use layout::Layout;
pub use navbar::Navbar;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
pub use star_background::StarBackground;
pub use theme_toggle::ThemeToggle;
