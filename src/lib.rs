//! Starlit Portfolio
//!
//! A personal portfolio single-page site built with Dioxus fullstack.
//!
//! This library provides:
//! - Light/dark theming with persisted preference and cross-tab sync
//! - Ambient animated backgrounds (star field in dark mode, drifting
//!   technology icons in light mode)
//! - Portfolio sections (hero, about, skills, projects, contact)
//! - A server-side relay for the contact form's transactional email

pub mod app;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
