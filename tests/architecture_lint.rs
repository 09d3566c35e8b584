//! Architecture enforcement lints - keep browser-boundary access behind the
//! theme module's accessors.
//!
//! The preference store and the OS color-scheme signal are the two ambient
//! inputs the theme subsystem owns. Components must consume them through
//! `PreferenceStore` / the theme context, never by reaching for the raw
//! browser APIs, so resolution precedence and change notification stay in
//! one place.
//!
//! These are source-scanning lints: a first line of defense, not a
//! replacement for the unit tests.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Browser APIs that only the theme module may touch directly
const THEME_ONLY_PATTERNS: &[(&str, &str)] = &[
    (
        ".local_storage()",
        "Go through PreferenceStore so storage failures degrade to in-memory state",
    ),
    (
        ".match_media(",
        "Go through the theme context so the OS signal honors explicit preferences",
    ),
];

/// The single file allowed to touch those APIs
const THEME_MODULE: &str = "src/app/theme.rs";

/// Strip the test module tail; lints apply to production code only
fn production_source(path: &Path) -> String {
    let src = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    match src.find("#[cfg(test)]") {
        Some(idx) => src[..idx].to_string(),
        None => src,
    }
}

fn app_sources() -> Vec<std::path::PathBuf> {
    WalkDir::new("src")
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Raw localStorage / matchMedia access is confined to the theme module.
#[test]
fn lint_browser_signals_confined_to_theme_module() {
    for path in app_sources() {
        if path.ends_with(THEME_MODULE) || path == Path::new(THEME_MODULE) {
            continue;
        }
        let src = production_source(&path);
        for (pattern, advice) in THEME_ONLY_PATTERNS {
            assert!(
                !src.contains(pattern),
                "{} uses `{}` directly.\n{}",
                path.display(),
                pattern,
                advice
            );
        }
    }
}

/// The persisted preference key is defined exactly once, in the theme module.
#[test]
fn lint_storage_key_defined_once() {
    let mut definitions = 0;
    for path in app_sources() {
        let src = production_source(&path);
        definitions += src.matches("THEME_STORAGE_KEY: &str").count();
    }
    assert_eq!(
        definitions, 1,
        "The theme storage key must have a single definition; \
         components import it from the theme module"
    );
}

/// Browser-boundary code degrades instead of panicking: no `.unwrap()` in
/// production app code.
#[test]
fn lint_no_unwrap_in_app_code() {
    for path in app_sources() {
        if !path.starts_with("src/app") {
            continue;
        }
        let src = production_source(&path);
        assert!(
            !src.contains(".unwrap()"),
            "{} calls .unwrap() in production code.\n\
             Storage, media-query, and DOM failures must degrade to safe defaults",
            path.display()
        );
    }
}

/// Particle generation stays pure: no direct RNG construction inside the
/// generators, which take `&mut impl Rng` so tests can inject a seeded one.
#[test]
fn lint_particle_generators_take_injected_rng() {
    let src = production_source(Path::new("src/app/particles.rs"));
    assert!(
        !src.contains("thread_rng"),
        "particles.rs must not construct its own RNG; callers inject one"
    );
    for generator in ["generate_stars", "generate_meteors", "generate_icons"] {
        assert!(
            src.contains(&format!("pub fn {}", generator)),
            "missing generator {}",
            generator
        );
    }
}
