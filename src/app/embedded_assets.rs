//! Embedded static assets for single-binary distribution.
//!
//! The stylesheet and all SVG artwork are compiled into the binary using
//! include_str!. Images are exposed as base64 data URLs so the served page
//! has no external file dependencies.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::LazyLock;

// ============================================================================
// CSS Assets (embedded as strings)
// ============================================================================

/// Site stylesheet (theme variables, section styling, particle animations)
pub const STYLES_CSS: &str = include_str!("../../public/styles.css");

// ============================================================================
// Image Assets (embedded as base64 data URLs)
// ============================================================================

/// Favicon source
const FAVICON_SVG: &str = include_str!("../../public/favicon.svg");

/// Favicon as data URL (lazily encoded)
pub static FAVICON_DATA_URL: LazyLock<String> = LazyLock::new(|| {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(FAVICON_SVG))
});

/// Technology logo SVGs, keyed the way the icon palette references them
const LOGO_SVGS: &[(&str, &str)] = &[
    ("html5", include_str!("../../public/logos/html5.svg")),
    ("css", include_str!("../../public/logos/css.svg")),
    ("javascript", include_str!("../../public/logos/javascript.svg")),
    ("python", include_str!("../../public/logos/python.svg")),
    ("django", include_str!("../../public/logos/django.svg")),
    ("nodedotjs", include_str!("../../public/logos/nodedotjs.svg")),
    ("react", include_str!("../../public/logos/react.svg")),
    ("typescript", include_str!("../../public/logos/typescript.svg")),
    ("git", include_str!("../../public/logos/git.svg")),
    ("github", include_str!("../../public/logos/github.svg")),
    ("database", include_str!("../../public/logos/database.svg")),
    ("api", include_str!("../../public/logos/api.svg")),
];

/// Data URL for a palette logo; None for an unknown key
pub fn logo_data_url(key: &str) -> Option<String> {
    let svg = LOGO_SVGS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)?;
    Some(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::particles::ICON_ASSETS;

    #[test]
    fn every_palette_logo_resolves_to_a_data_url() {
        for asset in ICON_ASSETS {
            let url = logo_data_url(asset.logo)
                .unwrap_or_else(|| panic!("missing embedded logo for {}", asset.logo));
            assert!(url.starts_with("data:image/svg+xml;base64,"));
        }
    }

    #[test]
    fn unknown_logo_key_is_none() {
        assert!(logo_data_url("fortran").is_none());
    }
}
