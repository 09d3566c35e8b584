//! Particle set generation properties.
//!
//! Counts, value ranges, and wholesale-replacement semantics for the
//! ambient background generators, driven by a seeded RNG.

use rand::rngs::StdRng;
use rand::SeedableRng;

use starlit_portfolio::app::particles::{
    generate_icons, generate_meteors, generate_stars, star_count, ICON_ASSETS, ICON_COUNT,
    METEOR_COUNT,
};

#[test]
fn reference_viewport_counts() {
    // 1200x800 -> floor(960000 / 10000) = 96 stars, 4 meteors
    let mut rng = StdRng::seed_from_u64(2024);

    assert_eq!(star_count(1200.0, 800.0), 96);
    assert_eq!(generate_stars(1200.0, 800.0, &mut rng).len(), 96);
    assert_eq!(generate_meteors(&mut rng).len(), METEOR_COUNT);
    assert_eq!(METEOR_COUNT, 4);
}

#[test]
fn counts_are_stable_across_repeated_regeneration() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        assert_eq!(generate_stars(1440.0, 900.0, &mut rng).len(), 129);
        assert_eq!(generate_meteors(&mut rng).len(), 4);
        assert_eq!(generate_icons(&mut rng).len(), ICON_COUNT);
    }
}

#[test]
fn tiny_viewports_produce_empty_star_fields_without_panicking() {
    let mut rng = StdRng::seed_from_u64(5);
    assert!(generate_stars(50.0, 50.0, &mut rng).is_empty());
    assert!(generate_stars(0.0, 0.0, &mut rng).is_empty());
}

#[test]
fn regeneration_is_wholesale_not_incremental() {
    let mut rng = StdRng::seed_from_u64(17);
    let first = generate_stars(1200.0, 800.0, &mut rng);
    let second = generate_stars(1200.0, 800.0, &mut rng);

    // Behaviorally equivalent (same count), not byte-identical
    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}

#[test]
fn icons_always_come_from_the_palette() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..20 {
        for icon in generate_icons(&mut rng) {
            assert!(ICON_ASSETS.contains(&icon.asset));
            assert!(!icon.asset.fallback.is_empty());
        }
    }
}

#[test]
fn failed_asset_flags_only_the_affected_particle() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut icons = generate_icons(&mut rng);

    icons[3].use_fallback = true;

    for (index, icon) in icons.iter().enumerate() {
        assert_eq!(icon.use_fallback, index == 3);
    }
    assert_eq!(icons.len(), ICON_COUNT);
}

#[test]
fn meteor_geometry_derives_from_size() {
    let mut rng = StdRng::seed_from_u64(41);
    for meteor in generate_meteors(&mut rng) {
        let style = meteor.style();
        let width = meteor.size * 50.0;
        let height = meteor.size * 2.0;
        assert!(style.contains(&format!("width: {:.2}px", width)));
        assert!(style.contains(&format!("height: {:.2}px", height)));
        assert!(style.contains("linear infinite"));
    }
}
