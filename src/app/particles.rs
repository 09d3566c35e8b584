//! Ambient background particle generation.
//!
//! Pure functions from (viewport, RNG) to particle values; rendering is a
//! stateless consumer. Each generation pass replaces the previous set
//! wholesale - there is no incremental patching, so two passes with the same
//! inputs are behaviorally equivalent even though the randomized fields
//! differ.

use rand::Rng;

/// One star per this many square pixels of viewport
const STAR_AREA_PER_PX: f64 = 10_000.0;

/// Meteor streaks are a fixed small count regardless of viewport
pub const METEOR_COUNT: usize = 4;

/// Icon particles rendered in light mode
pub const ICON_COUNT: usize = 12;

/// A twinkling point element (dark mode)
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    /// Diameter in px
    pub size: f64,
    /// Position as % of viewport
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    /// Twinkle period in seconds
    pub twinkle_secs: f64,
    /// Vertical float period in seconds
    pub float_secs: f64,
    /// Stagger delay in seconds
    pub delay_secs: f64,
}

impl Star {
    /// Inline style consumed by the renderer
    pub fn style(&self) -> String {
        format!(
            "width: {:.2}px; height: {:.2}px; left: {:.2}%; top: {:.2}%; opacity: {:.2}; \
             animation: pulse-subtle {:.2}s ease-in-out {:.2}s infinite, \
             float {:.2}s ease-in-out {:.2}s infinite; will-change: transform, opacity;",
            self.size,
            self.size,
            self.x,
            self.y,
            self.opacity,
            self.twinkle_secs,
            self.delay_secs,
            self.float_secs,
            self.delay_secs / 2.0,
        )
    }
}

/// A streak element looping across the upper viewport (dark mode)
#[derive(Clone, Debug, PartialEq)]
pub struct Meteor {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl Meteor {
    pub fn style(&self) -> String {
        format!(
            "width: {:.2}px; height: {:.2}px; left: {:.2}%; top: {:.2}%; \
             animation: meteor {:.2}s linear infinite; animation-delay: {:.2}s;",
            self.size * 50.0,
            self.size * 2.0,
            self.x,
            self.y,
            self.duration_secs,
            self.delay_secs,
        )
    }
}

/// A labeled technology glyph with a text fallback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconAsset {
    pub name: &'static str,
    /// Key into the embedded logo set
    pub logo: &'static str,
    /// Rendered when the primary asset fails to load
    pub fallback: &'static str,
}

/// Fixed palette the light-mode field draws from
pub const ICON_ASSETS: [IconAsset; 12] = [
    IconAsset { name: "HTML", logo: "html5", fallback: "🌐" },
    IconAsset { name: "CSS", logo: "css", fallback: "🎨" },
    IconAsset { name: "JavaScript", logo: "javascript", fallback: "⚡" },
    IconAsset { name: "Python", logo: "python", fallback: "🐍" },
    IconAsset { name: "Django", logo: "django", fallback: "🎸" },
    IconAsset { name: "Node.js", logo: "nodedotjs", fallback: "📗" },
    IconAsset { name: "React", logo: "react", fallback: "⚛️" },
    IconAsset { name: "TypeScript", logo: "typescript", fallback: "📘" },
    IconAsset { name: "Git", logo: "git", fallback: "📝" },
    IconAsset { name: "GitHub", logo: "github", fallback: "🐙" },
    IconAsset { name: "Database", logo: "database", fallback: "🗄️" },
    IconAsset { name: "API", logo: "api", fallback: "🔌" },
];

/// A drifting labeled icon element (light mode)
#[derive(Clone, Debug, PartialEq)]
pub struct IconParticle {
    pub asset: IconAsset,
    pub x: f64,
    pub y: f64,
    /// Box size in px
    pub size: f64,
    pub opacity: f64,
    pub drift_secs: f64,
    pub delay_secs: f64,
    /// Flipped when the primary asset fails; affects only this particle
    pub use_fallback: bool,
}

impl IconParticle {
    pub fn style(&self) -> String {
        let font_size = if self.use_fallback {
            format!("font-size: {:.2}px;", self.size * 0.6)
        } else {
            String::new()
        };
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; \
             animation-duration: {:.2}s; animation-delay: {:.2}s; {}",
            self.x, self.y, self.size, self.size, self.opacity, self.drift_secs, self.delay_secs,
            font_size,
        )
    }
}

/// Star count scales with viewport area
pub fn star_count(width: f64, height: f64) -> usize {
    ((width * height) / STAR_AREA_PER_PX).floor().max(0.0) as usize
}

/// Generate the dark-mode star field for a viewport
pub fn generate_stars(width: f64, height: f64, rng: &mut impl Rng) -> Vec<Star> {
    let count = star_count(width, height);
    let mut stars = Vec::with_capacity(count);

    for _ in 0..count {
        stars.push(Star {
            size: rng.gen::<f64>() * 2.5 + 1.5,
            x: rng.gen::<f64>() * 100.0,
            y: rng.gen::<f64>() * 100.0,
            opacity: rng.gen::<f64>() * 0.4 + 0.6,
            twinkle_secs: rng.gen::<f64>() * 2.0 + 2.0,
            float_secs: rng.gen::<f64>() * 8.0 + 6.0,
            delay_secs: rng.gen::<f64>() * 5.0,
        });
    }

    stars
}

/// Generate the fixed set of looping meteor streaks
pub fn generate_meteors(rng: &mut impl Rng) -> Vec<Meteor> {
    let mut meteors = Vec::with_capacity(METEOR_COUNT);

    for _ in 0..METEOR_COUNT {
        meteors.push(Meteor {
            size: rng.gen::<f64>() * 2.0 + 1.0,
            x: rng.gen::<f64>() * 100.0,
            y: rng.gen::<f64>() * 20.0,
            delay_secs: rng.gen::<f64>() * 15.0,
            duration_secs: rng.gen::<f64>() * 3.0 + 3.0,
        });
    }

    meteors
}

/// Generate the light-mode icon field. Icons are sampled from the palette
/// with replacement and kept away from the viewport edges.
pub fn generate_icons(rng: &mut impl Rng) -> Vec<IconParticle> {
    let mut icons = Vec::with_capacity(ICON_COUNT);

    for _ in 0..ICON_COUNT {
        let asset = ICON_ASSETS[rng.gen_range(0..ICON_ASSETS.len())];
        icons.push(IconParticle {
            asset,
            x: rng.gen::<f64>() * 90.0 + 5.0,
            y: rng.gen::<f64>() * 90.0 + 5.0,
            size: rng.gen::<f64>() * 25.0 + 35.0,
            opacity: rng.gen::<f64>() * 0.3 + 0.4,
            drift_secs: rng.gen::<f64>() * 15.0 + 25.0,
            delay_secs: rng.gen::<f64>() * 5.0,
            use_fallback: false,
        });
    }

    icons
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn star_count_scales_with_viewport_area() {
        assert_eq!(star_count(1200.0, 800.0), 96);
        assert_eq!(star_count(1920.0, 1080.0), 207);
        assert_eq!(star_count(0.0, 800.0), 0);
    }

    #[test]
    fn star_generation_matches_count_every_pass() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            assert_eq!(generate_stars(1200.0, 800.0, &mut rng).len(), 96);
        }
    }

    #[test]
    fn meteor_count_is_fixed() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_meteors(&mut rng).len(), METEOR_COUNT);
    }

    #[test]
    fn icon_count_is_fixed_and_palette_backed() {
        let mut rng = StdRng::seed_from_u64(7);
        let icons = generate_icons(&mut rng);
        assert_eq!(icons.len(), ICON_COUNT);
        for icon in &icons {
            assert!(ICON_ASSETS.contains(&icon.asset));
            assert!(!icon.use_fallback);
        }
    }

    #[test]
    fn generated_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for star in generate_stars(1200.0, 800.0, &mut rng) {
            assert!((1.5..4.0).contains(&star.size));
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((0.6..1.0).contains(&star.opacity));
            assert!((2.0..4.0).contains(&star.twinkle_secs));
            assert!((6.0..14.0).contains(&star.float_secs));
            assert!((0.0..5.0).contains(&star.delay_secs));
        }

        for meteor in generate_meteors(&mut rng) {
            assert!((1.0..3.0).contains(&meteor.size));
            assert!((0.0..20.0).contains(&meteor.y));
            assert!((3.0..6.0).contains(&meteor.duration_secs));
        }

        for icon in generate_icons(&mut rng) {
            assert!((5.0..95.0).contains(&icon.x));
            assert!((5.0..95.0).contains(&icon.y));
            assert!((35.0..60.0).contains(&icon.size));
            assert!((0.4..0.7).contains(&icon.opacity));
            assert!((25.0..40.0).contains(&icon.drift_secs));
        }
    }

    #[test]
    fn generation_is_deterministic_under_a_seeded_rng() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            generate_stars(800.0, 600.0, &mut a),
            generate_stars(800.0, 600.0, &mut b)
        );
        assert_eq!(generate_meteors(&mut a), generate_meteors(&mut b));
        assert_eq!(generate_icons(&mut a), generate_icons(&mut b));
    }

    #[test]
    fn regeneration_replaces_rather_than_extends() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = generate_icons(&mut rng);
        let second = generate_icons(&mut rng);
        assert_eq!(first.len(), second.len());
        // Randomized fields differ between passes
        assert_ne!(first, second);
    }

    #[test]
    fn star_style_carries_both_animations() {
        let mut rng = StdRng::seed_from_u64(1);
        let star = &generate_stars(200.0, 200.0, &mut rng)[0];
        let style = star.style();
        assert!(style.contains("pulse-subtle"));
        assert!(style.contains("float"));
    }

    #[test]
    fn fallback_icon_style_sets_glyph_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut icon = generate_icons(&mut rng).remove(0);
        assert!(!icon.style().contains("font-size"));
        icon.use_fallback = true;
        assert!(icon.style().contains("font-size"));
    }
}
