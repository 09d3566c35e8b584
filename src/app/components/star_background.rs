//! Ambient background renderer.
//!
//! Dark theme: a star field sized to the viewport plus a fixed set of
//! looping meteor streaks. Light theme: drifting technology icons. Particle
//! sets are regenerated wholesale on theme change and, debounced, on
//! viewport resize; a failed icon asset flips only that particle to its
//! fallback glyph.

use dioxus::prelude::*;

use crate::app::embedded_assets;
use crate::app::particles::{IconParticle, Meteor, Star};
use crate::app::theme::use_theme;

#[cfg(target_arch = "wasm32")]
use crate::app::particles;
#[cfg(target_arch = "wasm32")]
use crate::app::timers::TimeoutGuard;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Trailing debounce applied to resize regeneration
#[cfg(target_arch = "wasm32")]
const RESIZE_DEBOUNCE_MS: u32 = 200;

/// Fixed full-viewport layer behind all content.
#[component]
pub fn StarBackground() -> Element {
    let ctx = use_theme();
    let stars = use_signal(Vec::<Star>::new);
    let meteors = use_signal(Vec::<Meteor>::new);
    let icons = use_signal(Vec::<IconParticle>::new);

    // Regenerate the relevant sets whenever the resolved theme changes
    let theme_ctx = ctx.clone();
    use_effect(move || {
        let dark = theme_ctx.effective().is_dark();

        #[cfg(target_arch = "wasm32")]
        regenerate(dark, stars, meteors, icons, true);

        #[cfg(not(target_arch = "wasm32"))]
        let _ = dark;
    });

    // Resize listener with a trailing debounce; both guards die with the
    // component, cancelling any pending regeneration.
    #[cfg(target_arch = "wasm32")]
    {
        let resize_guard: Rc<RefCell<Option<ResizeGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));
        let debounce_timer: Rc<RefCell<Option<TimeoutGuard>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        let resize_ctx = ctx.clone();
        use_effect(move || {
            if resize_guard.borrow().is_some() {
                return;
            }

            let timer = debounce_timer.clone();
            let handler_ctx = resize_ctx.clone();
            *resize_guard.borrow_mut() = ResizeGuard::attach(move || {
                let fire_ctx = handler_ctx.clone();
                // Replacing the stored guard cancels the previous timer
                *timer.borrow_mut() = TimeoutGuard::schedule(RESIZE_DEBOUNCE_MS, move || {
                    regenerate(fire_ctx.is_dark(), stars, meteors, icons, false);
                });
            });
        });
    }

    let dark = ctx.is_dark();

    let field: Element = if dark {
        let star_nodes = stars().into_iter().enumerate().map(|(index, star)| {
            let style = star.style();
            rsx! {
                div { key: "star-{index}", class: "star", style: "{style}" }
            }
        });
        let meteor_nodes = meteors().into_iter().enumerate().map(|(index, meteor)| {
            let style = meteor.style();
            rsx! {
                div { key: "meteor-{index}", class: "meteor", style: "{style}" }
            }
        });
        rsx! {
            {star_nodes}
            {meteor_nodes}
        }
    } else {
        let icon_nodes = icons()
            .into_iter()
            .enumerate()
            .map(|(index, icon)| rsx! {
                TechIcon { key: "icon-{index}", index, icon, icons }
            });
        rsx! {
            {icon_nodes}
        }
    };

    rsx! {
        div { class: "star-background", aria_hidden: "true", {field} }
    }
}

/// One drifting icon. Asset failure flips only this particle's fallback
/// flag; siblings keep rendering.
#[component]
fn TechIcon(index: usize, icon: IconParticle, icons: Signal<Vec<IconParticle>>) -> Element {
    let src = if icon.use_fallback {
        None
    } else {
        embedded_assets::logo_data_url(icon.asset.logo)
    };

    let style = icon.style();
    let name = icon.asset.name;
    let glyph = icon.asset.fallback;
    let body = match src {
        Some(src) => rsx! {
            img {
                src: "{src}",
                alt: "{name}",
                onerror: move |_| {
                    let mut icons = icons;
                    let mut list = icons.write();
                    if let Some(item) = list.get_mut(index) {
                        item.use_fallback = true;
                    }
                },
            }
        },
        None => rsx! {
            span { class: "tech-icon-fallback", title: "{name}", "{glyph}" }
        },
    };

    rsx! {
        div { class: "tech-icon", style: "{style}", {body} }
    }
}

// ============ WASM-only helpers ============

/// Replace the particle sets for the current mode. Meteors only regenerate
/// on mode entry; resize reflows stars and icons.
#[cfg(target_arch = "wasm32")]
fn regenerate(
    dark: bool,
    stars: Signal<Vec<Star>>,
    meteors: Signal<Vec<Meteor>>,
    icons: Signal<Vec<IconParticle>>,
    mode_entry: bool,
) {
    let Some((width, height)) = viewport_size() else {
        return;
    };
    let mut rng = rand::thread_rng();

    let mut stars = stars;
    let mut meteors = meteors;
    let mut icons = icons;

    if dark {
        stars.set(particles::generate_stars(width, height, &mut rng));
        if mode_entry {
            meteors.set(particles::generate_meteors(&mut rng));
        }
    } else {
        icons.set(particles::generate_icons(&mut rng));
    }
}

#[cfg(target_arch = "wasm32")]
fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// RAII guard for the window resize listener
#[cfg(target_arch = "wasm32")]
struct ResizeGuard {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl ResizeGuard {
    fn attach(handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeGuard {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}
