//! Navigation bar with scroll state and a mobile menu overlay.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#hero"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

/// Fixed top navigation. Gains a compact style once the page scrolls; the
/// mobile overlay locks body scroll while open and closes on Escape.
#[component]
pub fn Navbar() -> Element {
    let is_scrolled = use_signal(|| false);
    let mut is_menu_open = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        let scroll_guard: Rc<RefCell<Option<WindowListenerGuard>>> =
            use_hook(|| Rc::new(RefCell::new(None)));
        let key_guard: Rc<RefCell<Option<WindowListenerGuard>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        use_effect(move || {
            if scroll_guard.borrow().is_none() {
                let mut is_scrolled = is_scrolled;
                *scroll_guard.borrow_mut() =
                    WindowListenerGuard::attach("scroll", move |_: web_sys::Event| {
                        let scrolled = web_sys::window()
                            .map(|w| w.scroll_y().unwrap_or(0.0) > 10.0)
                            .unwrap_or(false);
                        is_scrolled.set(scrolled);
                    });
            }

            if key_guard.borrow().is_none() {
                let mut is_menu_open = is_menu_open;
                *key_guard.borrow_mut() =
                    WindowListenerGuard::attach("keydown", move |e: web_sys::Event| {
                        if let Ok(key_event) = e.dyn_into::<web_sys::KeyboardEvent>() {
                            if key_event.key() == "Escape" && is_menu_open() {
                                is_menu_open.set(false);
                            }
                        }
                    });
            }
        });

        // Lock body scroll while the overlay is open
        use_effect(move || {
            set_body_scroll_locked(is_menu_open());
        });
    }

    rsx! {
        nav { class: if is_scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "nav-inner",
                a { class: "nav-brand", href: "#hero",
                    "Nehemiah"
                    span { class: "accent", "Kemayah" }
                }
                ul { class: "nav-links",
                    for (name, href) in NAV_ITEMS {
                        li {
                            a { href: "{href}", "{name}" }
                        }
                    }
                }
                button {
                    class: "nav-menu-button",
                    aria_label: if is_menu_open() { "Close menu" } else { "Open menu" },
                    onclick: move |_| {
                        let open = is_menu_open();
                        is_menu_open.set(!open);
                    },
                    if is_menu_open() { "✕" } else { "☰" }
                }
            }
            if is_menu_open() {
                div { class: "nav-overlay",
                    ul {
                        for (name, href) in NAV_ITEMS {
                            li {
                                a {
                                    href: "{href}",
                                    onclick: move |_| is_menu_open.set(false),
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if body.style().set_property("overflow", value).is_err() {
        tracing::warn!("Failed to update body scroll lock");
    }
}

/// RAII guard for a window event listener
#[cfg(target_arch = "wasm32")]
struct WindowListenerGuard {
    window: web_sys::Window,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl WindowListenerGuard {
    fn attach(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            window,
            event,
            callback,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for WindowListenerGuard {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
