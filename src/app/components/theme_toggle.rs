//! Theme toggle control.
//!
//! Flips the persisted preference and immediately re-applies the theme. A
//! short transition lock, matching the CSS transition, drops re-entrant
//! activations instead of queueing them.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

#[cfg(target_arch = "wasm32")]
use crate::app::theme::TRANSITION_LOCK_MS;
#[cfg(target_arch = "wasm32")]
use crate::app::timers::TimeoutGuard;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Floating light/dark toggle button.
#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_theme();

    // The pending unlock timer lives with the component; unmounting drops
    // the guard and cancels the callback.
    #[cfg(target_arch = "wasm32")]
    let unlock_timer: Rc<RefCell<Option<TimeoutGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let is_dark = ctx.is_dark();
    let is_locked = ctx.is_locked();

    let click_ctx = ctx.clone();
    #[cfg(target_arch = "wasm32")]
    let click_timer = unlock_timer.clone();
    let on_click = move |_| {
        // Locked: the activation is dropped, not queued
        if !click_ctx.toggle() {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            let release_ctx = click_ctx.clone();
            *click_timer.borrow_mut() =
                TimeoutGuard::schedule(TRANSITION_LOCK_MS, move || release_ctx.release_lock());
        }
    };

    rsx! {
        button {
            class: "theme-toggle",
            disabled: is_locked,
            aria_label: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: on_click,
            if is_dark {
                SunIcon {}
            } else {
                MoonIcon {}
            }
        }
    }
}

#[component]
fn SunIcon() -> Element {
    rsx! {
        svg {
            class: "theme-toggle-icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41" }
        }
    }
}

#[component]
fn MoonIcon() -> Element {
    rsx! {
        svg {
            class: "theme-toggle-icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
        }
    }
}
