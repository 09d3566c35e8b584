//! Theme management with localStorage persistence and cross-tab sync.
//!
//! Resolution order: explicit stored preference, then the OS color-scheme
//! signal, then light. The resolved value is broadcast through a context
//! signal and mirrored onto the document root as the `dark` marker class,
//! which is the only coupling point the stylesheet consumes.

use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Storage key shared with every other tab of the same origin
pub const THEME_STORAGE_KEY: &str = "theme";

/// Marker class on the document root while the dark theme is active
pub const DARK_CLASS: &str = "dark";

/// How long a toggle holds the transition lock, matching the CSS transition
pub const TRANSITION_LOCK_MS: u32 = 300;

/// Resolved theme actually applied to the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EffectiveTheme {
    Dark,
    #[default]
    Light,
}

impl EffectiveTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveTheme::Dark => "dark",
            EffectiveTheme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(EffectiveTheme::Dark),
            "light" => Some(EffectiveTheme::Light),
            _ => None,
        }
    }

    pub fn inverse(&self) -> Self {
        match self {
            EffectiveTheme::Dark => EffectiveTheme::Light,
            EffectiveTheme::Light => EffectiveTheme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, EffectiveTheme::Dark)
    }

    fn from_dark(dark: bool) -> Self {
        if dark {
            EffectiveTheme::Dark
        } else {
            EffectiveTheme::Light
        }
    }
}

/// The user's explicit persisted choice; Unset is inferred from absence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Parse a raw stored value. Anything unrecognized reads as Unset.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Unset,
        }
    }

    pub fn as_effective(&self) -> Option<EffectiveTheme> {
        match self {
            ThemePreference::Dark => Some(EffectiveTheme::Dark),
            ThemePreference::Light => Some(EffectiveTheme::Light),
            ThemePreference::Unset => None,
        }
    }
}

/// Where the explicit preference lives.
///
/// Failures never propagate past this boundary: an unreadable store reads
/// as Unset, a failed write reports false and the session carries on with
/// in-memory state.
pub trait PreferenceStore {
    fn get(&self) -> ThemePreference;
    fn set(&self, value: EffectiveTheme) -> bool;
}

/// In-memory store: the session fallback when persistent storage is
/// unavailable, and the test double.
#[derive(Default)]
pub struct MemoryStore {
    value: Cell<ThemePreference>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> ThemePreference {
        self.value.get()
    }

    fn set(&self, value: EffectiveTheme) -> bool {
        self.value.set(ThemePreference::parse(Some(value.as_str())));
        true
    }
}

/// Store used by the running app: localStorage when available, with every
/// write shadowed into an in-memory cell so a failed persist still yields a
/// working session value. On the server it degrades to the memory cell.
#[derive(Default)]
pub struct ClientStore {
    session: MemoryStore,
}

impl ClientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for ClientStore {
    fn get(&self) -> ThemePreference {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                if let Ok(value) = storage.get_item(THEME_STORAGE_KEY) {
                    let pref = ThemePreference::parse(value.as_deref());
                    if pref != ThemePreference::Unset {
                        return pref;
                    }
                }
            }
        }
        self.session.get()
    }

    fn set(&self, value: EffectiveTheme) -> bool {
        self.session.set(value);

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(THEME_STORAGE_KEY, value.as_str()).is_ok() {
                    return true;
                }
            }
            tracing::debug!("Theme preference did not persist; continuing in-memory");
            return false;
        }

        #[cfg(not(target_arch = "wasm32"))]
        false
    }
}

/// Pure resolution: explicit preference wins, then the OS signal, then light.
pub fn resolve(pref: ThemePreference, os_dark: Option<bool>) -> EffectiveTheme {
    match pref.as_effective() {
        Some(explicit) => explicit,
        None => EffectiveTheme::from_dark(os_dark.unwrap_or(false)),
    }
}

/// Owns resolution state: the preference store, the last observed OS signal,
/// the last broadcast value, and the toggle transition lock.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    os_dark: Cell<Option<bool>>,
    last_broadcast: Cell<Option<EffectiveTheme>>,
    locked: Cell<bool>,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            os_dark: Cell::new(None),
            last_broadcast: Cell::new(None),
            locked: Cell::new(false),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_os_signal(&self, dark: bool) {
        self.os_dark.set(Some(dark));
    }

    pub fn resolve(&self) -> EffectiveTheme {
        resolve(self.store.get(), self.os_dark.get())
    }

    /// Re-resolve after any trigger. Returns the value only when it differs
    /// from the last broadcast, so subscribers hear each change exactly once.
    pub fn re_resolve(&self) -> Option<EffectiveTheme> {
        let next = self.resolve();
        if self.last_broadcast.get() == Some(next) {
            return None;
        }
        self.last_broadcast.set(Some(next));
        Some(next)
    }

    /// OS color-scheme change. Honored only while no explicit preference
    /// exists; an explicit choice is never fought.
    pub fn os_signal_changed(&self, dark: bool) -> Option<EffectiveTheme> {
        self.os_dark.set(Some(dark));
        if self.store.get() != ThemePreference::Unset {
            return None;
        }
        self.re_resolve()
    }

    /// Flip the theme. Returns None while the transition lock is held -
    /// excess calls are dropped, not queued. On success the lock engages and
    /// the caller schedules `release_lock` once the visual transition ends.
    pub fn toggle(&self) -> Option<EffectiveTheme> {
        if self.locked.get() {
            return None;
        }
        self.locked.set(true);
        let next = self.resolve().inverse();
        if !self.store.set(next) {
            tracing::debug!("Toggle preference write did not persist");
        }
        self.re_resolve()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    pub fn release_lock(&self) {
        self.locked.set(false);
    }

    /// First-load resolution. The resolved value is written back when no
    /// preference existed, so the stored key and the root class agree from
    /// the first paint - cross-tab sync reads that key.
    pub fn initialize(&self) -> EffectiveTheme {
        let initial = self.resolve();
        if self.store.get() == ThemePreference::Unset {
            let _ = self.store.set(initial);
        }
        self.last_broadcast.set(Some(initial));
        initial
    }
}

/// Global theme state shared via context
#[derive(Clone)]
pub struct ThemeContext {
    /// Resolved theme (triggers re-renders)
    pub current: Signal<EffectiveTheme>,
    /// Mirrors the transition lock for UI disabled states
    pub locked: Signal<bool>,
    controller: Rc<ThemeController<ClientStore>>,
}

impl ThemeContext {
    pub fn effective(&self) -> EffectiveTheme {
        (self.current)()
    }

    pub fn is_dark(&self) -> bool {
        self.effective().is_dark()
    }

    pub fn is_locked(&self) -> bool {
        (self.locked)()
    }

    /// Flip the theme. Returns false while the transition lock is held.
    pub fn toggle(&self) -> bool {
        let Some(next) = self.controller.toggle() else {
            return false;
        };

        #[cfg(target_arch = "wasm32")]
        apply_theme_to_dom(next);

        let mut current = self.current;
        current.set(next);
        let mut locked = self.locked;
        locked.set(true);
        true
    }

    /// Clear the transition lock (scheduled by the toggle control).
    pub fn release_lock(&self) {
        self.controller.release_lock();
        let mut locked = self.locked;
        locked.set(false);
    }

    /// Re-resolve after an external trigger (storage event, root class
    /// mutation) and broadcast if the value changed.
    #[cfg(target_arch = "wasm32")]
    fn sync_external(&self) {
        let resolved = self.controller.resolve();
        if dom_marker_is_dark() != Some(resolved.is_dark()) {
            apply_theme_to_dom(resolved);
        }
        if let Some(next) = self.controller.re_resolve() {
            let mut current = self.current;
            current.set(next);
        }
    }

    /// OS color-scheme change; applied only when no explicit choice exists.
    #[cfg(target_arch = "wasm32")]
    fn sync_os_signal(&self, dark: bool) {
        if let Some(next) = self.controller.os_signal_changed(dark) {
            apply_theme_to_dom(next);
            let mut current = self.current;
            current.set(next);
        }
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() {
    let current = use_signal(EffectiveTheme::default);
    let locked = use_signal(|| false);
    let controller = use_hook(|| Rc::new(ThemeController::new(ClientStore::new())));

    let ctx = ThemeContext {
        current,
        locked,
        controller,
    };

    // Client-side only: seed the OS signal, resolve, apply to the DOM, and
    // attach the cross-context listeners. The guard detaches them when the
    // provider unmounts.
    #[cfg(target_arch = "wasm32")]
    {
        let sync_guard: Rc<RefCell<Option<ThemeSyncGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

        let guard_clone = sync_guard.clone();
        let effect_ctx = ctx.clone();
        use_effect(move || {
            if guard_clone.borrow().is_some() {
                return;
            }

            if let Some(dark) = media_prefers_dark() {
                effect_ctx.controller.set_os_signal(dark);
            }
            let initial = effect_ctx.controller.initialize();
            apply_theme_to_dom(initial);
            let mut current = effect_ctx.current;
            current.set(initial);

            *guard_clone.borrow_mut() = ThemeSyncGuard::attach(effect_ctx.clone());
        });
    }

    use_context_provider(move || ctx);
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: EffectiveTheme) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let result = if theme.is_dark() {
                    root.class_list().add_1(DARK_CLASS)
                } else {
                    root.class_list().remove_1(DARK_CLASS)
                };
                if result.is_err() {
                    tracing::warn!("Failed to update theme marker class");
                }
            }
        }
    }
}

/// Whether the root currently carries the dark marker class
#[cfg(target_arch = "wasm32")]
fn dom_marker_is_dark() -> Option<bool> {
    let root = web_sys::window()?.document()?.document_element()?;
    Some(root.class_list().contains(DARK_CLASS))
}

/// Current OS color-scheme signal; None when matchMedia is unavailable
#[cfg(target_arch = "wasm32")]
fn media_prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let mql = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(mql.matches())
}

/// RAII guard owning the cross-context listeners: storage events from other
/// tabs, mutations of the root marker class, and OS color-scheme changes.
/// Dropping the guard detaches all three.
#[cfg(target_arch = "wasm32")]
struct ThemeSyncGuard {
    window: web_sys::Window,
    storage_cb: Closure<dyn FnMut(web_sys::StorageEvent)>,
    observer: web_sys::MutationObserver,
    // Kept alive for the observer's lifetime
    _observer_cb: Closure<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>,
    media: Option<web_sys::MediaQueryList>,
    media_cb: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl ThemeSyncGuard {
    fn attach(ctx: ThemeContext) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        // Storage events fire in this tab when another tab writes the key
        let storage_ctx = ctx.clone();
        let storage_cb = Closure::wrap(Box::new(move |e: web_sys::StorageEvent| {
            if e.key().as_deref() == Some(THEME_STORAGE_KEY) {
                storage_ctx.sync_external();
            }
        }) as Box<dyn FnMut(_)>);
        if window
            .add_event_listener_with_callback("storage", storage_cb.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach storage listener; cross-tab sync disabled");
        }

        // Defensive re-sync when something else touches the root class
        let observer_ctx = ctx.clone();
        let observer_cb = Closure::wrap(Box::new(
            move |_records: js_sys::Array, _obs: web_sys::MutationObserver| {
                observer_ctx.sync_external();
            },
        ) as Box<dyn FnMut(_, _)>);
        let observer = web_sys::MutationObserver::new(observer_cb.as_ref().unchecked_ref()).ok()?;
        if let Some(root) = document.document_element() {
            let init = web_sys::MutationObserverInit::new();
            init.set_attributes(true);
            let filter = js_sys::Array::new();
            filter.push(&JsValue::from_str("class"));
            init.set_attribute_filter(&filter);
            if observer.observe_with_options(&root, &init).is_err() {
                tracing::warn!("Failed to observe theme marker class");
            }
        }

        // OS color-scheme changes, honored only without an explicit choice
        let media_ctx = ctx;
        let media_cb = Closure::wrap(Box::new(move |e: web_sys::MediaQueryListEvent| {
            media_ctx.sync_os_signal(e.matches());
        }) as Box<dyn FnMut(_)>);
        let media = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten();
        if let Some(mql) = &media {
            if mql
                .add_event_listener_with_callback("change", media_cb.as_ref().unchecked_ref())
                .is_err()
            {
                tracing::warn!("Failed to attach color-scheme listener");
            }
        }

        Some(Self {
            window,
            storage_cb,
            observer,
            _observer_cb: observer_cb,
            media,
            media_cb,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ThemeSyncGuard {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "storage",
            self.storage_cb.as_ref().unchecked_ref(),
        );
        self.observer.disconnect();
        if let Some(mql) = &self.media {
            let _ = mql.remove_event_listener_with_callback(
                "change",
                self.media_cb.as_ref().unchecked_ref(),
            );
        }
    }
}
