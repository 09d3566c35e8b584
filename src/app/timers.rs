//! setTimeout wrapper with cancellation on drop.

use wasm_bindgen::prelude::*;

/// A scheduled one-shot callback, cancelled if the guard drops first.
///
/// Replacing a stored guard cancels the pending timer, which is what turns a
/// stream of scheduled callbacks into a trailing debounce.
pub struct TimeoutGuard {
    handle: i32,
    // Kept alive until the timer fires or the guard drops
    _callback: Closure<dyn FnMut()>,
}

impl TimeoutGuard {
    /// Schedule `callback` to run once after `delay_ms`. None when no window
    /// is available.
    pub fn schedule(delay_ms: u32, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let cb = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok()?;
        Some(Self {
            handle,
            _callback: cb,
        })
    }
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}
