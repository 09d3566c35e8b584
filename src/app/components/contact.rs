//! Contact section: validated form submitting through the server relay.

use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::app::api::{self, sanitize_input, ContactRequest, ContactResponse};

/// Minimum gap between submissions
const MIN_INTERVAL_MS: f64 = 60_000.0;
/// Rolling window for the hourly cap
const WINDOW_MS: f64 = 3_600_000.0;
/// Submissions allowed per window
const MAX_PER_WINDOW: u32 = 5;

/// Client-side submission throttle. Session-only bookkeeping; nothing
/// persists.
pub struct RateLimiter {
    window_start_ms: Cell<f64>,
    count_in_window: Cell<u32>,
    last_send_ms: Cell<Option<f64>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            window_start_ms: Cell::new(0.0),
            count_in_window: Cell::new(0),
            last_send_ms: Cell::new(None),
        }
    }

    /// Whether a submission is allowed at `now_ms`.
    pub fn check(&self, now_ms: f64) -> bool {
        if now_ms - self.window_start_ms.get() > WINDOW_MS {
            self.window_start_ms.set(now_ms);
            self.count_in_window.set(0);
        }

        if self.count_in_window.get() >= MAX_PER_WINDOW {
            return false;
        }

        if let Some(last) = self.last_send_ms.get() {
            if now_ms - last < MIN_INTERVAL_MS {
                return false;
            }
        }

        true
    }

    /// Record a successful submission.
    pub fn record(&self, now_ms: f64) {
        self.count_in_window.set(self.count_in_window.get() + 1);
        self.last_send_ms.set(Some(now_ms));
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq)]
enum SubmitStatus {
    Sent,
    Failed(String),
}

#[component]
pub fn ContactSection() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| None::<SubmitStatus>);

    let limiter: Rc<RateLimiter> = use_hook(|| Rc::new(RateLimiter::new()));

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        if submitting() {
            return;
        }

        let request = ContactRequest {
            name: name(),
            email: email(),
            message: message(),
        };

        let errors = api::validate_contact(&request);
        if !errors.is_empty() {
            status.set(Some(SubmitStatus::Failed(errors.join(". "))));
            return;
        }

        let now = now_ms();
        if !limiter.check(now) {
            status.set(Some(SubmitStatus::Failed(
                "Too many messages; please wait a bit before sending again".to_string(),
            )));
            return;
        }

        submitting.set(true);
        status.set(None);
        let limiter = limiter.clone();
        spawn(async move {
            match api::post_json::<ContactRequest, ContactResponse>("/api/contact", &request).await
            {
                Ok(resp) if resp.sent => {
                    limiter.record(now_ms());
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    status.set(Some(SubmitStatus::Sent));
                }
                Ok(_) => {
                    status.set(Some(SubmitStatus::Failed(
                        "The message could not be sent".to_string(),
                    )));
                }
                Err(err) => {
                    tracing::warn!("Contact submission failed: {}", err);
                    status.set(Some(SubmitStatus::Failed(
                        "The message could not be sent; please try again later".to_string(),
                    )));
                }
            }
            submitting.set(false);
        });
    };

    let status_view: Option<Element> = status().map(|s| match s {
        SubmitStatus::Sent => rsx! {
            p { class: "form-status sent", "Message sent - thank you!" }
        },
        SubmitStatus::Failed(reason) => rsx! {
            p { class: "form-status failed", "{reason}" }
        },
    });

    rsx! {
        section { id: "contact", class: "section contact-section",
            h2 { class: "section-title",
                "Get In "
                span { class: "gradient-text", "Touch" }
            }
            p { class: "section-lead",
                "Have a project in mind or want to collaborate? Drop a message and \
                 I'll get back to you."
            }
            form { class: "contact-form", onsubmit: on_submit,
                label { r#for: "contact-name", "Name" }
                input {
                    id: "contact-name",
                    name: "name",
                    value: "{name}",
                    placeholder: "Your name",
                    oninput: move |e| name.set(sanitize_input(&e.value())),
                }
                label { r#for: "contact-email", "Email" }
                input {
                    id: "contact-email",
                    name: "email",
                    r#type: "email",
                    value: "{email}",
                    placeholder: "you@example.com",
                    oninput: move |e| email.set(sanitize_input(&e.value())),
                }
                label { r#for: "contact-message", "Message" }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: "6",
                    value: "{message}",
                    placeholder: "What would you like to build?",
                    oninput: move |e| message.set(sanitize_input(&e.value())),
                }
                button {
                    class: "cosmic-button",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Sending..." } else { "Send Message" }
                }
                {status_view}
            }
        }
    }
}

/// Wall-clock milliseconds; the browser clock on wasm, epoch elsewhere.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}
