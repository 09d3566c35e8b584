//! Shared API types, contact form validation, and the client fetch helper.
//!
//! Validation runs on both sides of the wire: client-side for immediate
//! feedback, server-side as the authority before the relay call.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Contact form submission payload
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact relay response
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub sent: bool,
}

// =============================================================================
// Validation
// =============================================================================

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]{2,50}$").expect("name regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 1000;
pub const EMAIL_MAX_LEN: usize = 254;

pub fn validate_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub fn validate_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LEN && EMAIL_RE.is_match(email)
}

pub fn validate_message(message: &str) -> bool {
    let len = message.chars().count();
    (MESSAGE_MIN_LEN..=MESSAGE_MAX_LEN).contains(&len)
}

/// Strip markup and script-ish fragments from free-text input.
pub fn sanitize_input(input: &str) -> String {
    static SCRIPT_TAG_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("script regex"));
    static JS_URI_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("js uri regex"));
    static INLINE_HANDLER_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)on\w+=").expect("handler regex"));

    let cleaned = SCRIPT_TAG_RE.replace_all(input, "");
    let cleaned = JS_URI_RE.replace_all(&cleaned, "");
    let cleaned = INLINE_HANDLER_RE.replace_all(&cleaned, "");
    cleaned
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate a full submission; returns one message per failed field.
pub fn validate_contact(req: &ContactRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if req.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    } else if !validate_name(&req.name) {
        errors.push("Name contains invalid characters or is too long".to_string());
    }

    if req.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !validate_email(&req.email) {
        errors.push("Please enter a valid email address".to_string());
    }

    if req.message.trim().is_empty() {
        errors.push("Message is required".to_string());
    } else if !validate_message(&req.message) {
        errors.push(format!(
            "Message must be between {} and {} characters",
            MESSAGE_MIN_LEN, MESSAGE_MAX_LEN
        ));
    }

    errors
}

// =============================================================================
// Client fetch helper
// =============================================================================

/// POST a JSON body and decode a JSON response (browser only)
#[cfg(target_arch = "wasm32")]
pub async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
    url: &str,
    body: &T,
) -> Result<R, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;

    let body_str = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body_str));

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;
    if !resp.ok() {
        return Err(format!("Request failed with status {}", resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("{:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json<T: Serialize, R: for<'de> Deserialize<'de>>(
    _url: &str,
    _body: &T,
) -> Result<R, String> {
    Err("post_json is only available in browser".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            message: "I would like to talk about a project.".into(),
        }
    }

    #[test]
    fn accepts_a_well_formed_submission() {
        assert!(validate_contact(&valid_request()).is_empty());
    }

    #[test]
    fn rejects_bad_names() {
        assert!(!validate_name("A"));
        assert!(!validate_name("name<script>"));
        assert!(!validate_name(&"x".repeat(51)));
        assert!(validate_name("Jean-Luc O'Neill"));
    }

    #[test]
    fn rejects_bad_emails() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("two@@example.com"));
        assert!(!validate_email(&format!("{}@example.com", "a".repeat(250))));
        assert!(validate_email("someone@example.co.uk"));
    }

    #[test]
    fn message_length_bounds_are_inclusive() {
        assert!(!validate_message("too short"));
        assert!(validate_message(&"m".repeat(MESSAGE_MIN_LEN)));
        assert!(validate_message(&"m".repeat(MESSAGE_MAX_LEN)));
        assert!(!validate_message(&"m".repeat(MESSAGE_MAX_LEN + 1)));
    }

    #[test]
    fn sanitize_strips_markup_and_script_fragments() {
        assert_eq!(
            sanitize_input("hello <script>alert(1)</script>world"),
            "hello world"
        );
        assert_eq!(sanitize_input("javascript:alert(1)"), "alert(1)");
        assert_eq!(sanitize_input("a onclick=steal() b"), "a steal() b");
        assert_eq!(sanitize_input("  <b>bold</b>  "), "bbold/b");
    }

    #[test]
    fn each_failed_field_reports_once() {
        let req = ContactRequest {
            name: "".into(),
            email: "nope".into(),
            message: "hi".into(),
        };
        let errors = validate_contact(&req);
        assert_eq!(errors.len(), 3);
    }
}
