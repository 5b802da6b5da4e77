//! CSRF token lookup.
//!
//! The backend sets an anti-forgery cookie; every request echoes it in a
//! header.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Value of cookie `name` in a `document.cookie` string, URL-decoded.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

/// Read cookie `name` from the current document.
pub fn read_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    parse_cookie(&cookies, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie() {
        let cookies = "sessionid=abc; csrftoken=Xy%2Fz9; theme=dark";
        assert_eq!(parse_cookie(cookies, "csrftoken"), Some("Xy/z9".to_string()));
        assert_eq!(parse_cookie(cookies, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(parse_cookie("", "csrftoken"), None);
        assert_eq!(parse_cookie("csrftoken2=nope", "csrftoken"), None);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(parse_cookie("csrftoken=", "csrftoken"), Some(String::new()));
    }
}
