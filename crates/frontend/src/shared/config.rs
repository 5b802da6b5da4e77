//! Client configuration, resolved once from the host page.

use contracts::shared::limits::NOTIFICATION_TTL_MS;
use once_cell::sync::OnceCell;
use wasm_bindgen::JsCast;

/// `<meta name="medchat-api-base" content="https://api.example.org">`
const API_BASE_META: &str = "medchat-api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for API paths; empty means same origin.
    pub api_base: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub notification_ttl_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            notification_ttl_ms: NOTIFICATION_TTL_MS,
        }
    }
}

static CONFIG: OnceCell<ClientConfig> = OnceCell::new();

impl ClientConfig {
    /// Configuration of the running page.
    pub fn get() -> &'static ClientConfig {
        CONFIG.get_or_init(ClientConfig::from_document)
    }

    fn from_document() -> Self {
        let mut config = ClientConfig::default();
        if let Some(base) = read_meta(API_BASE_META) {
            config.api_base = normalize_base(&base);
        }
        log::debug!("client config: {:?}", config);
        config
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

/// Trim whitespace and trailing slashes so paths can be appended as-is.
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" https://med.example.org/ "), "https://med.example.org");
        assert_eq!(normalize_base("http://127.0.0.1:8000//"), "http://127.0.0.1:8000");
        assert_eq!(normalize_base(""), "");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert!(config.api_base.is_empty());
    }
}
