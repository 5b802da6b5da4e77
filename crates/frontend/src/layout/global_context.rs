use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Chat,
    Documents,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Chat, Page::Documents];

    pub fn key(self) -> &'static str {
        match self {
            Page::Chat => "chat",
            Page::Documents => "documents",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Page::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Chat => "智能问答",
            Page::Documents => "文档分析",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Chat => "chat",
            Page::Documents => "document",
        }
    }
}

/// Query string that selects `page`, e.g. `?page=documents`.
pub fn page_query(page: Page) -> String {
    let query = serde_qs::to_string(&HashMap::from([("page".to_string(), page.key().to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}

/// Page named by a `location.search` value; unknown or missing keys give `None`.
pub fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("page").and_then(|key| Page::from_key(key))
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
        }
    }

    pub fn open(&self, page: Page) {
        log::debug!("🔷 open page: '{}'", page.key());
        self.page.set(page);
    }

    /// Restore the page from the URL and keep the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = page_query(this.page.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_round_trip() {
        assert_eq!(page_query(Page::Documents), "?page=documents");
        assert_eq!(page_from_query("?page=documents"), Some(Page::Documents));
        assert_eq!(page_from_query("page=chat"), Some(Page::Chat));
    }

    #[test]
    fn test_unknown_page_is_ignored() {
        assert_eq!(page_from_query(""), None);
        assert_eq!(page_from_query("?page=admin"), None);
        assert_eq!(page_from_query("?active=a001"), None);
    }
}
