use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Top-level pages of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageKey {
    #[default]
    Dashboard,
    Inventory,
    Sales,
    Suppliers,
}

impl PageKey {
    pub const ALL: [PageKey; 4] = [
        PageKey::Dashboard,
        PageKey::Inventory,
        PageKey::Sales,
        PageKey::Suppliers,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::Inventory => "inventory",
            PageKey::Sales => "sales",
            PageKey::Suppliers => "suppliers",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageKey::Dashboard => "Dashboard",
            PageKey::Inventory => "Inventory",
            PageKey::Sales => "Sales",
            PageKey::Suppliers => "Suppliers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// Resolves `?page=...` to a page; anything unrecognised is the dashboard.
pub fn resolve_page(search: &str) -> PageKey {
    serde_qs::from_str::<PageQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|query| query.page)
        .and_then(|key| PageKey::from_key(&key))
        .unwrap_or_default()
}

/// Query string that selects `page`, including the leading `?`.
pub fn page_href(page: PageKey) -> String {
    let query = PageQuery {
        page: Some(page.key().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::default()),
        }
    }

    /// Syncs the active page with the URL query: read once on startup,
    /// then written back whenever the page changes.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(resolve_page(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = page_href(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
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

    pub fn open_page(&self, page: PageKey) {
        if self.active.get_untracked() != page {
            log::info!("open page: {}", page.key());
            self.active.set(page);
        }
    }

    pub fn is_active(&self, page: PageKey) -> bool {
        self.active.get() == page
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_page() {
        assert_eq!(resolve_page(""), PageKey::Dashboard);
        assert_eq!(resolve_page("?page=sales"), PageKey::Sales);
        assert_eq!(resolve_page("page=inventory"), PageKey::Inventory);
        assert_eq!(resolve_page("?foo=1&page=suppliers"), PageKey::Suppliers);
    }

    #[test]
    fn test_unknown_page_is_dashboard() {
        assert_eq!(resolve_page("?page=reports"), PageKey::Dashboard);
        assert_eq!(resolve_page("?page="), PageKey::Dashboard);
    }

    #[test]
    fn test_page_href_round_trips() {
        for page in PageKey::ALL {
            assert_eq!(resolve_page(&page_href(page)), page);
        }
        assert_eq!(page_href(PageKey::Inventory), "?page=inventory");
    }
}
