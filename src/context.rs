//! Application Context
//!
//! Shared read-only state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use portfolio_core::{ContentStore, Route, SiteConfig};

/// Content and config, cloned cheaply into every page
#[derive(Clone)]
pub struct AppContext {
    pub content: Arc<ContentStore>,
    pub config: Arc<SiteConfig>,
}

impl AppContext {
    pub fn new(content: ContentStore, config: SiteConfig) -> Self {
        Self {
            content: Arc::new(content),
            config: Arc::new(config),
        }
    }

    /// Link target for a route in the configured router mode
    pub fn href(&self, route: &Route) -> String {
        route.href(self.config.router_mode)
    }

    /// Resolve a content asset path
    pub fn asset(&self, path: &str) -> String {
        self.config.asset_url(path)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::RouterMode;

    #[test]
    fn test_href_follows_router_mode() {
        let content = ContentStore::bundled().unwrap();
        let ctx = AppContext::new(content.clone(), SiteConfig::default());
        assert_eq!(ctx.href(&Route::Gallery), "#/gallery");

        let config = SiteConfig { router_mode: RouterMode::Path, ..SiteConfig::default() };
        let ctx = AppContext::new(content, config);
        assert_eq!(ctx.href(&Route::Article("2".to_string())), "/post/2");
    }

    #[test]
    fn test_asset_base_applies() {
        let config = SiteConfig { asset_base: "/site".to_string(), ..SiteConfig::default() };
        let ctx = AppContext::new(ContentStore::bundled().unwrap(), config);
        assert_eq!(ctx.asset("/images/a.jpg"), "/site/images/a.jpg");
    }
}
