use std::time::Duration;

/// Catalog client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base URL without a trailing slash.
    pub base_url: String,
    /// Path of the search endpoint, relative to `base_url`.
    pub search_path: String,
    /// Path prefix of the single-item endpoint; the item id is appended.
    pub item_path: String,
    /// Maximum number of items requested per search.
    pub page_size: usize,
    /// Bound applied to every catalog request.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.jikan.moe/v4".to_string(),
            search_path: "/anime".to_string(),
            item_path: "/anime".to_string(),
            page_size: 12,
            timeout: Duration::from_secs(10),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `CATALOG_BASE_URL`     | `https://api.jikan.moe/v4` |
    /// | `CATALOG_SEARCH_PATH`  | `/anime`                   |
    /// | `CATALOG_ITEM_PATH`    | `/anime`                   |
    /// | `CATALOG_PAGE_SIZE`    | `12`                       |
    /// | `CATALOG_TIMEOUT_SECS` | `10`                       |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("CATALOG_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let search_path =
            std::env::var("CATALOG_SEARCH_PATH").unwrap_or(defaults.search_path);
        let item_path = std::env::var("CATALOG_ITEM_PATH").unwrap_or(defaults.item_path);

        let page_size: usize = std::env::var("CATALOG_PAGE_SIZE")
            .ok()
            .map(|v| v.parse().expect("CATALOG_PAGE_SIZE must be a valid usize"))
            .unwrap_or(defaults.page_size);

        let timeout = std::env::var("CATALOG_TIMEOUT_SECS")
            .ok()
            .map(|v| {
                Duration::from_secs(v.parse().expect("CATALOG_TIMEOUT_SECS must be a valid u64"))
            })
            .unwrap_or(defaults.timeout);

        Self {
            base_url,
            search_path,
            item_path,
            page_size,
            timeout,
        }
    }
}
