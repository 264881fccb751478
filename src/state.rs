use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::resolver::Language;
use std::sync::Arc;

/// Application state shared across all request handlers.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Initialize application state, loading the catalog when `CATALOG_PATH` is set.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => {
                tracing::info!("No CATALOG_PATH configured, serving without a catalog");
                Catalog::empty()
            }
        };

        Ok(Self::with_catalog(config, catalog))
    }

    /// Build state around an already loaded catalog.
    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        if config.catalog_path.is_some() && catalog.is_empty() {
            tracing::warn!("Catalog is configured but holds no tools");
        }

        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    /// A configured catalog must hold at least one tool before demos can be served.
    /// Without `CATALOG_PATH` only the resolver endpoints are exposed, which are always ready.
    pub fn is_ready(&self) -> bool {
        self.config.catalog_path.is_none() || !self.catalog.is_empty()
    }

    /// The request's language, or the configured default.
    pub fn language(&self, requested: Option<Language>) -> Language {
        requested.unwrap_or(self.config.default_language)
    }
}
