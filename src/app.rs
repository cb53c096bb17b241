// src/app.rs

use crate::config::AppConfig;
use crate::content::{ContentSource, HttpContentSource};
use crate::db::cms::StoreContentSource;
use crate::db::Database;

/// Everything a request handler may touch. Built once, shared read-only by all workers.
pub struct App {
    pub db: Database,
    pub config: AppConfig,
    pub cms_source: Box<dyn ContentSource>,
}

impl App {
    /// Homepage content comes from `cms_url` when one is configured, otherwise straight
    /// from the local store. The local case never goes back through the worker pool.
    pub fn new(config: AppConfig) -> Self {
        let db = Database::new(config.db_path.clone());
        let cms_source: Box<dyn ContentSource> = match &config.cms_url {
            Some(url) => Box::new(HttpContentSource::new(url.clone())),
            None => Box::new(StoreContentSource::new(db.clone())),
        };

        Self {
            db,
            config,
            cms_source,
        }
    }

    /// Swaps the homepage content source, e.g. for a stub in tests.
    pub fn with_cms_source(mut self, source: impl ContentSource + 'static) -> Self {
        self.cms_source = Box::new(source);
        self
    }
}
