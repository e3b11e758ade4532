//! Application state - shared across all handlers.

use std::sync::Arc;

use socktalk_core::ports::PostStore;
use socktalk_infra::database::InMemoryPostStore;

use crate::config::AppConfig;
use crate::templates::{MiniJinjaEngine, TemplateEngine};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub templates: Arc<dyn TemplateEngine>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let templates: Arc<dyn TemplateEngine> = Arc::new(MiniJinjaEngine::new());

        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostStore> = {
            if let Some(db_config) = &config.database {
                match socktalk_infra::database::connect(db_config).await {
                    Ok(db) => Arc::new(socktalk_infra::database::PostgresPostStore::new(db)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostStore::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostStore> = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL set but the postgres feature is disabled");
            }
            tracing::info!("Running without postgres feature - using in-memory post store");
            Arc::new(InMemoryPostStore::new())
        };

        tracing::info!("Application state initialized");

        Self { posts, templates }
    }

    /// State over an arbitrary store, for handler tests.
    #[cfg(test)]
    pub fn for_tests(posts: Arc<dyn PostStore>) -> Self {
        Self {
            posts,
            templates: Arc::new(MiniJinjaEngine::new()),
        }
    }
}
