//! Application state - shared across all handlers.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use blog_infra::{PostgresPostRepository, TableName, database::connect};

pub const MISSING_TABLE: &str = "POSTS_TABLE_NAME environment variable is not set";

/// Shared application state. The store handle is built once at start.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub backend: &'static str,
}

/// Repository installed when the store cannot be configured; every call fails.
pub struct UnconfiguredPostRepository {
    reason: String,
}

impl UnconfiguredPostRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, RepoError> {
        Err(RepoError::Misconfigured(self.reason.clone()))
    }
}

#[async_trait]
impl BaseRepository<Post, str> for UnconfiguredPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Post>, RepoError> {
        self.fail()
    }

    async fn save(&self, _post: Post) -> Result<Post, RepoError> {
        self.fail()
    }

    async fn delete(&self, _id: &str) -> Result<(), RepoError> {
        self.fail()
    }
}

#[async_trait]
impl PostRepository for UnconfiguredPostRepository {
    async fn update(
        &self,
        _id: &str,
        _draft: PostDraft,
        _updated_at: DateTime<Utc>,
    ) -> Result<Post, RepoError> {
        self.fail()
    }
}

impl AppState {
    pub fn with_repository(posts: Arc<dyn PostRepository>, backend: &'static str) -> Self {
        Self { posts, backend }
    }

    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self::with_repository(
            Arc::new(UnconfiguredPostRepository::new(reason)),
            "unconfigured",
        )
    }

    pub fn is_configured(&self) -> bool {
        self.backend != "unconfigured"
    }

    /// Build the application state with the record store the configuration selects.
    pub async fn new(config: &AppConfig) -> Self {
        let Some(table) = config.table_name.as_deref() else {
            tracing::error!("{MISSING_TABLE}. Every posts request will fail.");
            return Self::unconfigured(MISSING_TABLE);
        };

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                let table_name = match TableName::parse(table) {
                    Ok(name) => name,
                    Err(e) => {
                        tracing::error!(error = %e, "Unusable posts table name");
                        return Self::unconfigured(e.to_string());
                    }
                };

                match connect(db_config).await {
                    Ok(conn) => {
                        let repo = PostgresPostRepository::new(conn, table_name);
                        if db_config.auto_create_table {
                            if let Err(e) = repo.ensure_table().await {
                                tracing::error!(error = %e, "Failed to create posts table");
                            }
                        }
                        tracing::info!(table = %table, "Using PostgreSQL record store");
                        return Self::with_repository(Arc::new(repo), "postgres");
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL set but postgres feature disabled - using in-memory store");
            }
        }

        tracing::info!(table = %table, "Using in-memory record store");
        Self::with_repository(Arc::new(InMemoryPostRepository::new(table)), "memory")
    }
}
