//! PostgreSQL record store: one row per post in a single table keyed by `id`.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DbBackend, DbConn, DbErr, FromQueryResult, Statement, Value,
};

use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

const COLUMNS: &str = "id, title, content, author, tags, created_at, updated_at";

/// A validated table identifier, rendered double-quoted in SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    /// Accepts 1-63 ASCII letters, digits, `_` or `-`.
    pub fn parse(raw: &str) -> Result<Self, RepoError> {
        let valid = !raw.is_empty()
            && raw.len() <= 63
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(RepoError::Misconfigured(format!(
                "invalid table name {raw:?}"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

#[derive(Debug, FromQueryResult)]
struct PostRow {
    id: String,
    title: String,
    content: String,
    author: String,
    tags: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        let tags = row
            .tags
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author: row.author,
            tags,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn tags_value(tags: Vec<String>) -> Value {
    serde_json::Value::from(tags).into()
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
    table: TableName,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn, table: TableName) -> Self {
        Self { db, table }
    }

    pub fn table_name(&self) -> &TableName {
        &self.table
    }

    pub fn into_connection(self) -> DbConn {
        self.db
    }

    /// Create the posts table when it does not exist yet.
    pub async fn ensure_table(&self) -> Result<(), RepoError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (\
             id TEXT PRIMARY KEY, \
             title TEXT NOT NULL, \
             content TEXT NOT NULL, \
             author TEXT NOT NULL, \
             tags JSONB NOT NULL DEFAULT '[]'::jsonb, \
             created_at TIMESTAMPTZ NOT NULL, \
             updated_at TIMESTAMPTZ NOT NULL)",
            self.table
        );

        self.db
            .execute(Statement::from_string(DbBackend::Postgres, sql))
            .await
            .map_err(map_db_err)?;

        tracing::info!(table = %self.table.as_str(), "Posts table ready");
        Ok(())
    }

    fn statement(&self, sql: String, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
    }
}

#[async_trait]
impl BaseRepository<Post, str> for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let stmt = self.statement(format!("SELECT {COLUMNS} FROM {}", self.table), vec![]);

        let rows = PostRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let stmt = self.statement(
            format!("SELECT {COLUMNS} FROM {} WHERE id = $1", self.table),
            vec![id.into()],
        );

        let row = PostRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let stmt = self.statement(
            format!(
                "INSERT INTO {} ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7) \
                 ON CONFLICT (id) DO UPDATE SET \
                 title = EXCLUDED.title, content = EXCLUDED.content, \
                 author = EXCLUDED.author, tags = EXCLUDED.tags, \
                 created_at = EXCLUDED.created_at, updated_at = EXCLUDED.updated_at",
                self.table
            ),
            vec![
                post.id.clone().into(),
                post.title.clone().into(),
                post.content.clone().into(),
                post.author.clone().into(),
                tags_value(post.tags.clone()),
                post.created_at.into(),
                post.updated_at.into(),
            ],
        );

        self.db.execute(stmt).await.map_err(map_db_err)?;
        Ok(post)
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let stmt = self.statement(
            format!("DELETE FROM {} WHERE id = $1", self.table),
            vec![id.into()],
        );

        let result = self.db.execute(stmt).await.map_err(map_db_err)?;
        if result.rows_affected() == 0 {
            tracing::debug!(post_id = %id, "Delete of missing post");
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn update(
        &self,
        id: &str,
        draft: PostDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<Post, RepoError> {
        let stmt = self.statement(
            format!(
                "UPDATE {} SET title = $2, content = $3, author = $4, tags = $5, \
                 updated_at = GREATEST(created_at, $6) \
                 WHERE id = $1 RETURNING {COLUMNS}",
                self.table
            ),
            vec![
                id.into(),
                draft.title.into(),
                draft.content.into(),
                draft.author.into(),
                tags_value(draft.tags),
                updated_at.into(),
            ],
        );

        PostRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }
}
