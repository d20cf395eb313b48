//! Postgres-backed document store.
//!
//! Every entity type shares one table; rows are keyed by
//! `(collection, id)` and carry the full record as `jsonb`.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | Database | `Database` |
//! | PoolClosed / PoolTimedOut / Io | `Unavailable` |
//! | Other | `Database` |

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use tracing::instrument;

use greenscape_core::Entity;

use super::{DocumentStore, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    seq         BIGSERIAL,
    collection  TEXT        NOT NULL,
    id          TEXT        NOT NULL,
    body        JSONB       NOT NULL,
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (collection, id)
)
"#;

#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and make sure the `documents` table exists.
    #[instrument(skip(database_url), err)]
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }
}

#[async_trait]
impl<T> DocumentStore<T> for PostgresDocumentStore
where
    T: Entity + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    #[instrument(skip(self), fields(collection = T::COLLECTION), err)]
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        let bodies: Vec<Json<JsonValue>> = sqlx::query_scalar(
            "SELECT body FROM documents WHERE collection = $1 ORDER BY seq ASC",
        )
        .bind(T::COLLECTION)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list", e))?;

        bodies
            .into_iter()
            .map(|Json(body)| serde_json::from_value(body).map_err(StoreError::from))
            .collect()
    }

    #[instrument(skip(self, id), fields(collection = T::COLLECTION, id = %id), err)]
    async fn get(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let body: Option<Json<JsonValue>> = sqlx::query_scalar(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(T::COLLECTION)
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get", e))?;

        body.map(|Json(body)| serde_json::from_value(body))
            .transpose()
            .map_err(StoreError::from)
    }

    #[instrument(skip(self, record), fields(collection = T::COLLECTION, id = %record.id()), err)]
    async fn put(&self, record: &T) -> Result<(), StoreError> {
        let body = serde_json::to_value(record)?;
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id)
            DO UPDATE SET body = EXCLUDED.body, updated_at = NOW()
            "#,
        )
        .bind(T::COLLECTION)
        .bind(record.id().to_string())
        .bind(Json(body))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("put", e))?;
        Ok(())
    }

    #[instrument(skip(self, id), fields(collection = T::COLLECTION, id = %id), err)]
    async fn delete(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let body: Option<Json<JsonValue>> = sqlx::query_scalar(
            "DELETE FROM documents WHERE collection = $1 AND id = $2 RETURNING body",
        )
        .bind(T::COLLECTION)
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("delete", e))?;

        body.map(|Json(body)| serde_json::from_value(body))
            .transpose()
            .map_err(StoreError::from)
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            StoreError::Database(format!("database error in {}: {}", operation, db_err.message()))
        }
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("connection pool unavailable in {}", operation))
        }
        sqlx::Error::Io(e) => StoreError::Unavailable(format!("io error in {}: {}", operation, e)),
        _ => StoreError::Database(format!("sqlx error in {}: {}", operation, err)),
    }
}
