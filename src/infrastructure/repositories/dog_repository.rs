//! Dog Repository Implementation
//!
//! PostgreSQL implementation of the DogRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Instant;

use crate::domain::{Dog, DogRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Database row representation matching the dogs table schema.
#[derive(Debug, sqlx::FromRow)]
struct DogRow {
    name: String,
    color: String,
    tail_length: i32,
    weight: i32,
}

impl From<DogRow> for Dog {
    fn from(row: DogRow) -> Self {
        Dog {
            name: row.name,
            color: row.color,
            tail_length: row.tail_length,
            weight: row.weight,
        }
    }
}

/// PostgreSQL dog repository implementation.
///
/// Name uniqueness is enforced by the primary key, so a racing duplicate
/// insert fails inside the database rather than in application code.
#[derive(Clone)]
pub struct PgDogRepository {
    pool: PgPool,
}

impl PgDogRepository {
    /// Create a new PgDogRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogRepository for PgDogRepository {
    async fn list_all(&self) -> Result<Vec<Dog>, AppError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, DogRow>(
            r#"
            SELECT name, color, tail_length, weight
            FROM dogs
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        metrics::record_db_query("select", "dogs", start.elapsed().as_secs_f64());

        Ok(rows.into_iter().map(Dog::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let start = Instant::now();
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dogs")
            .fetch_one(&self.pool)
            .await?;
        metrics::record_db_query("count", "dogs", start.elapsed().as_secs_f64());

        Ok(count)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Dog>, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, DogRow>(
            r#"
            SELECT name, color, tail_length, weight
            FROM dogs
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("select", "dogs", start.elapsed().as_secs_f64());

        Ok(row.map(Dog::from))
    }

    async fn insert(&self, dog: &Dog) -> Result<Dog, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, DogRow>(
            r#"
            INSERT INTO dogs (name, color, tail_length, weight)
            VALUES ($1, $2, $3, $4)
            RETURNING name, color, tail_length, weight
            "#,
        )
        .bind(&dog.name)
        .bind(&dog.color)
        .bind(dog.tail_length)
        .bind(dog.weight)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(format!("Dog with name '{}' already exists", dog.name))
            }
            _ => AppError::Database(e),
        })?;
        metrics::record_db_query("insert", "dogs", start.elapsed().as_secs_f64());

        Ok(row.into())
    }
}
