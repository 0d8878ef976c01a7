//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresPuppyService`, backed by the `puppies` table via
//! `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! puppy-rescue = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Connections
//!
//! Every operation runs a single statement against the pool, which acquires
//! a connection for that statement and returns it when the statement
//! completes (or fails). Nothing holds a connection between requests.
//!
//! # Errors
//!
//! Constraint and data violations reported by the database (SQLSTATE classes
//! `22` and `23`: string too long, numeric overflow, not-null, check) become
//! `ValidationFailure`. Every other failure, including pool timeouts and
//! refused connections, becomes `StoreUnavailable`.

use crate::core::error::{PuppyError, PuppyResult};
use crate::core::puppy::{NewPuppy, Puppy, PuppyChanges};
use crate::core::service::PuppyService;
use async_trait::async_trait;
use sqlx::PgPool;

const PUPPY_COLUMNS: &str = "id, name, breed, weight_lbs, arrival_date, vaccinated";

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Create the `puppies` table if it does not exist (idempotent).
///
/// No indexes are created beyond the primary key. Safe to call on every
/// startup.
pub async fn ensure_schema(pool: &PgPool) -> PuppyResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS puppies (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            breed VARCHAR(100) NULL,
            weight_lbs NUMERIC(5, 2) NULL,
            arrival_date TIMESTAMPTZ NULL DEFAULT NOW(),
            vaccinated BOOLEAN NOT NULL DEFAULT FALSE
        )",
    )
    .execute(pool)
    .await
    .map_err(classify)?;

    Ok(())
}

/// Map a sqlx failure onto the store's error kinds.
fn classify(err: sqlx::Error) -> PuppyError {
    if let sqlx::Error::Database(db) = &err {
        if let Some(code) = db.code() {
            if code.starts_with("22") || code.starts_with("23") {
                return PuppyError::ValidationFailure(db.message().to_string());
            }
        }
    }
    PuppyError::StoreUnavailable(err.to_string())
}

// ---------------------------------------------------------------------------
// PostgresPuppyService
// ---------------------------------------------------------------------------

/// Puppy storage service backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// use sqlx::postgres::PgPoolOptions;
/// use puppy::storage::PostgresPuppyService;
///
/// let pool = PgPoolOptions::new().max_connections(5).connect_lazy(&url)?;
/// let service = PostgresPuppyService::new(pool);
/// let puppy = service.create(NewPuppy::named("Fido")).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresPuppyService {
    pool: PgPool,
}

impl PostgresPuppyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PuppyService for PostgresPuppyService {
    async fn list(&self) -> PuppyResult<Vec<Puppy>> {
        let sql = format!("SELECT {} FROM puppies ORDER BY id", PUPPY_COLUMNS);
        sqlx::query_as::<_, Puppy>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(classify)
    }

    async fn get(&self, id: i32) -> PuppyResult<Option<Puppy>> {
        let sql = format!("SELECT {} FROM puppies WHERE id = $1", PUPPY_COLUMNS);
        sqlx::query_as::<_, Puppy>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)
    }

    async fn create(&self, puppy: NewPuppy) -> PuppyResult<Puppy> {
        puppy.check()?;

        let sql = format!(
            "INSERT INTO puppies (name, breed, weight_lbs, arrival_date, vaccinated) \
             VALUES ($1, $2, $3, COALESCE($4, NOW()), $5) \
             RETURNING {}",
            PUPPY_COLUMNS
        );
        sqlx::query_as::<_, Puppy>(&sql)
            .bind(&puppy.name)
            .bind(&puppy.breed)
            .bind(puppy.weight_lbs)
            .bind(puppy.arrival_date)
            .bind(puppy.vaccinated.unwrap_or(false))
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }

    async fn update(&self, id: i32, changes: PuppyChanges) -> PuppyResult<Option<Puppy>> {
        // An absent id reports `None` even when the changes are invalid.
        if let Err(rejected) = changes.check() {
            let row = sqlx::query("SELECT 1 FROM puppies WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(classify)?;
            return match row {
                Some(_) => Err(rejected),
                None => Ok(None),
            };
        }

        // Nullable columns take a "present" flag next to the value so an
        // explicit null can clear them while an absent field is left alone.
        let sql = format!(
            "UPDATE puppies SET \
                name = COALESCE($2, name), \
                breed = CASE WHEN $3 THEN $4 ELSE breed END, \
                weight_lbs = CASE WHEN $5 THEN $6 ELSE weight_lbs END, \
                arrival_date = CASE WHEN $7 THEN $8 ELSE arrival_date END, \
                vaccinated = COALESCE($9, vaccinated) \
             WHERE id = $1 \
             RETURNING {}",
            PUPPY_COLUMNS
        );
        sqlx::query_as::<_, Puppy>(&sql)
            .bind(id)
            .bind(changes.name)
            .bind(changes.breed.is_some())
            .bind(changes.breed.flatten())
            .bind(changes.weight_lbs.is_some())
            .bind(changes.weight_lbs.flatten())
            .bind(changes.arrival_date.is_some())
            .bind(changes.arrival_date.flatten())
            .bind(changes.vaccinated)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)
    }

    async fn delete(&self, id: i32) -> PuppyResult<bool> {
        let result = sqlx::query("DELETE FROM puppies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(result.rows_affected() > 0)
    }
}
