/// Category model and database operations
///
/// Categories group tasks. Exactly one well-known category, "General", is
/// lazily created on first use and attached to new tasks as a default.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE categories (
///     id SERIAL PRIMARY KEY,
///     name VARCHAR(255) NOT NULL UNIQUE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Name of the default category ensured on first task creation
pub const DEFAULT_CATEGORY_NAME: &str = "General";

/// Category model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Unique category ID
    pub id: i32,

    /// Category name, unique across all categories
    pub name: String,
}

impl Category {
    /// Fetches or creates the "General" default category
    ///
    /// Upserts on the unique name so concurrent callers converge on the
    /// same row. Callers attaching the default to a new task treat a
    /// failure here as "no category" rather than propagating it.
    pub async fn ensure_default(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
        )
        .bind(DEFAULT_CATEGORY_NAME)
        .fetch_one(pool)
        .await?;

        Ok(category)
    }
}
