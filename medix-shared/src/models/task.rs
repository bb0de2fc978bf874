/// Task model and database operations
///
/// Tasks always belong to exactly one user. The update path is a partial
/// update: only fields present in the input are written, and `description`
/// and `category_id` distinguish "absent" (leave unchanged) from an
/// explicit null (clear the column).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id SERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     description TEXT,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     user_id INTEGER NOT NULL REFERENCES users(id),
///     category_id INTEGER REFERENCES categories(id)
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use medix_shared::models::task::{CreateTask, Task, UpdateTask};
/// use medix_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     title: "Buy milk".to_string(),
///     description: None,
///     user_id: 1,
///     category_id: None,
/// }).await?;
///
/// // Mark it done without touching any other field
/// let task = Task::update(&pool, task.id, UpdateTask {
///     completed: Some(true),
///     ..Default::default()
/// }).await?;
/// assert!(task.completed);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task model representing a single to-do item owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task ID (server-assigned)
    pub id: i32,

    /// Task title
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Whether the task is done (defaults to false on creation)
    pub completed: bool,

    /// Owning user
    pub user_id: i32,

    /// Optional category; None when the default-category lookup failed
    /// at creation time or the field was cleared
    pub category_id: Option<i32>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title (validated non-empty at the API boundary)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Owning user
    pub user_id: i32,

    /// Category to attach, if any
    pub category_id: Option<i32>,
}

/// Input for partially updating a task
///
/// Outer `None` means the field was absent from the request and stays
/// unchanged. For `description` and `category_id` the inner option carries
/// an explicit null, so `Some(None)` clears the column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description; `Some(None)` clears it
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,

    /// New completion flag (strictly boolean on the wire)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    /// New category; `Some(None)` detaches the task from its category
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub category_id: Option<Option<i32>>,
}

impl UpdateTask {
    /// Returns true when no field is present, i.e. the empty subset
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.category_id.is_none()
    }
}

impl Task {
    /// Creates a new task for a user
    ///
    /// `completed` is left to its schema default (false).
    ///
    /// # Errors
    ///
    /// Returns an error if the owning user does not exist (foreign key
    /// violation) or the database operation fails.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, user_id, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, completed, user_id, category_id
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.user_id)
        .bind(data.category_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID, erroring when it does not exist
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed, user_id, category_id
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists tasks for a user ordered by id descending (newest first)
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed, user_id, category_id
            FROM tasks
            WHERE user_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Partially updates a task
    ///
    /// Builds the UPDATE statement from only the fields present in `data`;
    /// absent fields keep their current value. The empty subset performs
    /// no write and returns the current row.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error::RowNotFound` when the task does not exist,
    /// or any other error from the database operation.
    pub async fn update(pool: &PgPool, id: i32, data: UpdateTask) -> Result<Self, sqlx::Error> {
        if data.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        // Build the SET list dynamically from the fields that are present
        let mut sets = Vec::new();
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            sets.push(format!("title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            sets.push(format!("description = ${}", bind_count));
        }
        if data.completed.is_some() {
            bind_count += 1;
            sets.push(format!("completed = ${}", bind_count));
        }
        if data.category_id.is_some() {
            bind_count += 1;
            sets.push(format!("category_id = ${}", bind_count));
        }

        let query = format!(
            "UPDATE tasks SET {} WHERE id = $1 \
             RETURNING id, title, description, completed, user_id, category_id",
            sets.join(", ")
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            // Inner None binds SQL NULL, clearing the column
            q = q.bind(description);
        }
        if let Some(completed) = data.completed {
            q = q.bind(completed);
        }
        if let Some(category_id) = data.category_id {
            q = q.bind(category_id);
        }

        let task = q.fetch_one(pool).await?;

        Ok(task)
    }

    /// Deletes a task by ID
    ///
    /// Returns true if a row was deleted, false when the id did not exist.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
