/// Application store models
///
/// This module contains the read-write models of the application store and
/// their database operations.
///
/// # Models
///
/// - `user`: user accounts (created and listed, never mutated here)
/// - `task`: per-user tasks with partial update and delete
/// - `category`: task categories with the lazily-ensured "General" default
///
/// # Example
///
/// ```no_run
/// use medix_shared::models::user::{CreateUser, User};
/// use medix_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     name: "Ana".to_string(),
///     email: "ana@example.com".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod category;
pub mod task;
pub mod user;
