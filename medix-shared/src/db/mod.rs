/// Database layer
///
/// This module provides connection pooling for the single process-wide
/// PostgreSQL pool. Schema ownership lives with the external collaborator:
/// no migrations are run here and every query is runtime-checked with bind
/// parameters.
///
/// # Modules
///
/// - `pool`: connection pool creation, health check, and shutdown

pub mod pool;
