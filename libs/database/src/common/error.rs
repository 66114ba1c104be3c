/// Errors raised by connection management and health checks.
///
/// Query errors inside repositories stay as `sea_orm::DbErr`; this type only
/// covers the plumbing around the pool.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}
