use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use recruitment_adapters::config::Settings;

/// Creates the single process-wide connection pool.
///
/// Call once at startup and clone the handle into every component that needs
/// storage access; the clones all share one pool.
pub async fn configure_postgres(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .connect(&settings.database_url)
        .await
}
