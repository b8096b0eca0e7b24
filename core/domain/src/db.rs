use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Schema for the channel catalog. `channel_id` is the primary key, so a
/// second insert for the same ID fails at the storage level.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS youtube_channels (
        channel_id TEXT PRIMARY KEY NOT NULL,
        channel_name TEXT NOT NULL,
        subscriber_count INTEGER NOT NULL DEFAULT 0,
        video_count INTEGER NOT NULL DEFAULT 0,
        thumbnail_url TEXT NOT NULL DEFAULT '',
        is_verified BOOLEAN NOT NULL DEFAULT FALSE,
        created_at DATETIME NOT NULL,
        last_updated DATETIME NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_youtube_channels_is_verified ON youtube_channels (is_verified)",
];

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Run migrations
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Database schema ensured");
    Ok(())
}
