use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::Channel;

/// Common SELECT fields for channel queries
const SELECT_CHANNEL: &str = r#"
    SELECT
        channel_id, channel_name,
        subscriber_count, video_count, thumbnail_url,
        is_verified, created_at, last_updated
    FROM youtube_channels
"#;

pub struct ChannelRepository;

impl ChannelRepository {
    /// Get a channel by its YouTube channel ID
    pub async fn get_by_id(
        pool: &SqlitePool,
        channel_id: &str,
    ) -> Result<Option<Channel>, sqlx::Error> {
        let query = format!("{} WHERE channel_id = $1", SELECT_CHANNEL);
        let row = sqlx::query_as::<_, ChannelRow>(&query)
            .bind(channel_id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a new channel. Fails with a unique violation if the ID exists.
    pub async fn create(pool: &SqlitePool, channel: &Channel) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO youtube_channels (
                channel_id, channel_name,
                subscriber_count, video_count, thumbnail_url,
                is_verified, created_at, last_updated
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&channel.channel_id)
        .bind(&channel.title)
        .bind(to_db_count(channel.subscriber_count))
        .bind(to_db_count(channel.video_count))
        .bind(&channel.thumbnail_url)
        .bind(channel.is_verified)
        .bind(channel.created_at)
        .bind(channel.last_updated)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Set the verification flag and `last_updated`, but only if the stored
    /// `last_updated` still equals `expected_last_updated`.
    ///
    /// Returns the row as written, or None if the channel is missing or was
    /// modified since `expected_last_updated` was read.
    pub async fn compare_and_set_verified(
        pool: &SqlitePool,
        channel_id: &str,
        is_verified: bool,
        expected_last_updated: DateTime<Utc>,
        last_updated: DateTime<Utc>,
    ) -> Result<Option<Channel>, sqlx::Error> {
        let row = sqlx::query_as::<_, ChannelRow>(
            r#"
            UPDATE youtube_channels
            SET is_verified = $1, last_updated = $2
            WHERE channel_id = $3 AND last_updated = $4
            RETURNING
                channel_id, channel_name,
                subscriber_count, video_count, thumbnail_url,
                is_verified, created_at, last_updated
            "#,
        )
        .bind(is_verified)
        .bind(last_updated)
        .bind(channel_id)
        .bind(expected_last_updated)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Get all channels that have not been verified yet
    pub async fn get_unverified(pool: &SqlitePool) -> Result<Vec<Channel>, sqlx::Error> {
        let query = format!(
            "{} WHERE is_verified = FALSE ORDER BY created_at ASC, channel_id ASC",
            SELECT_CHANNEL
        );
        let rows = sqlx::query_as::<_, ChannelRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// SQLite integers are signed; counts beyond i64::MAX are clamped.
fn to_db_count(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct ChannelRow {
    channel_id: String,
    channel_name: String,
    subscriber_count: i64,
    video_count: i64,
    thumbnail_url: String,
    is_verified: bool,
    created_at: DateTime<Utc>,
    last_updated: DateTime<Utc>,
}

impl From<ChannelRow> for Channel {
    fn from(row: ChannelRow) -> Self {
        Self {
            channel_id: row.channel_id,
            title: row.channel_name,
            subscriber_count: u64::try_from(row.subscriber_count).unwrap_or_default(),
            video_count: u64::try_from(row.video_count).unwrap_or_default(),
            thumbnail_url: row.thumbnail_url,
            is_verified: row.is_verified,
            created_at: row.created_at,
            last_updated: row.last_updated,
        }
    }
}
