use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::instrument;
use uuid::Uuid;

use crate::models::video::{NewVideo, VideoModel};
use crate::store::VideoStore;

#[derive(Clone, Debug)]
pub struct PgVideoStore {
    pg_pool: Pool<Postgres>,
}

impl PgVideoStore {
    pub fn new(pg_pool: Pool<Postgres>) -> Self {
        Self { pg_pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    #[instrument(name = "Fetching all videos from database", skip(self))]
    async fn list_all(&self) -> anyhow::Result<Vec<VideoModel>> {
        let rows = sqlx::query_as::<_, VideoModel>(
            r#"SELECT id, title, description, url, created_at
            FROM videos
            ORDER BY created_at, id"#,
        )
        .fetch_all(&self.pg_pool)
        .await?;
        Ok(rows)
    }

    #[instrument(name = "Saving new video to database", skip(self, video))]
    async fn insert(&self, video: &NewVideo) -> anyhow::Result<VideoModel> {
        let row = sqlx::query_as::<_, VideoModel>(
            r#"INSERT INTO videos (id, title, description, url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, url, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.url)
        .fetch_one(&self.pg_pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(row)
    }

    #[instrument(name = "Fetching video by id from database", skip(self))]
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<VideoModel>> {
        let row = sqlx::query_as::<_, VideoModel>(
            r#"SELECT id, title, description, url, created_at FROM videos WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pg_pool)
        .await?;
        Ok(row)
    }

    #[instrument(name = "Updating video in database", skip(self, video))]
    async fn update(&self, id: Uuid, video: &NewVideo) -> anyhow::Result<bool> {
        let result =
            sqlx::query("UPDATE videos SET title = $2, description = $3, url = $4 WHERE id = $1")
                .bind(id)
                .bind(&video.title)
                .bind(&video.description)
                .bind(&video.url)
                .execute(&self.pg_pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to execute query: {:?}", e);
                    e
                })?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(name = "Deleting video from database", skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pg_pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
