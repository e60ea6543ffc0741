use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::{
    errors::VideoError,
    models::video::{VideoForm, VideoModel},
    store::VideoStore,
};

/// Video operations as seen by the web layer.
///
/// Submissions are normalized and validated here before any store call,
/// so a store never receives a record without a title or url.
#[derive(Clone, Debug)]
pub struct VideoService {
    store: Arc<dyn VideoStore>,
}

impl VideoService {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self { store }
    }

    #[instrument(name = "Service: List videos", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<VideoModel>, VideoError> {
        Ok(self.store.list_all().await?)
    }

    #[instrument(name = "Service: Create video", skip(self, form))]
    pub async fn create(&self, form: &VideoForm) -> Result<VideoModel, VideoError> {
        let video = form.validate().map_err(|errors| {
            tracing::warn!("Rejected video submission: {}", errors);
            VideoError::Validation(errors)
        })?;

        let created = self.store.insert(&video).await?;
        tracing::info!(video_id = %created.id, "Video created");
        Ok(created)
    }

    #[instrument(name = "Service: Get video", skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<VideoModel, VideoError> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("Video was not found");
            VideoError::NotFound
        })
    }

    /// Validates `form`, then overwrites the video stored under `video_id`.
    ///
    /// The id is only looked at once the form is valid. An id that matches
    /// no record, including one that is not a UUID, leaves the store as it
    /// was and still succeeds.
    #[instrument(name = "Service: Update video", skip(self, form))]
    pub async fn update(&self, video_id: &str, form: &VideoForm) -> Result<(), VideoError> {
        let video = form.validate().map_err(|errors| {
            tracing::warn!("Rejected video update: {}", errors);
            VideoError::Validation(errors)
        })?;

        let Ok(id) = Uuid::parse_str(video_id) else {
            tracing::warn!("Malformed video id, nothing to update");
            return Ok(());
        };
        if self.store.update(id, &video).await? {
            tracing::info!("Video updated");
        } else {
            tracing::warn!("Video to update was not found");
        }
        Ok(())
    }

    #[instrument(name = "Service: Delete video", skip(self))]
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), VideoError> {
        if self.store.delete_by_id(id).await? {
            tracing::info!("Video deleted");
        } else {
            tracing::info!("Nothing to delete");
        }
        Ok(())
    }
}
