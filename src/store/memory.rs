use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::video::{NewVideo, VideoModel};
use crate::store::VideoStore;

/// Process-local store keeping videos in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryVideoStore {
    videos: RwLock<Vec<VideoModel>>,
}

impl InMemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn list_all(&self) -> anyhow::Result<Vec<VideoModel>> {
        Ok(self.videos.read().await.clone())
    }

    async fn insert(&self, video: &NewVideo) -> anyhow::Result<VideoModel> {
        let record = VideoModel {
            id: Uuid::new_v4(),
            title: video.title.clone(),
            description: video.description.clone(),
            url: video.url.clone(),
            created_at: chrono::Utc::now(),
        };
        self.videos.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<VideoModel>> {
        let videos = self.videos.read().await;
        Ok(videos.iter().find(|v| v.id == id).cloned())
    }

    async fn update(&self, id: Uuid, video: &NewVideo) -> anyhow::Result<bool> {
        let mut videos = self.videos.write().await;
        match videos.iter_mut().find(|v| v.id == id) {
            Some(existing) => {
                existing.title = video.title.clone();
                existing.description = video.description.clone();
                existing.url = video.url.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut videos = self.videos.write().await;
        let before = videos.len();
        videos.retain(|v| v.id != id);
        Ok(videos.len() != before)
    }
}
