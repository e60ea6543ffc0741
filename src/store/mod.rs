pub mod memory;
pub mod video;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::video::{NewVideo, VideoModel};

pub use memory::InMemoryVideoStore;
pub use video::PgVideoStore;

/// Persistence for video records.
///
/// Implementations only see validated values: fields are coerced to strings
/// when a [`VideoForm`](crate::models::video::VideoForm) is deserialized,
/// and the required-field checks run in
/// [`VideoForm::validate`](crate::models::video::VideoForm::validate).
#[async_trait]
pub trait VideoStore: std::fmt::Debug + Send + Sync + 'static {
    /// All videos, oldest first.
    async fn list_all(&self) -> anyhow::Result<Vec<VideoModel>>;

    /// Persists a new record under a freshly generated id.
    async fn insert(&self, video: &NewVideo) -> anyhow::Result<VideoModel>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<VideoModel>>;

    /// Overwrites title, description and url.
    /// Returns `false` when no record has this id.
    async fn update(&self, id: Uuid, video: &NewVideo) -> anyhow::Result<bool>;

    /// Returns `true` if a record existed and was removed.
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
}
