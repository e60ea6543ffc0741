use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_string_from_number;
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::errors::{Field, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct VideoModel {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl VideoModel {
    /// Description as shown in views, empty when none was given.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Raw fields of a create or update submission.
///
/// Every field is optional on the wire and defaults to an empty string.
/// Numbers are accepted and stringified, so `title=1` and `{"title": 1}`
/// both end up as `"1"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VideoForm {
    #[serde(default, deserialize_with = "deserialize_string_from_number")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_from_number")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_string_from_number")]
    pub url: String,
}

impl VideoForm {
    /// Checks the required fields and produces the values to persist.
    ///
    /// Errors are reported for every failing field, title first.
    pub fn validate(&self) -> Result<NewVideo, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.title.is_empty() {
            errors.push(Field::Title);
        }
        if self.url.is_empty() {
            errors.push(Field::Url);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let description = if self.description.is_empty() {
            None
        } else {
            Some(self.description.clone())
        };
        Ok(NewVideo {
            title: self.title.clone(),
            description,
            url: self.url.clone(),
        })
    }
}

impl From<&VideoModel> for VideoForm {
    fn from(video: &VideoModel) -> Self {
        Self {
            title: video.title.clone(),
            description: video.description_text().to_string(),
            url: video.url.clone(),
        }
    }
}

/// Validated values, ready to be written by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
}
