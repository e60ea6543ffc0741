use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    errors::{FieldError, VideoError},
    models::video::{VideoForm, VideoModel},
    routes::{HtmlTemplate, found},
    startup::AppState,
};

#[derive(Template)]
#[template(path = "videos/index.html")]
struct IndexTemplate {
    videos: Vec<VideoModel>,
}

#[derive(Template)]
#[template(path = "videos/create.html")]
struct CreateTemplate {
    form: VideoForm,
    errors: Vec<FieldError>,
}

#[derive(Template)]
#[template(path = "videos/show.html")]
struct ShowTemplate {
    video: VideoModel,
}

#[derive(Template)]
#[template(path = "videos/edit.html")]
struct EditTemplate {
    id: String,
    form: VideoForm,
    errors: Vec<FieldError>,
}

/// Ids are opaque in URLs; anything that is not one of ours is unknown.
fn parse_video_id(raw: &str) -> Result<Uuid, VideoError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!(video_id = %raw, "Malformed video id");
        VideoError::NotFound
    })
}

#[instrument(name = "Web: List videos", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, VideoError> {
    let videos = state.video_service.list_all().await?;
    Ok(HtmlTemplate(IndexTemplate { videos }))
}

pub async fn create_page() -> impl IntoResponse {
    HtmlTemplate(CreateTemplate {
        form: VideoForm::default(),
        errors: Vec::new(),
    })
}

#[instrument(name = "Web: Create video POST", skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<VideoForm>,
) -> Result<Response, VideoError> {
    match state.video_service.create(&form).await {
        Ok(video) => Ok(found(&format!("/videos/{}", video.id))),
        Err(VideoError::Validation(errors)) => Ok((
            StatusCode::BAD_REQUEST,
            HtmlTemplate(CreateTemplate {
                form,
                errors: errors.into_inner(),
            }),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

#[instrument(name = "Web: Show video", skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<impl IntoResponse, VideoError> {
    let id = parse_video_id(&video_id)?;
    let video = state.video_service.get_by_id(id).await?;
    Ok(HtmlTemplate(ShowTemplate { video }))
}

#[instrument(name = "Web: Edit video", skip(state))]
pub async fn edit_page(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<impl IntoResponse, VideoError> {
    let id = parse_video_id(&video_id)?;
    let video = state.video_service.get_by_id(id).await?;
    Ok(HtmlTemplate(EditTemplate {
        id: id.to_string(),
        form: VideoForm::from(&video),
        errors: Vec::new(),
    }))
}

#[instrument(name = "Web: Update video POST", skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Form(form): Form<VideoForm>,
) -> Result<Response, VideoError> {
    match state.video_service.update(&video_id, &form).await {
        Ok(()) => Ok(found(&format!("/videos/{video_id}"))),
        Err(VideoError::Validation(errors)) => Ok((
            StatusCode::BAD_REQUEST,
            HtmlTemplate(EditTemplate {
                id: video_id,
                form,
                errors: errors.into_inner(),
            }),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

#[instrument(name = "Web: Delete video POST", skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Response, VideoError> {
    // An id that cannot exist is already deleted.
    if let Ok(id) = Uuid::parse_str(&video_id) {
        state.video_service.delete_by_id(id).await?;
    }
    Ok(found("/"))
}
