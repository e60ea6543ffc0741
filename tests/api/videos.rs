use reqwest::StatusCode;
use uuid::Uuid;

use crate::helpers::{escaped, random_url, spawn_app, video_form};

#[tokio::test]
async fn listing_without_videos_is_empty() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body.contains("video-title"));
    assert!(app.videos().await.is_empty());
}

#[tokio::test]
async fn create_redirects_to_the_new_video() {
    let app = spawn_app().await;

    let response = app
        .post_form("/videos", &video_form("T", "", "U"))
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    let videos = app.videos().await;
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].title, "T");
    assert_eq!(videos[0].url, "U");
    assert_eq!(videos[0].description, None);
    assert_eq!(
        response.location.as_deref(),
        Some(format!("/videos/{}", videos[0].id).as_str())
    );
}

#[tokio::test]
async fn created_video_is_rendered_on_its_page() {
    let app = spawn_app().await;
    let url = random_url();

    let created = app
        .post_form(
            "/videos",
            &video_form("Cool youtube video", "This video is the best!", &url),
        )
        .await;
    let page = app.get(created.location.as_deref().unwrap()).await;

    assert_eq!(page.status, StatusCode::OK);
    let text = &page.body;
    assert!(text.contains("<h1>Cool youtube video</h1>"));
    assert!(text.contains("This video is the best!"));
    assert!(text.contains(&format!(r#"src="{}""#, escaped(&url))));
}

#[tokio::test]
async fn create_without_title_is_rejected() {
    let app = spawn_app().await;
    let url = random_url();

    let response = app
        .post_form("/videos", &[("description", "Without Title"), ("url", url.as_str())])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.videos().await.is_empty());
    let text = &response.body;
    assert!(text.contains(r#"<p class="error" data-field="title">a Title is required</p>"#));
    assert!(!text.contains("a URL is required"));
    assert!(text.contains(">Without Title</textarea>"));
    assert!(text.contains(&format!(r#"value="{}""#, escaped(&url))));
}

#[tokio::test]
async fn create_without_url_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .post_form(
            "/videos",
            &[("title", "Title without URL"), ("description", "Description Without URL")],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.videos().await.is_empty());
    let text = &response.body;
    assert!(text.contains("a URL is required"));
    assert!(text.contains(r#"value="Title without URL""#));
    assert!(text.contains(">Description Without URL</textarea>"));
}

#[tokio::test]
async fn create_with_empty_form_reports_both_fields() {
    let app = spawn_app().await;

    let response = app.post_form("/videos", &video_form("", "", "")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let title_at = response.body.find("a Title is required").unwrap();
    let url_at = response.body.find("a URL is required").unwrap();
    assert!(title_at < url_at);
}

#[tokio::test]
async fn numeric_title_is_stored_as_text() {
    let app = spawn_app().await;

    let response = app
        .post_form("/videos", &video_form("1", "2", "https://example.com/3"))
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(app.videos().await[0].title, "1");
}

#[tokio::test]
async fn listing_shows_every_video() {
    let app = spawn_app().await;
    let first = app.seed_video().await;
    let second = app.seed_video().await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    let text = &response.body;
    assert_eq!(text.matches(r#"class="video-title""#).count(), 2);
    for video in [&first, &second] {
        assert!(text.contains(&format!(r#"href="/videos/{}""#, video.id)));
        assert!(text.contains(&format!(r#"src="{}""#, escaped(&video.url))));
    }
    assert!(text.find(&escaped(&first.url)).unwrap() < text.find(&escaped(&second.url)).unwrap());
}

#[tokio::test]
async fn show_unknown_video_is_not_found() {
    let app = spawn_app().await;

    let response = app.get(&format!("/videos/{}", Uuid::new_v4())).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("This video does not exist"));
}

#[tokio::test]
async fn show_malformed_id_is_not_found() {
    let app = spawn_app().await;

    let response = app.get("/videos/not-a-video").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_form_is_prefilled() {
    let app = spawn_app().await;
    let video = app.seed_video().await;

    let response = app.get(&format!("/videos/{}/edit", video.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    let text = &response.body;
    assert!(text.contains(&format!(r#"action="/videos/{}/updates""#, video.id)));
    assert!(text.contains(r#"value="Cool youtube video""#));
    assert!(text.contains(">This video is the best!</textarea>"));
    assert!(text.contains(&format!(r#"value="{}""#, escaped(&video.url))));
}

#[tokio::test]
async fn edit_unknown_video_is_not_found() {
    let app = spawn_app().await;

    let response = app.get(&format!("/videos/{}/edit", Uuid::new_v4())).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_overwrites_all_fields_and_redirects() {
    let app = spawn_app().await;
    let video = app.seed_video().await;

    let response = app
        .post_form(
            &format!("/videos/{}/updates", video.id),
            &video_form(
                "updatedTitle",
                "updatedDescription",
                "https://www.youtube.com/embed/Yxx9I8V4fjA",
            ),
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(
        response.location.as_deref(),
        Some(format!("/videos/{}", video.id).as_str())
    );
    let videos = app.videos().await;
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, video.id);
    assert_eq!(videos[0].title, "updatedTitle");
    assert_eq!(videos[0].description.as_deref(), Some("updatedDescription"));
    assert_eq!(videos[0].url, "https://www.youtube.com/embed/Yxx9I8V4fjA");
}

#[tokio::test]
async fn update_with_empty_title_leaves_video_untouched() {
    let app = spawn_app().await;
    let video = app.seed_video().await;

    let response = app
        .post_form(
            &format!("/videos/{}/updates", video.id),
            &video_form(
                "",
                "updatedDescription1234",
                "https://www.youtube.com/embed/Yxx9I8V4fjA",
            ),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.videos().await, vec![video.clone()]);
    let text = &response.body;
    assert!(text.contains("a Title is required"));
    assert!(text.contains(r#"id="title-input""#));
    assert!(text.contains(">updatedDescription1234</textarea>"));
    assert!(text.contains(r#"id="url-input""#));
    assert!(text.contains(&format!(r#"action="/videos/{}/updates""#, video.id)));
}

#[tokio::test]
async fn update_with_empty_url_leaves_video_untouched() {
    let app = spawn_app().await;
    let video = app.seed_video().await;

    let response = app
        .post_form(
            &format!("/videos/{}/updates", video.id),
            &video_form("updateTitle", "updatedDescription1234", ""),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("a URL is required"));
    assert_eq!(app.videos().await, vec![video]);
}

#[tokio::test]
async fn update_unknown_video_changes_nothing_and_redirects() {
    let app = spawn_app().await;
    let video = app.seed_video().await;
    let unknown = Uuid::new_v4();

    let response = app
        .post_form(
            &format!("/videos/{unknown}/updates"),
            &video_form("T", "", "U"),
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(
        response.location.as_deref(),
        Some(format!("/videos/{unknown}").as_str())
    );
    assert_eq!(app.videos().await, vec![video]);
}

#[tokio::test]
async fn update_with_malformed_id_validates_the_form_first() {
    let app = spawn_app().await;

    let response = app
        .post_form("/videos/not-a-video/updates", &video_form("", "", ""))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("a Title is required"));
    assert!(response.body.contains("a URL is required"));
    assert!(response.body.contains(r#"action="/videos/not-a-video/updates""#));
}

#[tokio::test]
async fn whitespace_title_is_accepted() {
    let app = spawn_app().await;

    let response = app
        .post_form("/videos", &video_form("   ", "", "U"))
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(app.videos().await[0].title, "   ");
}

#[tokio::test]
async fn delete_removes_video_and_redirects_home() {
    let app = spawn_app().await;
    let video = app.seed_video().await;

    let response = app
        .post(&format!("/videos/{}/deletes", video.id))
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location.as_deref(), Some("/"));
    assert!(app.videos().await.is_empty());
    assert!(!app.get("/").await.body.contains("video-title"));
}

#[tokio::test]
async fn delete_unknown_video_still_redirects_home() {
    let app = spawn_app().await;
    let video = app.seed_video().await;

    for id in [Uuid::new_v4().to_string(), "not-a-video".to_string()] {
        let response = app.post(&format!("/videos/{id}/deletes")).await;

        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location.as_deref(), Some("/"));
    }
    assert_eq!(app.videos().await, vec![video]);
}
