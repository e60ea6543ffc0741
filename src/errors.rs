use std::fmt::{self, Display};

use askama::Template;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::routes::HtmlTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Url,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Url => "url",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            Field::Title => "a Title is required",
            Field::Url => "a URL is required",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Field-level problems found in a submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: Field) {
        self.0.push(FieldError {
            field,
            message: field.required_message(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.message).collect()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("Invalid video: {0}")]
    Validation(ValidationErrors),

    #[error("Video not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: &'static str,
}

impl VideoError {
    pub fn status(&self) -> StatusCode {
        match self {
            VideoError::Validation(_) => StatusCode::BAD_REQUEST,
            VideoError::NotFound => StatusCode::NOT_FOUND,
            VideoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for VideoError {
    fn into_response(self) -> Response {
        let message = match &self {
            VideoError::Validation(_) => "The submitted video is invalid",
            VideoError::NotFound => "This video does not exist",
            VideoError::Store(e) => {
                tracing::error!("Store failure: {:?}", e);
                "An unexpected error occurred"
            }
        };
        let status = self.status();

        (
            status,
            HtmlTemplate(ErrorTemplate {
                status: status.as_u16(),
                message,
            }),
        )
            .into_response()
    }
}
