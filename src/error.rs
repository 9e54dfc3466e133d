use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_openai::error::OpenAIError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("message must not be empty")]
    EmptyQuestion,
    #[error("{0}")]
    OpenAi(#[from] OpenAIError),
    #[error("model returned an empty completion")]
    EmptyCompletion,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
    #[error(transparent)]
    Generation(AnswerError),
}

impl From<AnswerError> for ApiError {
    fn from(err: AnswerError) -> Self {
        match err {
            AnswerError::EmptyQuestion => ApiError::InvalidRequest("Message is required".to_string()),
            other => ApiError::Generation(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Scrape(_) | ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::InvalidRequest(message) => json!({ "error": message }),
            ApiError::Scrape(cause) => {
                json!({ "error": "Scraping failed", "details": cause.to_string() })
            }
            ApiError::Generation(cause) => {
                json!({ "error": "AI generation failed", "details": cause.to_string() })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
