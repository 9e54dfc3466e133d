use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{domain::BusinessProfile, error::ApiError, services::AnswerEngine};

#[derive(Deserialize)]
struct ChatRequest {
    message: Option<String>,
    business_data: Option<BusinessProfile>,
}

#[derive(Serialize)]
struct ChatResponse {
    role: &'static str,
    message: String,
    cached: bool,
}

#[post("/chat")]
async fn chat(
    engine: web::Data<AnswerEngine>,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    let profile = body
        .business_data
        .ok_or_else(|| ApiError::InvalidRequest("Business data is required".to_string()))?;
    let message = body.message.unwrap_or_default();

    let answer = match engine.answer(&profile, &message).await {
        Ok(answer) => answer,
        Err(e) => {
            log::error!("Failed to answer question for {}: {}", profile.name, e);
            return Err(e.into());
        }
    };

    Ok(HttpResponse::Ok().json(ChatResponse {
        role: "assistant",
        message: answer.message,
        cached: answer.cached,
    }))
}
