use std::time::Instant;

use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

use crate::{
    error::ApiError,
    services::{extract_profile, normalize_url, PageFetcher},
};

#[derive(Deserialize)]
struct ScrapeRequest {
    url: Option<String>,
}

#[post("/scrape")]
async fn scrape(
    fetcher: web::Data<PageFetcher>,
    body: web::Json<ScrapeRequest>,
) -> Result<HttpResponse, ApiError> {
    let url = match body.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => normalize_url(url),
        _ => return Err(ApiError::InvalidRequest("URL is required".to_string())),
    };

    let started = Instant::now();
    let html = match fetcher.fetch(&url).await {
        Ok(html) => html,
        Err(e) => {
            log::error!("Failed to scrape {}: {}", url, e);
            return Err(e.into());
        }
    };

    let profile = extract_profile(&html, started.elapsed().as_secs_f64());
    log::info!("Scraped {} in {}s", url, profile.scrape_time);

    Ok(HttpResponse::Ok().json(profile))
}
