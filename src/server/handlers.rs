//! HTTP handlers for the portfolio API

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::{error, info};

use super::error::ApiError;
use super::AppState;
use crate::mail::ContactMessage;
use crate::projects::ProjectCard;
use crate::stats::PlatformStats;

/// The success envelope every data endpoint shares
#[derive(Serialize)]
struct DataResponse<T: Serialize> {
    success: bool,
    data: T,
}

impl<T: Serialize> DataResponse<T> {
    fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Serialize)]
struct MessageResponse {
    success: bool,
    message: String,
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "folio"
    }))
}

/// GET /api/projects
///
/// Upstream failures degrade to an empty list inside the aggregator, so this
/// endpoint stays 200 whenever the service itself is functioning.
pub async fn get_projects(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let listing = state.aggregator.aggregate().await;
    let cards: Vec<ProjectCard> = listing.projects;
    Ok(HttpResponse::Ok().json(DataResponse::new(cards)))
}

/// GET /api/stats
pub async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let stats: Vec<PlatformStats> = state.stats.gather().await;
    Ok(HttpResponse::Ok().json(DataResponse::new(stats)))
}

/// POST /api/contact
pub async fn post_contact(
    state: web::Data<AppState>,
    body: web::Json<ContactMessage>,
) -> Result<HttpResponse, ApiError> {
    let contact = body
        .into_inner()
        .validated()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    if let Err(e) = state.mailer.send(&contact).await {
        error!(error = %e, "Contact relay failed");
        return Err(ApiError::Relay);
    }

    info!(reply_to = %contact.email, "Contact submission accepted");
    Ok(HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: "Your message has been sent successfully!".to_string(),
    }))
}
