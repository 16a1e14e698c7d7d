/// HTTP handlers for draft-service
///
/// Operation handlers live in `draft` (draft creation and utility stubs) and
/// `media` (the parallel-array add-* operations). This module owns the route
/// table plus the surrounding health/index/not-found endpoints.
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::{AppError, Result};

pub mod draft;
pub mod media;

pub use draft::{audios_timelines, create_draft, str_array};
pub use media::{add_audios, add_captions, add_effects, add_images, add_videos};

/// Mount every operation route under the caller's scope
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/create-draft", web::post().to(create_draft))
        .route("/str-array", web::post().to(str_array))
        .route("/audios-timelines", web::post().to(audios_timelines))
        .route("/add-images", web::post().to(add_images))
        .route("/add-audios", web::post().to(add_audios))
        .route("/add-captions", web::post().to(add_captions))
        .route("/add-effects", web::post().to(add_effects))
        .route("/add-videos", web::post().to(add_videos));
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "draft-service is running",
    }))
}

/// Service index: name, version, and the available endpoints
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "name": "draft-service",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Video editing draft assembly API",
        "endpoints": [
            "/api/create-draft",
            "/api/str-array",
            "/api/audios-timelines",
            "/api/add-images",
            "/api/add-audios",
            "/api/add-captions",
            "/api/add-effects",
            "/api/add-videos",
        ],
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> Result<HttpResponse> {
    Err(AppError::NotFound(
        "the requested endpoint does not exist".to_string(),
    ))
}
