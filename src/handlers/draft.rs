/// Draft creation and utility operation handlers
///
/// These three operations do not zip parallel arrays: create-draft mints a
/// fresh identifier, str-array tokenizes a comma-separated string, and
/// audios-timelines hands out placeholder timeline slots.
use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ErrorBody, Result};
use crate::models::{
    ApiResponse, AudiosTimelinesRequest, CreateDraftRequest, DraftData, StrArrayData,
    StrArrayRequest, TimelinesData,
};
use crate::schema;

#[utoipa::path(
    post,
    path = "/api/create-draft",
    tag = "drafts",
    request_body = CreateDraftRequest,
    responses(
        (status = 200, description = "Draft created", body = DraftData),
        (status = 400, description = "Validation failure", body = ErrorBody)
    )
)]
pub async fn create_draft(body: web::Json<Value>) -> Result<HttpResponse> {
    schema::validate(&schema::CREATE_DRAFT, &body)?;
    let req: CreateDraftRequest = serde_json::from_value(body.into_inner())?;

    // Nothing is stored; the id only has to be fresh and collision-resistant.
    let draft = DraftData {
        ids: vec![Uuid::new_v4().to_string()],
        height: req.height as i64,
        width: req.width as i64,
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status: "created".to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(draft, "Draft created successfully")))
}

#[utoipa::path(
    post,
    path = "/api/str-array",
    tag = "drafts",
    request_body = StrArrayRequest,
    responses(
        (status = 200, description = "String split into tokens", body = StrArrayData),
        (status = 400, description = "Validation failure", body = ErrorBody)
    )
)]
pub async fn str_array(body: web::Json<Value>) -> Result<HttpResponse> {
    schema::validate(&schema::STR_ARRAY, &body)?;
    let req: StrArrayRequest = serde_json::from_value(body.into_inner())?;

    let output = split_tokens(&req.input);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        StrArrayData {
            input: req.input,
            output,
        },
        "String converted to array successfully",
    )))
}

#[utoipa::path(
    post,
    path = "/api/audios-timelines",
    tag = "drafts",
    request_body = AudiosTimelinesRequest,
    responses(
        (status = 200, description = "One timeline slot per id", body = TimelinesData),
        (status = 400, description = "Validation failure", body = ErrorBody)
    )
)]
pub async fn audios_timelines(body: web::Json<Value>) -> Result<HttpResponse> {
    schema::validate(&schema::AUDIOS_TIMELINES, &body)?;
    let req: AudiosTimelinesRequest = serde_json::from_value(body.into_inner())?;

    // Placeholder allocator: one pseudo-random slot per id, no uniqueness
    // or determinism promised.
    let mut rng = rand::thread_rng();
    let timelines: Vec<u32> = req.ids.iter().map(|_| rng.gen_range(0..1000)).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        TimelinesData {
            ids: req.ids,
            timelines,
        },
        "Timelines generated successfully",
    )))
}

/// Split a comma-separated string into trimmed, non-empty tokens
fn split_tokens(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
