/// Media assembly handlers - the parallel-array add-* operations
///
/// Every handler follows the same contract: validate the body against the
/// operation's schema table, extract the typed request (defaults applied),
/// guard cross-array lengths, then zip one record per index position.
use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::error::{ErrorBody, Result};
use crate::models::{
    AddAudiosRequest, AddCaptionsRequest, AddEffectsRequest, AddImagesRequest, AddVideosRequest,
    AddedAudio, AddedAudiosData, AddedCaption, AddedCaptionsData, AddedEffect, AddedEffectsData,
    AddedImage, AddedImagesData, AddedVideo, AddedVideosData, ApiResponse, AudioProperties,
    BorderStyle, CaptionStyle, EffectProperties, ImageProperties, Point, Spacing, VideoProperties,
};
use crate::schema;
use crate::services::zip;

#[utoipa::path(
    post,
    path = "/api/add-images",
    tag = "media",
    request_body = AddImagesRequest,
    responses(
        (status = 200, description = "One image record per index", body = AddedImagesData),
        (status = 400, description = "Validation failure", body = ErrorBody)
    )
)]
pub async fn add_images(body: web::Json<Value>) -> Result<HttpResponse> {
    schema::validate(&schema::ADD_IMAGES, &body)?;
    let req: AddImagesRequest = serde_json::from_value(body.into_inner())?;

    let added_images = zip::zip_build(
        &[
            ("ids", req.ids.len()),
            ("images", req.images.len()),
            ("timelines", req.timelines.len()),
        ],
        |i| AddedImage {
            id: req.ids[i].clone(),
            image_uri: req.images[i].clone(),
            timeline: req.timelines[i],
            properties: ImageProperties {
                height: req.height,
                width: req.width,
                transform: Point {
                    x: req.transform_x,
                    y: req.transform_y,
                },
                scale: Point {
                    x: req.scale_x,
                    y: req.scale_y,
                },
                animations: req.animations(),
            },
        },
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        AddedImagesData { added_images },
        "Images added successfully",
    )))
}

#[utoipa::path(
    post,
    path = "/api/add-audios",
    tag = "media",
    request_body = AddAudiosRequest,
    responses(
        (status = 200, description = "One audio record per index", body = AddedAudiosData),
        (status = 400, description = "Validation failure", body = ErrorBody)
    )
)]
pub async fn add_audios(body: web::Json<Value>) -> Result<HttpResponse> {
    schema::validate(&schema::ADD_AUDIOS, &body)?;
    let req: AddAudiosRequest = serde_json::from_value(body.into_inner())?;

    let added_audios = zip::zip_build(
        &[
            ("ids", req.ids.len()),
            ("mp3_uris", req.mp3_uris.len()),
            ("timelines", req.timelines.len()),
        ],
        |i| AddedAudio {
            id: req.ids[i].clone(),
            audio_uri: req.mp3_uris[i].clone(),
            timeline: req.timelines[i],
            properties: AudioProperties {
                effect: req.audio_effect.clone(),
                volume: req.volume,
            },
        },
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        AddedAudiosData { added_audios },
        "Audios added successfully",
    )))
}

#[utoipa::path(
    post,
    path = "/api/add-captions",
    tag = "media",
    request_body = AddCaptionsRequest,
    responses(
        (status = 200, description = "One caption record per index", body = AddedCaptionsData),
        (status = 400, description = "Validation failure", body = ErrorBody)
    )
)]
pub async fn add_captions(body: web::Json<Value>) -> Result<HttpResponse> {
    schema::validate(&schema::ADD_CAPTIONS, &body)?;
    let req: AddCaptionsRequest = serde_json::from_value(body.into_inner())?;

    let added_captions = zip::zip_build(
        &[
            ("ids", req.ids.len()),
            ("timelines", req.timelines.len()),
            ("texts", req.texts.len()),
        ],
        |i| AddedCaption {
            id: req.ids[i].clone(),
            text: req.texts[i].clone(),
            timeline: req.timelines[i],
            style: CaptionStyle {
                color: req.text_color.clone(),
                font: req.font.clone(),
                size: req.font_size,
                border: BorderStyle {
                    enabled: req.border,
                    color: req.border.then(|| req.border_color.clone()),
                },
                position: Point {
                    x: req.transform_x,
                    y: req.transform_y,
                },
                alignment: req.alignment.clone(),
                spacing: Spacing {
                    line: req.line_spacing,
                    letter: req.letter_spacing,
                },
            },
            animations: req.animations(),
        },
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        AddedCaptionsData { added_captions },
        "Captions added successfully",
    )))
}

#[utoipa::path(
    post,
    path = "/api/add-effects",
    tag = "media",
    request_body = AddEffectsRequest,
    responses(
        (status = 200, description = "One effect record per index", body = AddedEffectsData),
        (status = 400, description = "Validation failure", body = ErrorBody)
    )
)]
pub async fn add_effects(body: web::Json<Value>) -> Result<HttpResponse> {
    schema::validate(&schema::ADD_EFFECTS, &body)?;
    let req: AddEffectsRequest = serde_json::from_value(body.into_inner())?;

    let added_effects = zip::zip_build(
        &[
            ("ids", req.ids.len()),
            ("timelines", req.timelines.len()),
            ("effects", req.effects.len()),
        ],
        |i| AddedEffect {
            id: req.ids[i].clone(),
            effect_type: req.effects[i].clone(),
            timeline: req.timelines[i],
            properties: EffectProperties::default(),
        },
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        AddedEffectsData { added_effects },
        "Effects added successfully",
    )))
}

#[utoipa::path(
    post,
    path = "/api/add-videos",
    tag = "media",
    request_body = AddVideosRequest,
    responses(
        (status = 200, description = "One video record per index", body = AddedVideosData),
        (status = 400, description = "Validation failure", body = ErrorBody)
    )
)]
pub async fn add_videos(body: web::Json<Value>) -> Result<HttpResponse> {
    schema::validate(&schema::ADD_VIDEOS, &body)?;
    let req: AddVideosRequest = serde_json::from_value(body.into_inner())?;

    let added_videos = zip::zip_build(
        &[
            ("ids", req.ids.len()),
            ("timelines", req.timelines.len()),
            ("video_uris", req.video_uris.len()),
        ],
        |i| AddedVideo {
            id: req.ids[i].clone(),
            video_uri: req.video_uris[i].clone(),
            timeline: req.timelines[i],
            properties: VideoProperties {
                volume: req.volume,
                scale: Point {
                    x: req.scale_x,
                    y: req.scale_y,
                },
                transform: Point {
                    x: req.transform_x,
                    y: req.transform_y,
                },
            },
        },
    )?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        AddedVideosData { added_videos },
        "Videos added successfully",
    )))
}
