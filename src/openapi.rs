/// OpenAPI documentation for draft-service
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;
use crate::models::{
    AddAudiosRequest, AddCaptionsRequest, AddEffectsRequest, AddImagesRequest, AddVideosRequest,
    AddedAudio, AddedAudiosData, AddedCaption, AddedCaptionsData, AddedEffect, AddedEffectsData,
    AddedImage, AddedImagesData, AddedVideo, AddedVideosData, AnimationSpec, Animations,
    AudioProperties, AudiosTimelinesRequest, BorderStyle, CaptionStyle, CreateDraftRequest,
    DraftData, EffectProperties, ImageProperties, Point, Spacing, StrArrayData, StrArrayRequest,
    TimelinesData, VideoProperties,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Draft Service API",
        version = "1.0.0",
        description = "Video editing draft assembly API. Supports draft creation and adding images, audios, captions, effects, and videos from parallel input arrays."
    ),
    paths(
        handlers::draft::create_draft,
        handlers::draft::str_array,
        handlers::draft::audios_timelines,
        handlers::media::add_images,
        handlers::media::add_audios,
        handlers::media::add_captions,
        handlers::media::add_effects,
        handlers::media::add_videos,
    ),
    components(schemas(
        CreateDraftRequest,
        StrArrayRequest,
        AudiosTimelinesRequest,
        AddImagesRequest,
        AddAudiosRequest,
        AddCaptionsRequest,
        AddEffectsRequest,
        AddVideosRequest,
        DraftData,
        StrArrayData,
        TimelinesData,
        AddedImagesData,
        AddedImage,
        ImageProperties,
        AddedAudiosData,
        AddedAudio,
        AudioProperties,
        AddedCaptionsData,
        AddedCaption,
        CaptionStyle,
        BorderStyle,
        Spacing,
        AddedEffectsData,
        AddedEffect,
        EffectProperties,
        AddedVideosData,
        AddedVideo,
        VideoProperties,
        Point,
        Animations,
        AnimationSpec,
        ErrorBody,
    )),
    tags(
        (name = "drafts", description = "Draft creation and utility operations"),
        (name = "media", description = "Parallel-array media assembly operations"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn title() -> &'static str {
        "Draft Service"
    }

    pub fn openapi_json_path() -> &'static str {
        "/openapi.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_operation_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/create-draft",
            "/api/str-array",
            "/api/audios-timelines",
            "/api/add-images",
            "/api/add-audios",
            "/api/add-captions",
            "/api/add-effects",
            "/api/add-videos",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
