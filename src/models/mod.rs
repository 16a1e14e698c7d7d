/// Data models for draft-service
///
/// This module defines structures for:
/// - Request DTOs: one per operation, carrying the optional-field defaults
/// - Response records: the nested output units built by zipping parallel arrays
/// - ApiResponse: the uniform success envelope
///
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ========================================
// Response envelope
// ========================================

/// Uniform success envelope for every operation
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: &str) -> Self {
        Self {
            success: true,
            data,
            message: message.to_string(),
        }
    }
}

// ========================================
// Shared nested shapes
// ========================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnimationSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Animations {
    #[serde(rename = "in")]
    pub enter: AnimationSpec,
    #[serde(rename = "out")]
    pub exit: AnimationSpec,
}

// ========================================
// Optional-field defaults
// ========================================

fn default_image_height() -> f64 {
    1080.0
}

fn default_image_width() -> f64 {
    1920.0
}

fn default_scale() -> f64 {
    1.0
}

fn default_volume() -> f64 {
    1.0
}

fn default_animation() -> String {
    "none".to_string()
}

fn default_audio_effect() -> String {
    "none".to_string()
}

fn default_text_color() -> String {
    "#FFFFFF".to_string()
}

fn default_font() -> String {
    "Arial".to_string()
}

fn default_font_size() -> f64 {
    24.0
}

fn default_border_color() -> String {
    "#000000".to_string()
}

fn default_alignment() -> String {
    "center".to_string()
}

fn default_line_spacing() -> f64 {
    1.2
}

// ========================================
// Requests
// ========================================

/// Fields stay f64 here because the schema, like the upstream clients,
/// accepts whole-number floats for integer fields; the handler echoes
/// them back as integers.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDraftRequest {
    #[schema(value_type = i64)]
    pub height: f64,
    #[schema(value_type = i64)]
    pub width: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StrArrayRequest {
    pub input: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AudiosTimelinesRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddImagesRequest {
    pub ids: Vec<String>,
    pub images: Vec<String>,
    pub timelines: Vec<f64>,
    #[serde(default = "default_image_height")]
    pub height: f64,
    #[serde(default = "default_image_width")]
    pub width: f64,
    #[serde(default)]
    pub transform_x: f64,
    #[serde(default)]
    pub transform_y: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
    #[serde(default = "default_animation")]
    pub in_animation: String,
    #[serde(default)]
    pub in_animation_duration: f64,
    #[serde(default = "default_animation")]
    pub out_animation: String,
    #[serde(default)]
    pub out_animation_duration: f64,
}

impl AddImagesRequest {
    pub fn animations(&self) -> Animations {
        Animations {
            enter: AnimationSpec {
                kind: self.in_animation.clone(),
                duration: self.in_animation_duration,
            },
            exit: AnimationSpec {
                kind: self.out_animation.clone(),
                duration: self.out_animation_duration,
            },
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddAudiosRequest {
    pub ids: Vec<String>,
    pub mp3_uris: Vec<String>,
    pub timelines: Vec<f64>,
    #[serde(default = "default_audio_effect")]
    pub audio_effect: String,
    #[serde(default = "default_volume")]
    pub volume: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCaptionsRequest {
    pub ids: Vec<String>,
    pub timelines: Vec<f64>,
    pub texts: Vec<String>,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub border: bool,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default)]
    pub transform_x: f64,
    #[serde(default)]
    pub transform_y: f64,
    #[serde(default = "default_alignment")]
    pub alignment: String,
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    #[serde(default = "default_animation")]
    pub in_animation: String,
    #[serde(default)]
    pub in_animation_duration: f64,
    #[serde(default = "default_animation")]
    pub out_animation: String,
    #[serde(default)]
    pub out_animation_duration: f64,
}

impl AddCaptionsRequest {
    pub fn animations(&self) -> Animations {
        Animations {
            enter: AnimationSpec {
                kind: self.in_animation.clone(),
                duration: self.in_animation_duration,
            },
            exit: AnimationSpec {
                kind: self.out_animation.clone(),
                duration: self.out_animation_duration,
            },
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddEffectsRequest {
    pub ids: Vec<String>,
    pub timelines: Vec<f64>,
    pub effects: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddVideosRequest {
    pub ids: Vec<String>,
    pub timelines: Vec<f64>,
    pub video_uris: Vec<String>,
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
    #[serde(default)]
    pub transform_x: f64,
    #[serde(default)]
    pub transform_y: f64,
}

// ========================================
// Draft and utility responses
// ========================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DraftData {
    pub ids: Vec<String>,
    pub height: i64,
    pub width: i64,
    pub created_at: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StrArrayData {
    pub input: String,
    pub output: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TimelinesData {
    pub ids: Vec<String>,
    pub timelines: Vec<u32>,
}

// ========================================
// Image records
// ========================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedImagesData {
    pub added_images: Vec<AddedImage>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedImage {
    pub id: String,
    pub image_uri: String,
    pub timeline: f64,
    pub properties: ImageProperties,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImageProperties {
    pub height: f64,
    pub width: f64,
    pub transform: Point,
    pub scale: Point,
    pub animations: Animations,
}

// ========================================
// Audio records
// ========================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedAudiosData {
    pub added_audios: Vec<AddedAudio>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedAudio {
    pub id: String,
    pub audio_uri: String,
    pub timeline: f64,
    pub properties: AudioProperties,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AudioProperties {
    pub effect: String,
    pub volume: f64,
}

// ========================================
// Caption records
// ========================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedCaptionsData {
    pub added_captions: Vec<AddedCaption>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedCaption {
    pub id: String,
    pub text: String,
    pub timeline: f64,
    pub style: CaptionStyle,
    pub animations: Animations,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CaptionStyle {
    pub color: String,
    pub font: String,
    pub size: f64,
    pub border: BorderStyle,
    pub position: Point,
    pub alignment: String,
    pub spacing: Spacing,
}

/// `color` is only present when the border is enabled
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorderStyle {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Spacing {
    pub line: f64,
    pub letter: f64,
}

// ========================================
// Effect records
// ========================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedEffectsData {
    pub added_effects: Vec<AddedEffect>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedEffect {
    pub id: String,
    pub effect_type: String,
    pub timeline: f64,
    pub properties: EffectProperties,
}

/// Fixed placeholder properties attached to every effect record
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EffectProperties {
    pub intensity: f64,
    pub duration: u32,
}

impl Default for EffectProperties {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            duration: 1000,
        }
    }
}

// ========================================
// Video records
// ========================================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedVideosData {
    pub added_videos: Vec<AddedVideo>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedVideo {
    pub id: String,
    pub video_uri: String,
    pub timeline: f64,
    pub properties: VideoProperties,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VideoProperties {
    pub volume: f64,
    pub scale: Point,
    pub transform: Point,
}
