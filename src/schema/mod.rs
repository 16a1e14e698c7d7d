//! Declarative validation schemas
//!
//! One read-only constraint table per operation, checked field by field
//! against the raw JSON body before any typed extraction happens. The first
//! violation wins and is reported with a human-readable message; unknown keys
//! are rejected. Tables are plain consts so each operation's contract is
//! visible in one place.
use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;
use url::Url;

use crate::error::AppError;

/// Constraint attached to a single field
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    /// JSON number with zero fractional part
    Integer { min: Option<i64> },
    Number { min: Option<f64>, max: Option<f64> },
    Text,
    Boolean,
    StringArray,
    UriArray,
    NumberArray,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

/// The full field contract for one operation
#[derive(Debug, Clone, Copy)]
pub struct OperationSchema {
    pub operation: &'static str,
    pub fields: &'static [FieldRule],
}

const fn required(name: &'static str, ty: FieldType) -> FieldRule {
    FieldRule {
        name,
        ty,
        required: true,
    }
}

const fn optional(name: &'static str, ty: FieldType) -> FieldRule {
    FieldRule {
        name,
        ty,
        required: false,
    }
}

const NUMBER: FieldType = FieldType::Number {
    min: None,
    max: None,
};
const NON_NEGATIVE: FieldType = FieldType::Number {
    min: Some(0.0),
    max: None,
};
const VOLUME: FieldType = FieldType::Number {
    min: Some(0.0),
    max: Some(1.0),
};

pub const CREATE_DRAFT: OperationSchema = OperationSchema {
    operation: "create-draft",
    fields: &[
        required("height", FieldType::Integer { min: Some(1) }),
        required("width", FieldType::Integer { min: Some(1) }),
    ],
};

pub const STR_ARRAY: OperationSchema = OperationSchema {
    operation: "str-array",
    fields: &[required("input", FieldType::Text)],
};

pub const AUDIOS_TIMELINES: OperationSchema = OperationSchema {
    operation: "audios-timelines",
    fields: &[required("ids", FieldType::StringArray)],
};

pub const ADD_IMAGES: OperationSchema = OperationSchema {
    operation: "add-images",
    fields: &[
        required("ids", FieldType::StringArray),
        required("images", FieldType::UriArray),
        required("timelines", FieldType::NumberArray),
        optional("height", NON_NEGATIVE),
        optional("width", NON_NEGATIVE),
        optional("transform_x", NUMBER),
        optional("transform_y", NUMBER),
        optional("scale_x", NON_NEGATIVE),
        optional("scale_y", NON_NEGATIVE),
        optional("in_animation", FieldType::Text),
        optional("in_animation_duration", NON_NEGATIVE),
        optional("out_animation", FieldType::Text),
        optional("out_animation_duration", NON_NEGATIVE),
    ],
};

pub const ADD_AUDIOS: OperationSchema = OperationSchema {
    operation: "add-audios",
    fields: &[
        required("ids", FieldType::StringArray),
        required("mp3_uris", FieldType::UriArray),
        required("timelines", FieldType::NumberArray),
        optional("audio_effect", FieldType::Text),
        optional("volume", VOLUME),
    ],
};

pub const ADD_CAPTIONS: OperationSchema = OperationSchema {
    operation: "add-captions",
    fields: &[
        required("ids", FieldType::StringArray),
        required("timelines", FieldType::NumberArray),
        required("texts", FieldType::StringArray),
        optional("text_color", FieldType::Text),
        optional("font", FieldType::Text),
        optional(
            "font_size",
            FieldType::Number {
                min: Some(1.0),
                max: None,
            },
        ),
        optional("border", FieldType::Boolean),
        optional("border_color", FieldType::Text),
        optional("transform_x", NUMBER),
        optional("transform_y", NUMBER),
        optional("alignment", FieldType::Text),
        optional("line_spacing", NUMBER),
        optional("letter_spacing", NUMBER),
        optional("in_animation", FieldType::Text),
        optional("in_animation_duration", NON_NEGATIVE),
        optional("out_animation", FieldType::Text),
        optional("out_animation_duration", NON_NEGATIVE),
    ],
};

pub const ADD_EFFECTS: OperationSchema = OperationSchema {
    operation: "add-effects",
    fields: &[
        required("ids", FieldType::StringArray),
        required("timelines", FieldType::NumberArray),
        required("effects", FieldType::StringArray),
    ],
};

pub const ADD_VIDEOS: OperationSchema = OperationSchema {
    operation: "add-videos",
    fields: &[
        required("ids", FieldType::StringArray),
        required("timelines", FieldType::NumberArray),
        required("video_uris", FieldType::UriArray),
        optional("volume", VOLUME),
        optional("scale_x", NON_NEGATIVE),
        optional("scale_y", NON_NEGATIVE),
        optional("transform_x", NUMBER),
        optional("transform_y", NUMBER),
    ],
};

/// Operation name → constraint table, process-wide and read-only
pub static SCHEMAS: Lazy<HashMap<&'static str, &'static OperationSchema>> = Lazy::new(|| {
    [
        &CREATE_DRAFT,
        &STR_ARRAY,
        &AUDIOS_TIMELINES,
        &ADD_IMAGES,
        &ADD_AUDIOS,
        &ADD_CAPTIONS,
        &ADD_EFFECTS,
        &ADD_VIDEOS,
    ]
    .into_iter()
    .map(|schema| (schema.operation, schema))
    .collect()
});

/// Validate a request body against an operation's constraint table.
///
/// Fields are checked in declared order and the first violation is returned.
/// Cross-array length consistency is not checked here; that is the job of
/// `services::zip::ensure_parallel_lengths`.
pub fn validate(schema: &OperationSchema, body: &Value) -> Result<(), AppError> {
    let Some(object) = body.as_object() else {
        return Err(AppError::Validation(
            "request body must be a JSON object".to_string(),
        ));
    };

    for rule in schema.fields {
        match object.get(rule.name) {
            Some(value) => check_field(rule.name, rule.ty, value)?,
            None if rule.required => {
                return Err(AppError::Validation(format!(
                    "\"{}\" is required",
                    rule.name
                )));
            }
            None => {}
        }
    }

    for key in object.keys() {
        if !schema.fields.iter().any(|rule| rule.name == key) {
            return Err(AppError::Validation(format!("\"{key}\" is not allowed")));
        }
    }

    Ok(())
}

fn check_field(name: &str, ty: FieldType, value: &Value) -> Result<(), AppError> {
    match ty {
        FieldType::Integer { min } => {
            let Some(number) = as_integer(value) else {
                return Err(invalid(name, "must be an integer"));
            };
            if let Some(min) = min {
                if number < min {
                    return Err(invalid(
                        name,
                        &format!("must be greater than or equal to {min}"),
                    ));
                }
            }
        }
        FieldType::Number { min, max } => {
            let Some(number) = value.as_f64() else {
                return Err(invalid(name, "must be a number"));
            };
            if let Some(min) = min {
                if number < min {
                    return Err(invalid(
                        name,
                        &format!("must be greater than or equal to {min}"),
                    ));
                }
            }
            if let Some(max) = max {
                if number > max {
                    return Err(invalid(
                        name,
                        &format!("must be less than or equal to {max}"),
                    ));
                }
            }
        }
        FieldType::Text => {
            if !value.is_string() {
                return Err(invalid(name, "must be a string"));
            }
        }
        FieldType::Boolean => {
            if !value.is_boolean() {
                return Err(invalid(name, "must be a boolean"));
            }
        }
        FieldType::StringArray => {
            for (index, item) in as_array(name, value)?.iter().enumerate() {
                if !item.is_string() {
                    return Err(invalid(&format!("{name}[{index}]"), "must be a string"));
                }
            }
        }
        FieldType::UriArray => {
            for (index, item) in as_array(name, value)?.iter().enumerate() {
                let is_uri = item.as_str().map(|s| Url::parse(s).is_ok()).unwrap_or(false);
                if !is_uri {
                    return Err(invalid(&format!("{name}[{index}]"), "must be a valid uri"));
                }
            }
        }
        FieldType::NumberArray => {
            for (index, item) in as_array(name, value)?.iter().enumerate() {
                if !item.is_number() {
                    return Err(invalid(&format!("{name}[{index}]"), "must be a number"));
                }
            }
        }
    }
    Ok(())
}

fn as_array<'a>(name: &str, value: &'a Value) -> Result<&'a Vec<Value>, AppError> {
    value
        .as_array()
        .ok_or_else(|| invalid(name, "must be an array"))
}

fn as_integer(value: &Value) -> Option<i64> {
    if let Some(number) = value.as_i64() {
        return Some(number);
    }
    // Accept e.g. 1080.0, which JSON clients routinely send for integers
    match value.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
        _ => None,
    }
}

fn invalid(name: &str, detail: &str) -> AppError {
    AppError::Validation(format!("\"{name}\" {detail}"))
}
