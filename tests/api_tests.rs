//! HTTP-level tests for the draft-service operations
//!
//! Mounts the real route table and exercises the full
//! validate → guard → zip → respond path for each operation.
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use uuid::Uuid;

use draft_service::handlers;

macro_rules! spawn_app {
    () => {
        test::init_service(
            App::new()
                .service(web::scope("/api").configure(handlers::routes))
                .default_service(web::route().to(handlers::not_found)),
        )
        .await
    };
}

macro_rules! post_json {
    ($app:expr, $path:expr, $body:expr $(,)?) => {{
        let req = test::TestRequest::post()
            .uri($path)
            .set_json(&$body)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn add_effects_zips_records_in_input_order() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/add-effects",
        json!({
            "ids": ["e1", "e2"],
            "timelines": [0, 500],
            "effects": ["fade", "zoom"],
        }),
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let records = body["data"]["added_effects"].as_array().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["id"], "e1");
    assert_eq!(records[0]["effect_type"], "fade");
    assert_eq!(records[0]["timeline"].as_f64(), Some(0.0));
    assert_eq!(records[0]["properties"]["intensity"].as_f64(), Some(1.0));
    assert_eq!(records[0]["properties"]["duration"].as_u64(), Some(1000));

    assert_eq!(records[1]["id"], "e2");
    assert_eq!(records[1]["effect_type"], "zoom");
    assert_eq!(records[1]["timeline"].as_f64(), Some(500.0));
}

#[actix_web::test]
async fn add_images_length_mismatch_returns_400_naming_the_fields() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/add-images",
        json!({
            "ids": ["a", "b"],
            "images": ["https://cdn.example.com/a.png"],
            "timelines": [0, 500],
        }),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("ids"), "message was: {message}");
    assert!(message.contains("images"), "message was: {message}");
    assert!(message.contains("timelines"), "message was: {message}");
    // No partial data alongside the error
    assert!(body.get("data").is_none());
    assert!(body.get("success").is_none());
}

#[actix_web::test]
async fn add_images_applies_documented_defaults() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/add-images",
        json!({
            "ids": ["img1"],
            "images": ["https://cdn.example.com/a.png"],
            "timelines": [250],
        }),
    );

    assert_eq!(status, StatusCode::OK);
    let record = &body["data"]["added_images"][0];
    assert_eq!(record["id"], "img1");
    assert_eq!(record["image_uri"], "https://cdn.example.com/a.png");
    assert_eq!(record["timeline"].as_f64(), Some(250.0));

    let properties = &record["properties"];
    assert_eq!(properties["height"].as_f64(), Some(1080.0));
    assert_eq!(properties["width"].as_f64(), Some(1920.0));
    assert_eq!(properties["transform"]["x"].as_f64(), Some(0.0));
    assert_eq!(properties["scale"]["x"].as_f64(), Some(1.0));
    assert_eq!(properties["scale"]["y"].as_f64(), Some(1.0));
    assert_eq!(properties["animations"]["in"]["type"], "none");
    assert_eq!(properties["animations"]["in"]["duration"].as_f64(), Some(0.0));
    assert_eq!(properties["animations"]["out"]["type"], "none");
}

#[actix_web::test]
async fn create_draft_returns_a_fresh_id_each_call() {
    let app = spawn_app!();
    let body = json!({ "height": 1080, "width": 1920 });

    let (status, first) = post_json!(app, "/api/create-draft", body.clone());
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], true);

    let data = &first["data"];
    assert_eq!(data["height"].as_i64(), Some(1080));
    assert_eq!(data["width"].as_i64(), Some(1920));
    assert_eq!(data["status"], "created");
    assert!(data["created_at"].as_str().unwrap().contains('T'));

    let first_id = data["ids"][0].as_str().unwrap();
    Uuid::parse_str(first_id).expect("draft id should be a uuid");

    let (_, second) = post_json!(app, "/api/create-draft", body);
    let second_id = second["data"]["ids"][0].as_str().unwrap();
    assert_ne!(first_id, second_id);
}

#[actix_web::test]
async fn create_draft_rejects_non_positive_dimensions() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/create-draft",
        json!({ "height": 0, "width": 1920 }),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["message"], "\"height\" must be greater than or equal to 1");
}

#[actix_web::test]
async fn str_array_splits_trims_and_drops_empty_tokens() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/str-array", json!({ "input": "a, b ,, c" }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["input"], "a, b ,, c");
    assert_eq!(body["data"]["output"], json!(["a", "b", "c"]));

    let (status, body) = post_json!(app, "/api/str-array", json!({ "input": "" }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["output"], json!([]));
}

#[actix_web::test]
async fn audios_timelines_returns_one_slot_per_id_in_range() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/audios-timelines",
        json!({ "ids": ["a1", "a2", "a3"] }),
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["ids"], json!(["a1", "a2", "a3"]));

    let timelines = body["data"]["timelines"].as_array().unwrap();
    assert_eq!(timelines.len(), 3);
    for slot in timelines {
        let value = slot.as_u64().unwrap();
        assert!(value <= 999, "slot {value} out of range");
    }
}

#[actix_web::test]
async fn add_audios_rejects_volume_out_of_range() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/add-audios",
        json!({
            "ids": ["a1"],
            "mp3_uris": ["https://cdn.example.com/a.mp3"],
            "timelines": [0],
            "volume": 1.5,
        }),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["message"], "\"volume\" must be less than or equal to 1");
}

#[actix_web::test]
async fn add_audios_builds_records_with_shared_properties() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/add-audios",
        json!({
            "ids": ["a1", "a2"],
            "mp3_uris": [
                "https://cdn.example.com/a.mp3",
                "https://cdn.example.com/b.mp3"
            ],
            "timelines": [0, 1000],
            "audio_effect": "echo",
            "volume": 0.5,
        }),
    );

    assert_eq!(status, StatusCode::OK);
    let records = body["data"]["added_audios"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["audio_uri"], "https://cdn.example.com/a.mp3");
    assert_eq!(records[1]["timeline"].as_f64(), Some(1000.0));
    for record in records {
        assert_eq!(record["properties"]["effect"], "echo");
        assert_eq!(record["properties"]["volume"].as_f64(), Some(0.5));
    }
}

#[actix_web::test]
async fn add_captions_border_toggles_the_color_key() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/add-captions",
        json!({
            "ids": ["c1"],
            "timelines": [0],
            "texts": ["hello"],
            "border": true,
        }),
    );

    assert_eq!(status, StatusCode::OK);
    let style = &body["data"]["added_captions"][0]["style"];
    assert_eq!(style["border"], json!({ "enabled": true, "color": "#000000" }));
    assert_eq!(style["color"], "#FFFFFF");
    assert_eq!(style["font"], "Arial");
    assert_eq!(style["size"].as_f64(), Some(24.0));
    assert_eq!(style["alignment"], "center");
    assert_eq!(style["spacing"]["line"].as_f64(), Some(1.2));

    let (_, body) = post_json!(app, "/api/add-captions",
        json!({
            "ids": ["c1"],
            "timelines": [0],
            "texts": ["hello"],
        }),
    );

    let border = &body["data"]["added_captions"][0]["style"]["border"];
    assert_eq!(border, &json!({ "enabled": false }));
}

#[actix_web::test]
async fn add_videos_empty_arrays_yield_an_empty_result() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/add-videos",
        json!({ "ids": [], "timelines": [], "video_uris": [] }),
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["added_videos"], json!([]));
}

#[actix_web::test]
async fn add_videos_is_idempotent_for_identical_input() {
    let app = spawn_app!();
    let payload = json!({
        "ids": ["v1", "v2"],
        "timelines": [0, 2000],
        "video_uris": [
            "https://cdn.example.com/a.mp4",
            "https://cdn.example.com/b.mp4"
        ],
        "volume": 0.8,
        "scale_x": 2.0,
    });

    let (_, first) = post_json!(app, "/api/add-videos", payload.clone());
    let (_, second) = post_json!(app, "/api/add-videos", payload);
    assert_eq!(first, second);

    let record = &first["data"]["added_videos"][0];
    assert_eq!(record["properties"]["volume"].as_f64(), Some(0.8));
    assert_eq!(record["properties"]["scale"]["x"].as_f64(), Some(2.0));
    assert_eq!(record["properties"]["scale"]["y"].as_f64(), Some(1.0));
    assert_eq!(record["properties"]["transform"]["x"].as_f64(), Some(0.0));
}

#[actix_web::test]
async fn missing_required_array_returns_400() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/add-effects",
        json!({ "timelines": [0], "effects": ["fade"] }),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "\"ids\" is required");
}

#[actix_web::test]
async fn unknown_field_returns_400() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/add-effects",
        json!({
            "ids": ["e1"],
            "timelines": [0],
            "effects": ["fade"],
            "bogus": 1,
        }),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "\"bogus\" is not allowed");
}

#[actix_web::test]
async fn unknown_route_returns_404_envelope() {
    let app = spawn_app!();

    let (status, body) = post_json!(app, "/api/does-not-exist", json!({}));

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].as_str().unwrap().len() > 0);
}
