mod common;

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use serde_json::json;

use feedback_backend::config_manager::Config;

use common::{
    app_with, app_with_config, example_app, example_corrector, example_translator, get_bytes,
    post_json, CallLog, EmptySynthesizer, FailingTranslator, FakeSynthesizer,
};

#[tokio::test]
async fn corrects_translates_and_synthesizes() {
    let dir = tempfile::tempdir().unwrap();
    let (app, log) = example_app(dir.path());

    let (status, body) = post_json(
        app,
        "/process-text",
        r#"{"user_text": "He go to school yesterday.", "target_language": "es"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"feedback": "Fue a la escuela ayer.", "speech_url": "/output.mp3"})
    );

    let audio = std::fs::read(dir.path().join("output.mp3")).unwrap();
    assert_eq!(audio, b"es|Fue a la escuela ayer.");

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "correct:He go to school yesterday.".to_string(),
            "translate:es:He went to school yesterday.".to_string(),
            "synthesize:es:Fue a la escuela ayer.".to_string(),
        ]
    );
}

#[tokio::test]
async fn speech_url_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _log) = example_app(dir.path());

    let (status, body) = post_json(
        app.clone(),
        "/process-text",
        r#"{"user_text": "Hello", "target_language": "fr"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let speech_url = body["speech_url"].as_str().unwrap().to_string();
    let (status, audio) = get_bytes(app, &speech_url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(audio, b"fr|[fr] Hello");
}

#[tokio::test]
async fn missing_fields_are_client_errors() {
    let dir = tempfile::tempdir().unwrap();

    for body in [
        r#"{"target_language": "es"}"#,
        r#"{"user_text": "He go to school yesterday."}"#,
        r#"{}"#,
        r#"{"user_text": 42, "target_language": "es"}"#,
        r#"not json"#,
    ] {
        let (app, log) = example_app(dir.path());
        let (status, response) = post_json(app, "/process-text", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert!(response["error"].is_string(), "body: {}", body);
        assert!(log.lock().unwrap().is_empty());
    }
    assert!(!dir.path().join("output.mp3").exists());
}

#[tokio::test]
async fn blank_fields_are_client_errors() {
    let dir = tempfile::tempdir().unwrap();
    let (app, log) = example_app(dir.path());

    let (status, response) = post_json(
        app.clone(),
        "/process-text",
        r#"{"user_text": "   ", "target_language": "es"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("user_text"));

    let (status, response) = post_json(
        app,
        "/process-text",
        r#"{"user_text": "Hello", "target_language": ""}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("target_language"));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn provider_failure_is_a_server_error_without_partial_result() {
    let dir = tempfile::tempdir().unwrap();
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let app = app_with(
        dir.path(),
        Arc::new(example_corrector(log.clone())),
        Arc::new(FailingTranslator),
        Arc::new(FakeSynthesizer { log: log.clone() }),
    );

    let (status, body) = post_json(
        app,
        "/process-text",
        r#"{"user_text": "He go to school yesterday.", "target_language": "es"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("quota exceeded"));
    assert!(body.get("feedback").is_none());
    assert_eq!(log.lock().unwrap().len(), 1, "synthesis must not run");
    assert!(!dir.path().join("output.mp3").exists());
}

#[tokio::test]
async fn empty_audio_is_a_synthesis_error() {
    let dir = tempfile::tempdir().unwrap();
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let app = app_with(
        dir.path(),
        Arc::new(example_corrector(log.clone())),
        Arc::new(example_translator(log.clone())),
        Arc::new(EmptySynthesizer),
    );

    let (status, body) = post_json(
        app,
        "/process-text",
        r#"{"user_text": "He go to school yesterday.", "target_language": "es"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("speech synthesis failed"), "{}", error);
    assert!(error.contains("empty audio"), "{}", error);
    assert!(!dir.path().join("output.mp3").exists());
}

#[tokio::test]
async fn audio_prefix_without_leading_slash_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let mut config = Config::default();
    config.system_config.audio_output_dir = dir.path().to_string_lossy().into_owned();
    config.system_config.audio_url_prefix = "audio".to_string();

    let app = app_with_config(
        config,
        Arc::new(example_corrector(log.clone())),
        Arc::new(example_translator(log.clone())),
        Arc::new(FakeSynthesizer { log }),
    );

    let (status, body) = post_json(
        app.clone(),
        "/process-text",
        r#"{"user_text": "He go to school yesterday.", "target_language": "es"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["speech_url"], "/audio/output.mp3");

    let (status, audio) = get_bytes(app, "/audio/output.mp3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(audio, b"es|Fue a la escuela ayer.");
}

#[tokio::test]
async fn same_input_gives_same_feedback() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _log) = example_app(dir.path());
    let body = r#"{"user_text": "He go to school yesterday.", "target_language": "es"}"#;

    let (_, first) = post_json(app.clone(), "/process-text", body).await;
    let (_, second) = post_json(app, "/process-text", body).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_requests_keep_their_own_responses() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _log) = example_app(dir.path());

    let mut handles = Vec::new();
    for i in 0..16 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let body = json!({"user_text": format!("sentence {}", i), "target_language": "de"});
            let (status, response) = post_json(app, "/process-text", &body.to_string()).await;
            (i, status, response)
        }));
    }

    let mut payloads = Vec::new();
    for handle in handles {
        let (i, status, response) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["feedback"], format!("[de] sentence {}", i));
        assert_eq!(response["speech_url"], "/output.mp3");
        payloads.push(format!("de|[de] sentence {}", i).into_bytes());
    }

    let last = std::fs::read(dir.path().join("output.mp3")).unwrap();
    assert!(payloads.contains(&last), "shared file holds a torn write");
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _log) = example_app(dir.path());

    let (status, body) = get_bytes(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"status": "ok", "python_service": null}));
}
