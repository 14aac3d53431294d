#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use feedback_backend::build_app;
use feedback_backend::config_manager::Config;
use feedback_backend::grammar::GrammarCorrector;
use feedback_backend::pipeline::FeedbackPipeline;
use feedback_backend::state::AppState;
use feedback_backend::translate::Translator;
use feedback_backend::tts::{AudioStore, SpeechSynthesizer};

/// Records the order providers were called in
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Corrector with canned answers; unknown input is echoed back
pub struct FakeCorrector {
    pub answers: HashMap<String, String>,
    pub log: CallLog,
}

#[async_trait]
impl GrammarCorrector for FakeCorrector {
    async fn correct(&self, text: &str) -> Result<String, anyhow::Error> {
        self.log.lock().unwrap().push(format!("correct:{}", text));
        Ok(self.answers.get(text).cloned().unwrap_or_else(|| text.to_string()))
    }
}

/// Translator with canned answers; unknown input becomes `[lang] text`
pub struct FakeTranslator {
    pub answers: HashMap<String, String>,
    pub log: CallLog,
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, anyhow::Error> {
        self.log
            .lock()
            .unwrap()
            .push(format!("translate:{}:{}", target_language, text));
        Ok(self
            .answers
            .get(text)
            .cloned()
            .unwrap_or_else(|| format!("[{}] {}", target_language, text)))
    }
}

pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str, _target_language: &str) -> Result<String, anyhow::Error> {
        Err(anyhow::anyhow!("translation quota exceeded"))
    }
}

/// Synthesizer whose "audio" is `lang|text`
pub struct FakeSynthesizer {
    pub log: CallLog,
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, anyhow::Error> {
        self.log
            .lock()
            .unwrap()
            .push(format!("synthesize:{}:{}", language_code, text));
        Ok(format!("{}|{}", language_code, text).into_bytes())
    }
}

pub fn example_corrector(log: CallLog) -> FakeCorrector {
    let mut answers = HashMap::new();
    answers.insert(
        "He go to school yesterday.".to_string(),
        "He went to school yesterday.".to_string(),
    );
    FakeCorrector { answers, log }
}

pub fn example_translator(log: CallLog) -> FakeTranslator {
    let mut answers = HashMap::new();
    answers.insert(
        "He went to school yesterday.".to_string(),
        "Fue a la escuela ayer.".to_string(),
    );
    FakeTranslator { answers, log }
}

/// Synthesizer that "succeeds" with no audio
pub struct EmptySynthesizer;

#[async_trait]
impl SpeechSynthesizer for EmptySynthesizer {
    async fn synthesize(&self, _text: &str, _language_code: &str) -> Result<Vec<u8>, anyhow::Error> {
        Ok(Vec::new())
    }
}

pub fn app_with(
    output_dir: &Path,
    corrector: Arc<dyn GrammarCorrector>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
) -> Router {
    let mut config = Config::default();
    config.system_config.audio_output_dir = output_dir.to_string_lossy().into_owned();
    app_with_config(config, corrector, translator, synthesizer)
}

pub fn app_with_config(
    mut config: Config,
    corrector: Arc<dyn GrammarCorrector>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
) -> Router {
    config.system_config.validate().unwrap();
    let store = AudioStore::from_config(&config.system_config);
    let pipeline = FeedbackPipeline::new(corrector, translator, synthesizer, store);
    build_app(AppState::with_pipeline(config, pipeline, None).unwrap())
}

/// App wired with the grammar/translation fixtures used across tests
pub fn example_app(output_dir: &Path) -> (Router, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let app = app_with(
        output_dir,
        Arc::new(example_corrector(log.clone())),
        Arc::new(example_translator(log.clone())),
        Arc::new(FakeSynthesizer { log: log.clone() }),
    );
    (app, log)
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

pub async fn get_bytes(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}
