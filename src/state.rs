use std::sync::Arc;
use tracing::info;

use crate::config_manager::Config;
use crate::grammar::GrammarFactory;
use crate::pipeline::FeedbackPipeline;
use crate::python_service::PythonServiceClient;
use crate::translate::TranslateFactory;
use crate::tts::{AudioStore, TTSFactory};
use crate::utils::http::build_http_client;

/// Process-wide handles, built once at startup and shared read-only by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<FeedbackPipeline>,
    pub python_service: Option<Arc<PythonServiceClient>>,
}

impl AppState {
    pub fn new(mut config: Config) -> anyhow::Result<Self> {
        config.system_config.validate()?;
        let system_config = &config.system_config;
        let http_client = build_http_client(system_config.request_timeout_ms)?;

        let python_service = system_config.resolved_python_service_url().map(|url| {
            info!("Using Python service at {}", url);
            Arc::new(PythonServiceClient::new(url, http_client.clone()))
        });

        let corrector = GrammarFactory::create_corrector(
            &config.grammar_config,
            http_client.clone(),
            python_service.clone(),
        )?;
        let translator = TranslateFactory::create_translator(
            &config.translate_config,
            http_client.clone(),
            python_service.clone(),
        )?;
        let synthesizer =
            TTSFactory::create_tts(&config.tts_config, http_client, python_service.clone())?;

        let pipeline = FeedbackPipeline::new(
            corrector,
            translator,
            synthesizer,
            AudioStore::from_config(system_config),
        );

        Self::with_pipeline(config, pipeline, python_service)
    }

    /// Assemble state around an already-built pipeline
    pub fn with_pipeline(
        mut config: Config,
        pipeline: FeedbackPipeline,
        python_service: Option<Arc<PythonServiceClient>>,
    ) -> anyhow::Result<Self> {
        config.system_config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            python_service,
        })
    }
}
