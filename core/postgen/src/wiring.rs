//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdClock};
use common::error::Error;
use common::llm::{create_provider, GenerationParams, LlmDriver, ProviderType};
use common::ports::outbound::{Clock, Log};

use crate::adapter::{LlmChatCompletion, StdPacer};
use crate::cli::Config;
use crate::ports::outbound::{ChatCompletion, Pacer};
use crate::usecase::{PostGenerator, PostStreamer, PromptBuilder, DEFAULT_MAX_RETRIES};

/// 組み立て済みアプリケーション
pub struct App {
    pub generator: PostGenerator,
    pub streamer: PostStreamer,
    pub logger: Arc<dyn Log>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App").finish_non_exhaustive()
    }
}

/// 配線: Config から標準アダプタで App を組み立てる
pub fn wire_postgen(config: &Config) -> Result<App, Error> {
    let provider_type = match &config.provider {
        Some(name) => ProviderType::from_str(name.as_ref()).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown provider: {}. Supported providers: {}",
                name.as_ref(),
                ProviderType::available().join(", ")
            ))
        })?,
        None => ProviderType::Groq,
    };
    let provider = create_provider(
        provider_type,
        config.model.as_ref().map(|m| m.as_ref().to_string()),
        None,
        None,
        None,
    )?;
    let driver = LlmDriver::new(provider);

    let mut params = GenerationParams::default();
    if let Some(temperature) = config.temperature {
        params.temperature = temperature;
    }
    let completion: Arc<dyn ChatCompletion> = Arc::new(LlmChatCompletion::new(driver, params));

    let logger: Arc<dyn Log> = match &config.log_file {
        Some(path) => Arc::new(FileJsonLog::new(path)),
        None => Arc::new(NoopLog),
    };
    let pacer: Arc<dyn Pacer> = Arc::new(StdPacer);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);

    let max_retries = config.retries.unwrap_or(DEFAULT_MAX_RETRIES);
    let generator = PostGenerator::new(
        completion,
        PromptBuilder::default(),
        Arc::clone(&pacer),
        Arc::clone(&logger),
        max_retries,
    );
    let streamer = PostStreamer::new(clock, pacer);

    Ok(App {
        generator,
        streamer,
        logger,
    })
}
