//! LlmDriver を ChatCompletion ポートに適合させるアダプタ

use crate::ports::outbound::ChatCompletion;
use common::error::Error;
use common::llm::{AnyProvider, GenerationParams, LlmDriver};
use common::msg::ChatMessage;

/// LlmDriver 経由でチャット補完を行うアダプタ
pub struct LlmChatCompletion {
    driver: LlmDriver<AnyProvider>,
    params: GenerationParams,
}

impl LlmChatCompletion {
    pub fn new(driver: LlmDriver<AnyProvider>, params: GenerationParams) -> Self {
        Self { driver, params }
    }
}

impl ChatCompletion for LlmChatCompletion {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, Error> {
        self.driver.complete(messages, &self.params)
    }
}
