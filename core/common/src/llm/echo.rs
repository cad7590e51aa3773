//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、リクエストを表示するだけです。
//! デバッグやテスト用に使用します。応答は固定テキスト（JSONではない）なので、
//! 生成ループはフォールバックに落ちます。

use crate::error::Error;
use crate::llm::params::GenerationParams;
use crate::llm::provider::ChatProvider;
use crate::msg::ChatMessage;
use serde_json::{json, Value};

/// Echoプロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<Value, Error> {
        println!("[Echo Provider] {} messages", messages.len());
        if let Some(last) = messages.last() {
            println!("[Echo Provider] Last message ({}): {}", last.role.as_str(), last.content);
        }

        let message_values: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();
        Ok(json!({
            "messages": message_values,
            "temperature": params.temperature,
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // リクエストを表示（実際のAPI呼び出しは行わない）
        println!("[Echo Provider] Request JSON:");
        println!("{}", request_json);
        Ok(r#"{"echo": "This is a dummy response from echo provider"}"#.to_string())
    }

    fn parse_response_text(&self, _response_json: &str) -> Result<Option<String>, Error> {
        // Echoプロバイダは常に固定のメッセージを返す
        Ok(Some(
            "[Echo Provider] Request received (no actual LLM call made)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_provider_name() {
        assert_eq!(EchoProvider::new().name(), "echo");
    }

    #[test]
    fn test_echo_provider_make_request_payload() {
        let p = EchoProvider::new();
        let messages = vec![ChatMessage::system("persona"), ChatMessage::user("Hello")];
        let payload = p
            .make_request_payload(&messages, &GenerationParams::default())
            .unwrap();
        assert_eq!(payload["messages"].as_array().unwrap().len(), 2);
        assert_eq!(payload["messages"][1]["content"], "Hello");
    }

    #[test]
    fn test_echo_provider_parse_response_text() {
        let p = EchoProvider::new();
        let result = p.parse_response_text("{}").unwrap();
        assert!(result.unwrap().contains("Echo Provider"));
    }
}
