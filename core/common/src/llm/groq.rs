//! Groq (OpenAI Chat Completions 互換) プロバイダ
//!
//! base_url で任意の互換エンドポイントを指定可能。API キーは環境変数から読み、
//! 未設定なら構築時に即エラーにする（リトライで直らない設定エラーのため）。

use crate::error::Error;
use crate::llm::params::GenerationParams;
use crate::llm::provider::ChatProvider;
use crate::msg::ChatMessage;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Groq プロバイダ
pub struct GroqProvider {
    model: String,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl GroqProvider {
    /// 新しい Groq プロバイダを作成
    ///
    /// * `model` - モデル名（None のとき DEFAULT_MODEL）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key_env` - API キーを読む環境変数名（None のとき GROQ_API_KEY）
    /// * `timeout_secs` - HTTP タイムアウト秒数（None のとき 60）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, Error> {
        let key_env = api_key_env.unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        let api_key = env::var(&key_env)
            .map_err(|_| Error::env(format!("{} environment variable is not set", key_env)))?;
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        Ok(Self {
            model,
            base_url,
            api_key,
            timeout,
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl ChatProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    fn make_request_payload(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<Value, Error> {
        let message_values: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();

        let mut payload = json!({
            "model": self.model,
            "messages": message_values,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
            "top_p": params.top_p,
            "frequency_penalty": params.frequency_penalty,
            "presence_penalty": params.presence_penalty,
        });

        if params.response_format_json {
            payload["response_format"] = json!({ "type": "json_object" });
        }

        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        let response = client
            .post(self.url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("Chat completions error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider() -> GroqProvider {
        GroqProvider {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "test-key".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    #[test]
    fn test_groq_provider_name_and_url() {
        let p = test_provider();
        assert_eq!(p.name(), "groq");
        assert_eq!(p.url(), "https://api.groq.com/openai/v1/chat/completions");
    }

    #[test]
    fn test_make_request_payload_simple() {
        let p = test_provider();
        let messages = vec![ChatMessage::user("Hello")];
        let payload = p
            .make_request_payload(&messages, &GenerationParams::default())
            .unwrap();
        assert_eq!(payload["model"], DEFAULT_MODEL);
        assert_eq!(payload["temperature"], 0.8);
        assert_eq!(payload["max_tokens"], 2000);
        assert_eq!(payload["top_p"], 0.95);
        assert_eq!(payload["frequency_penalty"], 0.5);
        assert_eq!(payload["presence_penalty"], 0.5);
        assert_eq!(payload["response_format"]["type"], "json_object");
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "Hello");
    }

    #[test]
    fn test_make_request_payload_preserves_message_order() {
        let p = test_provider();
        let messages = vec![
            ChatMessage::system("persona"),
            ChatMessage::user("A"),
            ChatMessage::assistant("B"),
            ChatMessage::user("C"),
        ];
        let payload = p
            .make_request_payload(&messages, &GenerationParams::default())
            .unwrap();
        let out = payload["messages"].as_array().unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[0]["role"], "system");
        assert_eq!(out[1]["content"], "A");
        assert_eq!(out[2]["role"], "assistant");
        assert_eq!(out[3]["content"], "C");
    }

    #[test]
    fn test_make_request_payload_without_json_format() {
        let p = test_provider();
        let params = GenerationParams {
            response_format_json: false,
            ..GenerationParams::default()
        };
        let payload = p
            .make_request_payload(&[ChatMessage::user("Hi")], &params)
            .unwrap();
        assert!(payload.get("response_format").is_none());
    }

    #[test]
    fn test_parse_response_text() {
        let p = test_provider();
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"{\"posts\": []}"}}]}"#;
        let text = p.parse_response_text(json).unwrap();
        assert_eq!(text.as_deref(), Some("{\"posts\": []}"));
    }

    #[test]
    fn test_parse_response_text_api_error() {
        let p = test_provider();
        let json = r#"{"error":{"message":"Invalid API key"}}"#;
        let err = p.parse_response_text(json).unwrap_err();
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn test_parse_response_text_null_content() {
        let p = test_provider();
        let json = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let text = p.parse_response_text(json).unwrap();
        assert_eq!(text, None);
    }
}
