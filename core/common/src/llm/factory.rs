//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::echo::EchoProvider;
use crate::llm::groq::GroqProvider;
use crate::llm::params::GenerationParams;
use crate::llm::provider::ChatProvider;
use crate::msg::ChatMessage;
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Groq (OpenAI Chat Completions 互換)
    Groq,
    /// Echo（リクエストを表示するだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "groq" => Some(Self::Groq),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::Echo => "echo",
        }
    }

    /// 利用可能なプロバイダ名の一覧（usage エラー表示用）
    pub fn available() -> &'static [&'static str] {
        &["groq", "echo"]
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    Groq(GroqProvider),
    Echo(EchoProvider),
}

impl std::fmt::Debug for AnyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ChatProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Groq(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<Value, Error> {
        match self {
            Self::Groq(p) => p.make_request_payload(messages, params),
            Self::Echo(p) => p.make_request_payload(messages, params),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Groq(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Groq(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（None のときプロバイダのデフォルト）
/// * `base_url` - ベース URL（Groq 用。None のときデフォルト）
/// * `api_key_env` - API キーを読む環境変数名（Groq 用。None のとき GROQ_API_KEY）
/// * `timeout_secs` - HTTP タイムアウト秒数（Groq 用。None のとき 60）
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    base_url: Option<String>,
    api_key_env: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::Groq => {
            let provider = GroqProvider::new(model, base_url, api_key_env, timeout_secs)?;
            Ok(AnyProvider::Groq(provider))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}
