//! PostGenerator: 検証付き生成の repair loop
//!
//! 直列の transaction script をやめ、GenState で遷移する状態機械。
//! 検証に失敗したら出力を丸ごと破棄し、同じメッセージ列から再生成する
//! （前回の不正出力を訂正コンテキストとして戻さない）。
//! リトライ上限に達したら例外ではなくフォールバック投稿を返す。

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{parse_object, validate_response, GenerationResponse, Topic};
use crate::ports::outbound::{ChatCompletion, Pacer};
use crate::usecase::prompt::PromptBuilder;
use common::error::Error;
use common::msg::ChatMessage;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};

/// 生成呼び出しの上限回数（= 上流モデル呼び出しの回数）
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// リトライ間のバックオフ
pub const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// 実行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenState {
    /// モデル呼び出し中
    Requesting,
    /// 生テキストを JSON として解析中
    Parsing,
    /// スキーマ検証中
    Validating,
    /// 失敗を記録し、リトライ可否を判定
    RetryPending,
    /// 正常終了（検証済みレスポンスを返す）
    Succeeded,
    /// リトライ上限到達（フォールバック投稿を返す）
    Exhausted,
}

impl GenState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenState::Requesting => "requesting",
            GenState::Parsing => "parsing",
            GenState::Validating => "validating",
            GenState::RetryPending => "retry_pending",
            GenState::Succeeded => "succeeded",
            GenState::Exhausted => "exhausted",
        }
    }
}

/// 検証付き投稿生成のユースケース
pub struct PostGenerator {
    completion: Arc<dyn ChatCompletion>,
    prompt: PromptBuilder,
    pacer: Arc<dyn Pacer>,
    log: Arc<dyn Log>,
    max_retries: u32,
}

impl PostGenerator {
    pub fn new(
        completion: Arc<dyn ChatCompletion>,
        prompt: PromptBuilder,
        pacer: Arc<dyn Pacer>,
        log: Arc<dyn Log>,
        max_retries: u32,
    ) -> Self {
        Self {
            completion,
            prompt,
            pacer,
            log,
            max_retries,
        }
    }

    fn log_state(&self, state: GenState, attempt: u32, reason: Option<&str>) {
        let level = match state {
            GenState::RetryPending => LogLevel::Warn,
            GenState::Exhausted => LogLevel::Error,
            _ => LogLevel::Info,
        };
        let mut fields = BTreeMap::new();
        fields.insert("state".to_string(), serde_json::json!(state.as_str()));
        fields.insert("attempt".to_string(), serde_json::json!(attempt));
        fields.insert("max_retries".to_string(), serde_json::json!(self.max_retries));
        if let Some(reason) = reason {
            fields.insert("reason".to_string(), serde_json::json!(reason));
        }
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message: format!("generate: {}", state.as_str()),
            layer: Some("usecase".to_string()),
            kind: Some("generate".to_string()),
            fields: Some(fields),
        });
    }

    /// トピックと履歴から検証済みレスポンスを生成する。
    ///
    /// Err は呼び出し側の誤用（空トピック）のみ。モデル側の失敗は内部で
    /// 吸収し、上限到達時は `GenerationResponse::fallback()` を Ok で返す。
    /// 呼び出し側はフォールバックのタイトルで失敗を判定する。
    pub fn generate(
        &self,
        topic: &str,
        history: &[ChatMessage],
    ) -> Result<GenerationResponse, Error> {
        let topic = Topic::new(topic)?;
        let messages = self.prompt.assemble(&topic, history);

        let mut state = GenState::Requesting;
        let mut attempt: u32 = 0;
        let mut raw = String::new();
        let mut parsed = serde_json::Value::Null;
        let mut last_reason = String::new();

        if self.max_retries == 0 {
            self.log_state(GenState::Exhausted, 0, Some("max_retries is 0"));
            return Ok(GenerationResponse::fallback());
        }

        loop {
            state = match state {
                GenState::Requesting => {
                    attempt += 1;
                    self.log_state(GenState::Requesting, attempt, None);
                    match self.completion.complete(&messages) {
                        Ok(text) => {
                            raw = text;
                            GenState::Parsing
                        }
                        Err(e) => {
                            last_reason = e.to_string();
                            GenState::RetryPending
                        }
                    }
                }
                GenState::Parsing => match parse_object(&raw) {
                    Ok(value) => {
                        parsed = value;
                        GenState::Validating
                    }
                    Err(e) => {
                        last_reason = e.to_string();
                        GenState::RetryPending
                    }
                },
                GenState::Validating => match validate_response(&parsed) {
                    Ok(response) => {
                        self.log_state(GenState::Succeeded, attempt, None);
                        return Ok(response);
                    }
                    Err(e) => {
                        last_reason = e.to_string();
                        GenState::RetryPending
                    }
                },
                GenState::RetryPending => {
                    self.log_state(GenState::RetryPending, attempt, Some(&last_reason));
                    if attempt >= self.max_retries {
                        self.log_state(GenState::Exhausted, attempt, Some(&last_reason));
                        return Ok(GenerationResponse::fallback());
                    }
                    self.pacer.pause(RETRY_BACKOFF);
                    GenState::Requesting
                }
                // 終端状態はループ内に現れない（上の return で抜ける）
                GenState::Succeeded | GenState::Exhausted => return Ok(GenerationResponse::fallback()),
            };
        }
    }
}
