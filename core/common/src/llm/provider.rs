//! LLMプロバイダのトレイト定義

use crate::error::Error;
use crate::llm::params::GenerationParams;
use crate::msg::ChatMessage;
use serde_json::Value;

/// チャット完了プロバイダのトレイト
///
/// 各プロバイダ（Groq、Echoなど）はこのトレイトを実装する。
/// メッセージ列はプロンプトビルダーが組み立て済みのものをそのまま受け取る。
pub trait ChatProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `messages` - 組み立て済みメッセージ列（順序は保持される）
    /// * `params` - 生成パラメータ
    fn make_request_payload(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスから完了テキストを抽出（存在しない場合はNone）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
