//! 生成パラメータ
//!
//! チャット完了リクエストに載せるサンプリング系パラメータ。コアロジックにはハードコードせず、
//! 設定（配線・CLI）から渡す。

/// チャット完了の生成パラメータ
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// 温度（0.0〜1.0）
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    /// response_format に json_object を指定するか
    pub response_format_json: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 2000,
            top_p: 0.95,
            frequency_penalty: 0.5,
            presence_penalty: 0.5,
            response_format_json: true,
        }
    }
}
