//! チャット補完の Outbound ポート
//!
//! 組み立て済みメッセージ列を 1 回の補完呼び出しに渡し、生テキストを受け取る。
//! リトライはこの trait の外側（repair loop）が行う。1 呼び出し = 1 リクエスト。

use common::error::Error;
use common::msg::ChatMessage;

/// チャット補完の抽象（テストでは StubChat で差し替え）
pub trait ChatCompletion: Send + Sync {
    /// メッセージ列を送り、モデルの応答テキストを返す
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, Error>;
}
