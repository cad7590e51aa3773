//! チャンク出力先の Outbound ポート

use crate::domain::Chunk;
use common::error::Error;

/// ストリーミングチャンクの出力先
///
/// 実装は stdout への JSONL 出力や、テスト用の収集 Sink など。
pub trait ChunkSink: Send {
    /// 1 チャンクを受け取る
    fn on_chunk(&mut self, chunk: &Chunk) -> Result<(), Error>;

    /// 1 投稿分のシーケンス終端
    fn on_end(&mut self) -> Result<(), Error>;
}
