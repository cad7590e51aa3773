//! ストリーミングチャンク型
//!
//! 検証済み投稿を段階表示するための型付きチャンク。
//! ワイヤ形式は `{"type": ..., "content": ..., "timestamp": ...}`。

use serde::{Deserialize, Serialize};

/// チャンク種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    Title,
    Paragraph,
    Hashtags,
    /// フォールバック投稿を流すときに 1 件だけ出す
    Error,
}

/// ストリーミングチャンク
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    #[serde(rename = "type")]
    pub kind: ChunkKind,
    pub content: String,
    /// RFC3339 タイムスタンプ
    pub timestamp: String,
}

impl Chunk {
    pub fn new(kind: ChunkKind, content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }
}
