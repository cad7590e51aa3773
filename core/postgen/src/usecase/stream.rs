//! PostStreamer: 検証済み投稿の段階ストリーミング
//!
//! 1 投稿を title → 本文段落 → hashtags の順で型付きチャンクに射影する。
//! フォールバック投稿を渡されたときは error チャンク 1 件だけを出す
//! （失敗の投稿をそのまま流さない方針）。

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{body_paragraphs, hashtag_tokens, Chunk, ChunkKind, Post};
use crate::ports::outbound::{ChunkSink, Pacer};
use common::error::Error;
use common::ports::outbound::Clock;

/// タイトルチャンク後の待機
pub const TITLE_PAUSE: Duration = Duration::from_millis(200);

/// 各段落チャンク後の待機
pub const PARAGRAPH_PAUSE: Duration = Duration::from_millis(100);

/// hashtags チャンク後（シーケンス終端前）の待機
pub const HASHTAGS_PAUSE: Duration = Duration::from_millis(300);

/// 投稿を型付きチャンク列として出力するユースケース
pub struct PostStreamer {
    clock: Arc<dyn Clock>,
    pacer: Arc<dyn Pacer>,
}

impl PostStreamer {
    pub fn new(clock: Arc<dyn Clock>, pacer: Arc<dyn Pacer>) -> Self {
        Self { clock, pacer }
    }

    fn timestamp(&self) -> String {
        self.clock.now().to_rfc3339()
    }

    /// 1 投稿をチャンク列として sink へ流す。各呼び出しが独立したシーケンス
    /// （再開不可。再生するには同じ投稿でもう一度呼ぶ）。
    pub fn stream(&self, post: &Post, sink: &mut dyn ChunkSink) -> Result<(), Error> {
        if post.is_fallback() {
            sink.on_chunk(&Chunk::new(
                ChunkKind::Error,
                post.content.clone(),
                self.timestamp(),
            ))?;
            return sink.on_end();
        }

        sink.on_chunk(&Chunk::new(
            ChunkKind::Title,
            post.title.clone(),
            self.timestamp(),
        ))?;
        self.pacer.pause(TITLE_PAUSE);

        for paragraph in body_paragraphs(&post.content) {
            sink.on_chunk(&Chunk::new(
                ChunkKind::Paragraph,
                paragraph,
                self.timestamp(),
            ))?;
            self.pacer.pause(PARAGRAPH_PAUSE);
        }

        let hashtags = hashtag_tokens(&post.content);
        if !hashtags.is_empty() {
            sink.on_chunk(&Chunk::new(
                ChunkKind::Hashtags,
                hashtags.join(" "),
                self.timestamp(),
            ))?;
        }
        self.pacer.pause(HASHTAGS_PAUSE);

        sink.on_end()
    }
}
