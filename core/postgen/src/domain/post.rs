//! 投稿エンティティ（Post / GenerationResponse）
//!
//! 検証を通過した投稿だけがこの型になる。検証後の変更は行わない
//! （失敗時はレスポンス全体を破棄して再生成する）。

use serde::{Deserialize, Serialize};

/// 段落区切り（本文は空行で段落に分かれる）
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// 1 レスポンスに含まれる投稿数（ちょうど 4。3 でも 5 でも不合格）
pub const EXPECTED_POST_COUNT: usize = 4;

/// リトライ上限到達時のフォールバック投稿のタイトル。
/// 呼び出し側はこのタイトルで「生成失敗」を判定する。
pub const FALLBACK_TITLE: &str = "Error Generating Posts";

/// フォールバック投稿の本文
pub const FALLBACK_CONTENT: &str =
    "We encountered an error while generating your posts. Please try again.";

/// 1 件の投稿ドラフト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
    /// 即時公開フラグ（呼び出し側の意図。core では解釈しない）
    pub post: bool,
    /// 公開予定時刻（null または文字列。日時の妥当性は検証しない）
    pub schedule: Option<String>,
}

impl Post {
    /// リトライ上限到達時に返すフォールバック投稿
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            content: FALLBACK_CONTENT.to_string(),
            post: false,
            schedule: None,
        }
    }

    /// フォールバック投稿かどうか（タイトルで判定）
    pub fn is_fallback(&self) -> bool {
        self.title == FALLBACK_TITLE
    }
}

/// 生成結果。`posts` だけを持つラッパー。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub posts: Vec<Post>,
}

impl GenerationResponse {
    /// フォールバック投稿 1 件だけを含むレスポンス
    pub fn fallback() -> Self {
        Self {
            posts: vec![Post::fallback()],
        }
    }

    /// リトライ上限到達による失敗レスポンスかどうか
    pub fn is_fallback(&self) -> bool {
        self.posts.len() == 1 && self.posts[0].is_fallback()
    }
}

/// content 中の `#` 始まりトークンを抽出する（空白区切り、位置は問わない）
pub fn hashtag_tokens(content: &str) -> Vec<&str> {
    content
        .split_whitespace()
        .filter(|t| t.starts_with('#'))
        .collect()
}

/// 全トークンが `#` 始まりの（ハッシュタグだけの）段落かどうか
fn is_hashtag_only(segment: &str) -> bool {
    let mut tokens = segment.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|t| t.starts_with('#'))
}

/// 本文段落を元の並びのまま返す。
/// 空（trim 後に空）の区間とハッシュタグだけの区間は本文として数えない。
pub fn body_paragraphs(content: &str) -> Vec<&str> {
    content
        .split(PARAGRAPH_DELIMITER)
        .filter(|s| !s.trim().is_empty() && !is_hashtag_only(s))
        .collect()
}
