//! 生成トピックの newtype
//!
//! 空文字・空白のみのトピックは呼び出し側の誤用として即座に拒否する（リトライしない）。

use common::error::Error;

/// 投稿生成のトピック（trim 済み・非空が保証される）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// トピックを検証して生成する。trim 後に空なら usage エラー。
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_argument(
                "No topic provided. Please provide a topic to generate posts for.",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
