//! レスポンス検証
//!
//! モデルの生テキストを Post スキーマに対して厳格に検証する。
//! 失敗は「どの投稿のどの検査が落ちたか」を持ち、最初に落ちた検査が報告理由になる。

use crate::domain::post::{
    body_paragraphs, hashtag_tokens, GenerationResponse, Post, EXPECTED_POST_COUNT,
};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error as ThisError;

/// タイトルの最大語数（空白区切り）
pub const MAX_TITLE_WORDS: usize = 8;

/// 本文の最小段落数
pub const MIN_BODY_PARAGRAPHS: usize = 4;

/// ハッシュタグ数の下限・上限（両端を含む）
pub const MIN_HASHTAGS: usize = 3;
pub const MAX_HASHTAGS: usize = 5;

/// 1 投稿内の不変条件違反
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PostViolation {
    #[error("post is not a JSON object")]
    NotAnObject,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("field {field} must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("title has {found} words (max {max})")]
    TitleTooLong { max: usize, found: usize },
    #[error("title contains emoji")]
    TitleHasEmoji,
    #[error("content has {found} body paragraphs (min {min})")]
    TooFewParagraphs { min: usize, found: usize },
    #[error("content has {found} hashtags (expected {min}-{max})")]
    HashtagCount {
        min: usize,
        max: usize,
        found: usize,
    },
}

/// レスポンス全体の検証失敗
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    /// テキストが JSON オブジェクトとして読めない（Parsing 段階の失敗）
    #[error("malformed output: {0}")]
    MalformedOutput(String),
    #[error("missing 'posts' array in response")]
    MissingPosts,
    #[error("expected {expected} posts, found {found}")]
    WrongPostCount { expected: usize, found: usize },
    #[error("post {index}: {violation}")]
    InvalidPost {
        index: usize,
        violation: PostViolation,
    },
}

fn title_has_emoji(title: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let re = PATTERN
        .get_or_init(|| Regex::new(r"[\p{Emoji_Presentation}\p{Extended_Pictographic}]").ok());
    re.as_ref().is_some_and(|re| re.is_match(title))
}

/// モデルの生テキストを JSON オブジェクトとして解析する。
/// 配列・スカラーもオブジェクトではないので Parsing 段階の失敗として扱う。
pub fn parse_object(text: &str) -> Result<Value, ValidationError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::MalformedOutput(e.to_string()))?;
    if !value.is_object() {
        return Err(ValidationError::MalformedOutput(
            "response is not a JSON object".to_string(),
        ));
    }
    Ok(value)
}

/// 1 投稿を検証する。検査順は必須キー → タイトル → 本文段落 → ハッシュタグ → 型。
pub fn validate_post(value: &Value) -> Result<Post, PostViolation> {
    let obj = value.as_object().ok_or(PostViolation::NotAnObject)?;

    for key in ["title", "content", "post", "schedule"] {
        if !obj.contains_key(key) {
            return Err(PostViolation::MissingField(key));
        }
    }

    let title = obj["title"].as_str().ok_or(PostViolation::WrongType {
        field: "title",
        expected: "string",
    })?;
    let words = title.split_whitespace().count();
    if words > MAX_TITLE_WORDS {
        return Err(PostViolation::TitleTooLong {
            max: MAX_TITLE_WORDS,
            found: words,
        });
    }
    if title_has_emoji(title) {
        return Err(PostViolation::TitleHasEmoji);
    }

    let content = obj["content"].as_str().ok_or(PostViolation::WrongType {
        field: "content",
        expected: "string",
    })?;
    let paragraphs = body_paragraphs(content).len();
    if paragraphs < MIN_BODY_PARAGRAPHS {
        return Err(PostViolation::TooFewParagraphs {
            min: MIN_BODY_PARAGRAPHS,
            found: paragraphs,
        });
    }

    let hashtags = hashtag_tokens(content).len();
    if !(MIN_HASHTAGS..=MAX_HASHTAGS).contains(&hashtags) {
        return Err(PostViolation::HashtagCount {
            min: MIN_HASHTAGS,
            max: MAX_HASHTAGS,
            found: hashtags,
        });
    }

    let post = obj["post"].as_bool().ok_or(PostViolation::WrongType {
        field: "post",
        expected: "boolean",
    })?;

    let schedule = match &obj["schedule"] {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        _ => {
            return Err(PostViolation::WrongType {
                field: "schedule",
                expected: "null or string",
            })
        }
    };

    Ok(Post {
        title: title.to_string(),
        content: content.to_string(),
        post,
        schedule,
    })
}

/// 解析済みオブジェクトをレスポンスとして検証する。
/// `posts` がちょうど 4 件で、全投稿が不変条件を満たすときだけ成功。
pub fn validate_response(value: &Value) -> Result<GenerationResponse, ValidationError> {
    let posts = value
        .get("posts")
        .and_then(|p| p.as_array())
        .ok_or(ValidationError::MissingPosts)?;

    if posts.len() != EXPECTED_POST_COUNT {
        return Err(ValidationError::WrongPostCount {
            expected: EXPECTED_POST_COUNT,
            found: posts.len(),
        });
    }

    let mut validated = Vec::with_capacity(posts.len());
    for (index, post) in posts.iter().enumerate() {
        let post =
            validate_post(post).map_err(|violation| ValidationError::InvalidPost { index, violation })?;
        validated.push(post);
    }

    Ok(GenerationResponse { posts: validated })
}

/// 生テキストからレスポンスまでの検証（Parsing + Validating を一括で行う入口）
#[allow(dead_code)]
pub fn validate_response_text(text: &str) -> Result<GenerationResponse, ValidationError> {
    let value = parse_object(text)?;
    validate_response(&value)
}
