//! PostGenerator の repair loop シナリオテスト

use std::sync::Arc;

use crate::adapter::stub_chat::{StubChat, StubReply};
use crate::tests::support::RecordingPacer;
use crate::usecase::generate::RETRY_BACKOFF;
use crate::usecase::{PostGenerator, PromptBuilder, DEFAULT_MAX_RETRIES};
use common::adapter::NoopLog;
use serde_json::json;

fn valid_content(hashtags: usize) -> String {
    let tags: Vec<String> = (1..=hashtags).map(|i| format!("#Tag{}", i)).collect();
    format!(
        "First Paragraph Here With Some Words.\n\nSecond Paragraph Here With Some Words.\n\nThird Paragraph Here With Some Words.\n\nFourth Paragraph Here With Some Words.\n\n{}",
        tags.join(" ")
    )
}

fn valid_post_json(hashtags: usize) -> serde_json::Value {
    json!({
        "title": "The Future Of Career Growth",
        "content": valid_content(hashtags),
        "post": false,
        "schedule": null
    })
}

fn valid_response_text() -> String {
    json!({
        "posts": [
            valid_post_json(4),
            valid_post_json(4),
            valid_post_json(4),
            valid_post_json(4)
        ]
    })
    .to_string()
}

fn generator(chat: Arc<StubChat>, pacer: Arc<RecordingPacer>, max_retries: u32) -> PostGenerator {
    PostGenerator::new(
        chat,
        PromptBuilder::default(),
        pacer,
        Arc::new(NoopLog),
        max_retries,
    )
}

#[test]
fn test_generate_career_growth_all_posts_intact() {
    let chat = Arc::new(StubChat::always_text(&valid_response_text()));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), Arc::clone(&pacer), DEFAULT_MAX_RETRIES);

    let response = gen.generate("career growth", &[]).unwrap();
    assert_eq!(response.posts.len(), 4);
    assert!(!response.is_fallback());
    // 投稿は検証を通過したまま（無変更）
    for post in &response.posts {
        assert_eq!(post.title, "The Future Of Career Growth");
        assert!(!post.post);
        assert!(post.schedule.is_none());
    }
    assert_eq!(chat.calls(), 1);
    assert!(pacer.pauses().is_empty(), "success must not back off");
}

#[test]
fn test_generate_non_json_exhausts_to_fallback() {
    let chat = Arc::new(StubChat::always_text("Sorry, I cannot help."));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), Arc::clone(&pacer), DEFAULT_MAX_RETRIES);

    let response = gen.generate("career growth", &[]).unwrap();
    assert!(response.is_fallback());
    assert_eq!(response.posts[0].title, "Error Generating Posts");
    assert!(!response.posts[0].post);
    assert!(response.posts[0].schedule.is_none());
    // 上限回数ちょうどの呼び出し（max_retries + 1 ではない）
    assert_eq!(chat.calls(), DEFAULT_MAX_RETRIES as usize);
    // バックオフはリトライ間のみ（= 呼び出し回数 - 1）
    assert_eq!(pacer.pauses(), vec![RETRY_BACKOFF; DEFAULT_MAX_RETRIES as usize - 1]);
}

#[test]
fn test_generate_json_array_is_parsing_failure() {
    let chat = Arc::new(StubChat::always_text("[1, 2, 3]"));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), pacer, DEFAULT_MAX_RETRIES);

    let response = gen.generate("career growth", &[]).unwrap();
    assert!(response.is_fallback());
    assert_eq!(chat.calls(), DEFAULT_MAX_RETRIES as usize);
}

#[test]
fn test_generate_wrong_post_count_fails_every_attempt() {
    let text = json!({ "posts": [valid_post_json(3), valid_post_json(3), valid_post_json(3)] })
        .to_string();
    let chat = Arc::new(StubChat::always_text(&text));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), pacer, DEFAULT_MAX_RETRIES);

    let response = gen.generate("career growth", &[]).unwrap();
    assert!(response.is_fallback());
    assert_eq!(chat.calls(), DEFAULT_MAX_RETRIES as usize);
}

#[test]
fn test_generate_recovers_on_second_attempt() {
    let bad = json!({
        "posts": [valid_post_json(2), valid_post_json(4), valid_post_json(4), valid_post_json(4)]
    })
    .to_string();
    let chat = Arc::new(StubChat::new(vec![
        StubReply::Text(bad),
        StubReply::Text(valid_response_text()),
    ]));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), Arc::clone(&pacer), DEFAULT_MAX_RETRIES);

    let response = gen.generate("career growth", &[]).unwrap();
    assert!(!response.is_fallback());
    assert_eq!(chat.calls(), 2);
    assert_eq!(pacer.pauses(), vec![RETRY_BACKOFF]);
}

#[test]
fn test_generate_upstream_error_counts_toward_budget() {
    let chat = Arc::new(StubChat::new(vec![
        StubReply::Fail("HTTP 500".to_string()),
        StubReply::Fail("HTTP 500".to_string()),
        StubReply::Text(valid_response_text()),
    ]));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), pacer, DEFAULT_MAX_RETRIES);

    // 上流エラーも吸収され、予算内で回復すれば成功
    let response = gen.generate("career growth", &[]).unwrap();
    assert!(!response.is_fallback());
    assert_eq!(chat.calls(), 3);
}

#[test]
fn test_generate_empty_topic_makes_no_calls() {
    let chat = Arc::new(StubChat::always_text(&valid_response_text()));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), pacer, DEFAULT_MAX_RETRIES);

    let err = gen.generate("   ", &[]).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(chat.calls(), 0);
}

#[test]
fn test_generate_single_retry_no_backoff() {
    let chat = Arc::new(StubChat::always_text("not json"));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), Arc::clone(&pacer), 1);

    let response = gen.generate("career growth", &[]).unwrap();
    assert!(response.is_fallback());
    assert_eq!(chat.calls(), 1);
    assert!(pacer.pauses().is_empty());
}

#[test]
fn test_generate_zero_retries_is_immediate_fallback() {
    let chat = Arc::new(StubChat::always_text(&valid_response_text()));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), pacer, 0);

    let response = gen.generate("career growth", &[]).unwrap();
    assert!(response.is_fallback());
    assert_eq!(chat.calls(), 0);
}

#[test]
fn test_generate_schema_failure_title_emoji() {
    let mut post = valid_post_json(4);
    post["title"] = json!("Great News 🎉");
    let text = json!({ "posts": [post.clone(), post.clone(), post.clone(), post] }).to_string();
    let chat = Arc::new(StubChat::always_text(&text));
    let pacer = Arc::new(RecordingPacer::new());
    let gen = generator(Arc::clone(&chat), pacer, DEFAULT_MAX_RETRIES);

    let response = gen.generate("career growth", &[]).unwrap();
    assert!(response.is_fallback());
    assert_eq!(chat.calls(), DEFAULT_MAX_RETRIES as usize);
}
