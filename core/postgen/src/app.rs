//! アプリケーション本体: 生成と出力の取りまとめ

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use common::error::Error;
use common::msg::ChatMessage;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};

use crate::adapter::StdoutChunkSink;
use crate::cli::Config;
use crate::wiring::App;

/// --history で渡された JSON ファイルを読み込む
pub fn load_history(path: &Path) -> Result<Vec<ChatMessage>, Error> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io_msg(format!("Failed to read history file {}: {}", path.display(), e)))?;
    serde_json::from_str(&text)
        .map_err(|e| Error::json(format!("Invalid history file {}: {}", path.display(), e)))
}

/// 生成して出力する。戻り値は終了コード
/// （リトライ上限到達でフォールバックを返したときは 1）。
pub fn run_app(app: &App, config: &Config) -> Result<i32, Error> {
    let topic = config.topic_args.join(" ");
    let history = match &config.history {
        Some(path) => load_history(path)?,
        None => Vec::new(),
    };

    let _ = app.logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Info,
        message: "generation started".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: {
            let mut m = BTreeMap::new();
            m.insert("topic".to_string(), serde_json::json!(topic));
            m.insert("history_len".to_string(), serde_json::json!(history.len()));
            Some(m)
        },
    });

    let response = app.generator.generate(&topic, &history)?;
    let exhausted = response.is_fallback();

    if config.json {
        let text = serde_json::to_string_pretty(&response)
            .map_err(|e| Error::json(e.to_string()))?;
        println!("{}", text);
    } else {
        let mut sink = StdoutChunkSink::new();
        for post in &response.posts {
            app.streamer.stream(post, &mut sink)?;
        }
    }

    let code = if exhausted { 1 } else { 0 };
    let _ = app.logger.log(&LogRecord {
        ts: now_iso8601(),
        level: LogLevel::Info,
        message: "generation finished".to_string(),
        layer: Some("cli".to_string()),
        kind: Some("lifecycle".to_string()),
        fields: {
            let mut m = BTreeMap::new();
            m.insert("exit_code".to_string(), serde_json::json!(code));
            m.insert("posts".to_string(), serde_json::json!(response.posts.len()));
            Some(m)
        },
    });
    Ok(code)
}
